//! Vanilla interest rate swap valuation request.
//!
//! Dates are validated individually; trade <= effective <= maturity is
//! deliberately not enforced here and is left to the server.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};
use crate::types::{BusinessDayConvention, DayCount, PaymentFrequency};

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = "/interest-rate-swap";

instrument_form! {
    /// Raw inputs for an interest rate swap valuation request.
    pub struct SwapForm {
        trade_date ("tradeDate", ""): FieldSpec::text("tradeDate", "Trade Date"),
        effective_date ("effectiveDate", ""): FieldSpec::text("effectiveDate", "Effective Date"),
        maturity_date ("maturityDate", ""): FieldSpec::text("maturityDate", "Maturity Date"),
        notional ("notional", ""): FieldSpec::text("notional", "Notional"),
        fixed_rate ("fixedRate", ""): FieldSpec::text("fixedRate", "Fixed Rate (%)"),
        float_spread ("floatSpread", ""): FieldSpec::text("floatSpread", "Float Spread (bps)"),
        currency ("currency", "USD"): FieldSpec::text("currency", "Currency"),
        fixed_frequency ("fixedFrequency", "6M"):
            FieldSpec::choice("fixedFrequency", "Fixed Frequency", PaymentFrequency::TOKENS),
        float_frequency ("floatFrequency", "3M"):
            FieldSpec::choice("floatFrequency", "Float Frequency", PaymentFrequency::TOKENS),
        day_count_fixed ("dayCountFixed", "30/360"):
            FieldSpec::choice("dayCountFixed", "Fixed Day Count", DayCount::TOKENS),
        day_count_float ("dayCountFloat", "ACT/360"):
            FieldSpec::choice("dayCountFloat", "Float Day Count", DayCount::TOKENS),
        business_day_convention ("businessDayConvention", "Modified Following"):
            FieldSpec::choice(
                "businessDayConvention",
                "Business Day Convention",
                BusinessDayConvention::TOKENS,
            ),
    }
}

impl SwapForm {
    pub fn validate(&self) -> Result<SwapRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let trade_date = check.date("tradeDate", "Trade date", &self.trade_date);
        let effective_date = check.date("effectiveDate", "Effective date", &self.effective_date);
        let maturity_date = check.date("maturityDate", "Maturity date", &self.maturity_date);
        let notional = check.positive("notional", "Notional", &self.notional);
        let fixed_rate = check.positive("fixedRate", "Fixed rate", &self.fixed_rate);
        let float_spread = check.any_number("floatSpread", "Float spread", &self.float_spread);
        let currency = check.exact_length("currency", "Currency", &self.currency, 3);
        let fixed_frequency = check.one_of(
            "fixedFrequency",
            "Fixed frequency",
            &self.fixed_frequency,
            PaymentFrequency::TOKENS,
            PaymentFrequency::from_token,
            PaymentFrequency::SemiAnnual,
        );
        let float_frequency = check.one_of(
            "floatFrequency",
            "Float frequency",
            &self.float_frequency,
            PaymentFrequency::TOKENS,
            PaymentFrequency::from_token,
            PaymentFrequency::Quarterly,
        );
        let day_count_fixed = check.one_of(
            "dayCountFixed",
            "Fixed day count",
            &self.day_count_fixed,
            DayCount::TOKENS,
            DayCount::from_token,
            DayCount::Thirty360,
        );
        let day_count_float = check.one_of(
            "dayCountFloat",
            "Float day count",
            &self.day_count_float,
            DayCount::TOKENS,
            DayCount::from_token,
            DayCount::Act360,
        );
        let business_day_convention = check.one_of(
            "businessDayConvention",
            "Business day convention",
            &self.business_day_convention,
            BusinessDayConvention::TOKENS,
            BusinessDayConvention::from_token,
            BusinessDayConvention::ModifiedFollowing,
        );
        check.finish(SwapRequest {
            trade_date,
            effective_date,
            maturity_date,
            notional,
            fixed_rate,
            float_spread,
            currency,
            fixed_frequency,
            float_frequency,
            day_count_fixed,
            day_count_float,
            business_day_convention,
        })
    }
}

/// Validated request body; the wire format is camelCase with ISO dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub trade_date: NaiveDate,
    pub effective_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub notional: f64,
    pub fixed_rate: f64,
    pub float_spread: f64,
    pub currency: String,
    pub fixed_frequency: PaymentFrequency,
    pub float_frequency: PaymentFrequency,
    pub day_count_fixed: DayCount,
    pub day_count_float: DayCount,
    pub business_day_convention: BusinessDayConvention,
}

/// One scheduled leg payment: date, amount and discount factor, in leg
/// schedule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cashflow {
    pub date: String,
    pub amount: Figure,
    pub df: Figure,
}

/// Server response: the NPV triple and both leg schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapResponse {
    pub npv: Figure,
    pub fixed_leg_npv: Figure,
    pub float_leg_npv: Figure,
    pub fixed_cashflows: Vec<Cashflow>,
    pub float_cashflows: Vec<Cashflow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SwapForm {
        SwapForm {
            trade_date: "2025-06-02".into(),
            effective_date: "2025-06-04".into(),
            maturity_date: "2030-06-04".into(),
            notional: "1000000".into(),
            fixed_rate: "3.5".into(),
            float_spread: "12.5".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_uses_the_default_conventions() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.currency, "USD");
        assert_eq!(request.fixed_frequency, PaymentFrequency::SemiAnnual);
        assert_eq!(request.float_frequency, PaymentFrequency::Quarterly);
        assert_eq!(request.day_count_fixed, DayCount::Thirty360);
        assert_eq!(request.day_count_float, DayCount::Act360);
        assert_eq!(
            request.business_day_convention,
            BusinessDayConvention::ModifiedFollowing
        );
    }

    #[test]
    fn request_serialises_camel_case_with_iso_dates() {
        let value = serde_json::to_value(filled_form().validate().unwrap()).unwrap();
        assert_eq!(value["tradeDate"], "2025-06-02");
        assert_eq!(value["maturityDate"], "2030-06-04");
        assert_eq!(value["fixedFrequency"], "6M");
        assert_eq!(value["dayCountFloat"], "ACT/360");
        assert_eq!(value["businessDayConvention"], "Modified Following");
        assert_eq!(value["floatSpread"], 12.5);
    }

    #[test]
    fn date_ordering_is_not_checked_client_side() {
        let mut form = filled_form();
        form.maturity_date = "2020-01-01".into();
        // Maturity before trade date still validates; the server decides.
        assert!(form.validate().is_ok());
    }

    #[test]
    fn malformed_date_reports_a_date_message() {
        let mut form = filled_form();
        form.effective_date = "04/06/2025".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("effectiveDate"),
            Some("Effective date must be a valid date (YYYY-MM-DD)")
        );
    }

    #[test]
    fn currency_must_be_three_characters() {
        for (raw, ok) in [("USD", true), ("JPY", true), ("US", false), ("USDT", false)] {
            let mut form = filled_form();
            form.currency = raw.into();
            assert_eq!(form.validate().is_ok(), ok, "{raw}");
        }
    }

    #[test]
    fn negative_float_spread_is_allowed() {
        let mut form = filled_form();
        form.float_spread = "-25".into();
        let request = form.validate().unwrap();
        assert_eq!(request.float_spread, -25.0);
    }

    #[test]
    fn response_preserves_cashflow_order() {
        let body = r#"{
            "npv": 1234.56,
            "fixed_leg_npv": "-170000.12",
            "float_leg_npv": 171234.68,
            "fixed_cashflows": [
                {"date": "2025-12-04", "amount": 17500.0, "df": 0.982345},
                {"date": "2026-06-04", "amount": 17500.0, "df": 0.965432}
            ],
            "float_cashflows": [
                {"date": "2025-09-04", "amount": 8200.0, "df": 0.991234}
            ]
        }"#;
        let response: SwapResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.fixed_cashflows.len(), 2);
        assert_eq!(response.fixed_cashflows[0].date, "2025-12-04");
        assert_eq!(response.fixed_cashflows[1].date, "2026-06-04");
        // String-typed numerics pass through untouched.
        assert_eq!(
            response.fixed_leg_npv,
            Figure::Text("-170000.12".to_string())
        );
    }
}
