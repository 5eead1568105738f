//! Closed-form geometric Asian option.

use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};
use crate::types::OptionType;

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = "/closed-form-geometric-asian-option";

instrument_form! {
    /// Raw inputs for a geometric Asian option request.
    pub struct GeometricAsianForm {
        spot ("S", ""): FieldSpec::text("S", "Spot Price"),
        strike ("K", ""): FieldSpec::text("K", "Strike Price"),
        maturity ("T", ""): FieldSpec::text("T", "Time to Maturity (years)"),
        rate ("r", ""): FieldSpec::text("r", "Risk Free Rate"),
        volatility ("sigma", ""): FieldSpec::text("sigma", "Volatility"),
        periods ("n", ""): FieldSpec::text("n", "Number of Periods"),
        option_type ("option_type", "call"):
            FieldSpec::choice("option_type", "Option Type", OptionType::TOKENS),
    }
}

impl GeometricAsianForm {
    pub fn validate(&self) -> Result<GeometricAsianRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let s = check.positive("S", "Spot price", &self.spot);
        let k = check.positive("K", "Strike price", &self.strike);
        let t = check.positive("T", "Time to maturity", &self.maturity);
        let r = check.positive("r", "Risk free rate", &self.rate);
        let sigma = check.positive("sigma", "Volatility", &self.volatility);
        let n = check.positive_integer("n", "Number of periods", &self.periods);
        let option_type = check.one_of(
            "option_type",
            "Option type",
            &self.option_type,
            OptionType::TOKENS,
            OptionType::from_token,
            OptionType::Call,
        );
        check.finish(GeometricAsianRequest {
            s,
            k,
            t,
            r,
            sigma,
            n,
            option_type,
        })
    }
}

/// Validated request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricAsianRequest {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
    pub n: u32,
    pub option_type: OptionType,
}

/// Server response: a closed-form price plus the echoed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricAsianResponse {
    pub price: Figure,
    pub input: GeometricAsianRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> GeometricAsianForm {
        GeometricAsianForm {
            spot: "100".into(),
            strike: "100".into(),
            maturity: "3".into(),
            rate: "0.05".into(),
            volatility: "0.3".into(),
            periods: "50".into(),
            option_type: "call".into(),
        }
    }

    #[test]
    fn valid_form_produces_coerced_request() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.n, 50);
        assert_eq!(request.sigma, 0.3);
    }

    #[test]
    fn fractional_period_count_reports_integer_message() {
        let mut form = filled_form();
        form.periods = "50.5".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("n"), Some("Number of periods must be an integer"));
    }

    #[test]
    fn unknown_option_type_token_is_rejected() {
        let mut form = filled_form();
        form.option_type = "straddle".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("option_type"),
            Some("Option type must be either call or put")
        );
    }
}
