//! Implied volatility backed out of an observed option premium.
//!
//! The only instrument whose maturity, risk-free rate and repo rate accept
//! zero; every other schema requires them strictly positive.

use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};
use crate::types::OptionType;

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = "/implied-volatility";

instrument_form! {
    /// Raw inputs for an implied volatility request.
    pub struct ImpliedVolatilityForm {
        spot ("S", ""): FieldSpec::text("S", "Spot Price"),
        strike ("K", ""): FieldSpec::text("K", "Strike Price"),
        maturity ("T", ""): FieldSpec::text("T", "Time to Maturity (years)"),
        rate ("r", ""): FieldSpec::text("r", "Risk Free Rate"),
        option_premium ("option_premium", ""): FieldSpec::text("option_premium", "Option Premium"),
        repo_rate ("q", ""): FieldSpec::text("q", "Repo Rate"),
        option_type ("option_type", "call"):
            FieldSpec::choice("option_type", "Option Type", OptionType::TOKENS),
    }
}

impl ImpliedVolatilityForm {
    pub fn validate(&self) -> Result<ImpliedVolatilityRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let s = check.positive("S", "Spot price", &self.spot);
        let k = check.positive("K", "Strike price", &self.strike);
        let t = check.non_negative("T", "Time to maturity", &self.maturity);
        let r = check.non_negative("r", "Risk free rate", &self.rate);
        let option_premium =
            check.positive("option_premium", "Option premium", &self.option_premium);
        let q = check.non_negative("q", "Repo rate", &self.repo_rate);
        let option_type = check.one_of(
            "option_type",
            "Option type",
            &self.option_type,
            OptionType::TOKENS,
            OptionType::from_token,
            OptionType::Call,
        );
        check.finish(ImpliedVolatilityRequest {
            s,
            k,
            t,
            r,
            option_premium,
            q,
            option_type,
        })
    }
}

/// Validated request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolatilityRequest {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub r: f64,
    pub option_premium: f64,
    pub q: f64,
    pub option_type: OptionType,
}

/// Server response: the backed-out volatility plus the echoed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolatilityResponse {
    pub implied_volatility: Figure,
    pub input: ImpliedVolatilityRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ImpliedVolatilityForm {
        ImpliedVolatilityForm {
            spot: "100".into(),
            strike: "105".into(),
            maturity: "0".into(),
            rate: "0".into(),
            option_premium: "4.5".into(),
            repo_rate: "0".into(),
            option_type: "call".into(),
        }
    }

    #[test]
    fn zero_maturity_rate_and_repo_rate_are_accepted() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.t, 0.0);
        assert_eq!(request.r, 0.0);
        assert_eq!(request.q, 0.0);
    }

    #[test]
    fn negative_rate_reports_the_bound_message() {
        let mut form = filled_form();
        form.rate = "-0.01".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("r"),
            Some("Risk free rate must be greater than or equal to 0")
        );
    }

    #[test]
    fn non_numeric_premium_reports_a_type_error() {
        let mut form = filled_form();
        form.option_premium = "free".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("option_premium"),
            Some("Option premium must be a number")
        );
    }

    #[test]
    fn response_volatility_may_be_text() {
        let body = r#"{"implied_volatility": "NaN", "input": {"S": 100.0, "K": 105.0,
            "T": 0.0, "r": 0.0, "option_premium": 4.5, "q": 0.0, "option_type": "call"}}"#;
        let response: ImpliedVolatilityResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.implied_volatility, Figure::Text("NaN".to_string()));
    }
}
