//! Monte Carlo arithmetic Asian option.
//!
//! Posts to the same Monte Carlo endpoint as the arithmetic basket
//! instrument; the request body carries the Asian parameter set.

use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};
use crate::types::{ControlVariate, OptionType};

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = super::arithmetic_basket::PATH;

instrument_form! {
    /// Raw inputs for an arithmetic Asian option request.
    pub struct ArithmeticAsianForm {
        spot ("S", ""): FieldSpec::text("S", "Spot Price"),
        strike ("K", ""): FieldSpec::text("K", "Strike Price"),
        maturity ("T", ""): FieldSpec::text("T", "Time to Maturity (years)"),
        rate ("r", ""): FieldSpec::text("r", "Risk Free Rate"),
        volatility ("sigma", ""): FieldSpec::text("sigma", "Volatility"),
        periods ("n", ""): FieldSpec::text("n", "Number of Periods"),
        simulations ("m", ""): FieldSpec::text("m", "Number of Simulations"),
        option_type ("option_type", "call"):
            FieldSpec::choice("option_type", "Option Type", OptionType::TOKENS),
        control_variate ("control_variate", "none"):
            FieldSpec::choice("control_variate", "Control Variate", ControlVariate::TOKENS),
    }
}

impl ArithmeticAsianForm {
    pub fn validate(&self) -> Result<ArithmeticAsianRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let s = check.positive("S", "Spot price", &self.spot);
        let k = check.positive("K", "Strike price", &self.strike);
        let t = check.positive("T", "Time to maturity", &self.maturity);
        let r = check.positive("r", "Risk free rate", &self.rate);
        let sigma = check.positive("sigma", "Volatility", &self.volatility);
        let n = check.positive_integer("n", "Number of periods", &self.periods);
        let m = check.positive_integer("m", "Number of simulations", &self.simulations);
        let option_type = check.one_of(
            "option_type",
            "Option type",
            &self.option_type,
            OptionType::TOKENS,
            OptionType::from_token,
            OptionType::Call,
        );
        let control_variate = check.one_of(
            "control_variate",
            "Control variate",
            &self.control_variate,
            ControlVariate::TOKENS,
            ControlVariate::from_token,
            ControlVariate::None,
        );
        check.finish(ArithmeticAsianRequest {
            s,
            k,
            t,
            r,
            sigma,
            n,
            m,
            option_type,
            control_variate,
        })
    }
}

/// Validated request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticAsianRequest {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
    pub n: u32,
    pub m: u32,
    pub option_type: OptionType,
    pub control_variate: ControlVariate,
}

/// Server response: Monte Carlo estimate, its 95% confidence interval and
/// the echoed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticAsianResponse {
    pub price: Figure,
    pub confident_interval: [Figure; 2],
    pub input: ArithmeticAsianRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ArithmeticAsianForm {
        ArithmeticAsianForm {
            spot: "100".into(),
            strike: "100".into(),
            maturity: "3".into(),
            rate: "0.05".into(),
            volatility: "0.3".into(),
            periods: "50".into(),
            simulations: "100000".into(),
            option_type: "put".into(),
            control_variate: "geometric".into(),
        }
    }

    #[test]
    fn valid_form_produces_coerced_request() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.m, 100_000);
        assert_eq!(request.control_variate, ControlVariate::Geometric);
    }

    #[test]
    fn unknown_control_variate_token_is_rejected() {
        let mut form = filled_form();
        form.control_variate = "antithetic".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("control_variate"),
            Some("Control variate must be either none or geometric")
        );
    }

    #[test]
    fn shares_the_basket_monte_carlo_path() {
        assert_eq!(PATH, "/monte-carlo-arithmetic-mean-basket-option");
    }

    #[test]
    fn response_interval_sides_are_independent() {
        let body = r#"{"price": 14.7, "confident_interval": ["NaN", 15.1],
            "input": {"S": 100.0, "K": 100.0, "T": 3.0, "r": 0.05, "sigma": 0.3,
            "n": 50, "m": 100000, "option_type": "put", "control_variate": "geometric"}}"#;
        let response: ArithmeticAsianResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.confident_interval[0], Figure::Text("NaN".to_string()));
        assert_eq!(response.confident_interval[1], Figure::Number(15.1));
    }
}
