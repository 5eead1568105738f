//! Monte Carlo arithmetic mean basket option on two assets.

use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};
use crate::types::{ControlVariate, OptionType};

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = "/monte-carlo-arithmetic-mean-basket-option";

instrument_form! {
    /// Raw inputs for an arithmetic basket option request.
    pub struct ArithmeticBasketForm {
        spot1 ("S1", ""): FieldSpec::text("S1", "First Asset Price"),
        spot2 ("S2", ""): FieldSpec::text("S2", "Second Asset Price"),
        volatility1 ("sigma1", ""): FieldSpec::text("sigma1", "First Asset Volatility"),
        volatility2 ("sigma2", ""): FieldSpec::text("sigma2", "Second Asset Volatility"),
        rate ("r", ""): FieldSpec::text("r", "Risk Free Rate"),
        strike ("K", ""): FieldSpec::text("K", "Strike Price"),
        maturity ("T", ""): FieldSpec::text("T", "Time to Maturity (years)"),
        correlation ("rho", ""): FieldSpec::text("rho", "Correlation Coefficient"),
        simulations ("m", ""): FieldSpec::text("m", "Number of Simulations"),
        option_type ("option_type", "call"):
            FieldSpec::choice("option_type", "Option Type", OptionType::TOKENS),
        control_variate ("control_variate", "none"):
            FieldSpec::choice("control_variate", "Control Variate", ControlVariate::TOKENS),
    }
}

impl ArithmeticBasketForm {
    pub fn validate(&self) -> Result<ArithmeticBasketRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let s1 = check.positive("S1", "First asset price", &self.spot1);
        let s2 = check.positive("S2", "Second asset price", &self.spot2);
        let sigma1 = check.positive("sigma1", "First asset volatility", &self.volatility1);
        let sigma2 = check.positive("sigma2", "Second asset volatility", &self.volatility2);
        let r = check.positive("r", "Risk free rate", &self.rate);
        let k = check.positive("K", "Strike price", &self.strike);
        let t = check.positive("T", "Time to maturity", &self.maturity);
        let rho = check.bounded("rho", "Correlation coefficient", &self.correlation, -1.0, 1.0);
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
        check.finish(ArithmeticBasketRequest {
            s1,
            s2,
            sigma1,
            sigma2,
            r,
            k,
            t,
            rho,
            m,
            option_type,
            control_variate,
        })
    }
}

/// Validated request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticBasketRequest {
    #[serde(rename = "S1")]
    pub s1: f64,
    #[serde(rename = "S2")]
    pub s2: f64,
    pub sigma1: f64,
    pub sigma2: f64,
    pub r: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub rho: f64,
    pub m: u32,
    pub option_type: OptionType,
    pub control_variate: ControlVariate,
}

/// Server response: Monte Carlo estimate, its 95% confidence interval and
/// the echoed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticBasketResponse {
    pub price: Figure,
    pub confident_interval: [Figure; 2],
    pub input: ArithmeticBasketRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ArithmeticBasketForm {
        ArithmeticBasketForm {
            spot1: "100".into(),
            spot2: "100".into(),
            volatility1: "0.3".into(),
            volatility2: "0.3".into(),
            rate: "0.05".into(),
            strike: "100".into(),
            maturity: "3".into(),
            correlation: "0.5".into(),
            simulations: "100000".into(),
            option_type: "call".into(),
            control_variate: "none".into(),
        }
    }

    #[test]
    fn revalidation_of_rendered_values_is_idempotent() {
        let first = filled_form().validate().unwrap();

        let mut rendered = filled_form();
        rendered.spot1 = first.s1.to_string();
        rendered.correlation = first.rho.to_string();
        rendered.simulations = first.m.to_string();
        let second = rendered.validate().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn every_failing_field_gets_its_own_message() {
        let form = ArithmeticBasketForm {
            spot1: "-1".into(),
            correlation: "2".into(),
            simulations: "0".into(),
            ..filled_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("S1"), Some("First asset price must be positive"));
        assert_eq!(
            errors.get("rho"),
            Some("Correlation coefficient must be between -1 and 1")
        );
        assert_eq!(errors.get("m"), Some("Number of simulations must be positive"));
    }

    #[test]
    fn request_serialises_with_wire_field_names() {
        let value = serde_json::to_value(filled_form().validate().unwrap()).unwrap();
        assert_eq!(value["S1"], 100.0);
        assert_eq!(value["m"], 100_000);
        assert_eq!(value["control_variate"], "none");
    }
}
