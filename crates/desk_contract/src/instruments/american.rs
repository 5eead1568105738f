//! Binomial tree American option.

use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};
use crate::types::OptionType;

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = "/binomial-tree-american-option";

instrument_form! {
    /// Raw inputs for an American option pricing request.
    pub struct AmericanOptionForm {
        spot ("S", ""): FieldSpec::text("S", "Spot Price"),
        strike ("K", ""): FieldSpec::text("K", "Strike Price"),
        maturity ("T", ""): FieldSpec::text("T", "Time to Maturity (years)"),
        rate ("r", ""): FieldSpec::text("r", "Risk Free Rate"),
        volatility ("sigma", ""): FieldSpec::text("sigma", "Volatility"),
        steps ("n", ""): FieldSpec::text("n", "Number of Steps"),
        option_type ("option_type", "call"):
            FieldSpec::choice("option_type", "Option Type", OptionType::TOKENS),
    }
}

impl AmericanOptionForm {
    pub fn validate(&self) -> Result<AmericanOptionRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let s = check.positive("S", "Spot price", &self.spot);
        let k = check.positive("K", "Strike price", &self.strike);
        let t = check.positive("T", "Time to maturity", &self.maturity);
        let r = check.positive("r", "Risk free rate", &self.rate);
        let sigma = check.positive("sigma", "Volatility", &self.volatility);
        let n = check.positive_integer("n", "Number of steps", &self.steps);
        let option_type = check.one_of(
            "option_type",
            "Option type",
            &self.option_type,
            OptionType::TOKENS,
            OptionType::from_token,
            OptionType::Call,
        );
        check.finish(AmericanOptionRequest {
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
pub struct AmericanOptionRequest {
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

/// Server response: a binomial tree price plus the echoed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmericanOptionResponse {
    pub price: Figure,
    pub input: AmericanOptionRequest,
}
