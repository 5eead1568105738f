//! Black-Scholes European option.

use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};
use crate::types::OptionType;

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = "/black-scholes-european-option";

instrument_form! {
    /// Raw inputs for a European option pricing request.
    pub struct EuropeanOptionForm {
        spot ("S", ""): FieldSpec::text("S", "Spot Price"),
        strike ("K", ""): FieldSpec::text("K", "Strike Price"),
        maturity ("T", ""): FieldSpec::text("T", "Time to Maturity (years)"),
        rate ("r", ""): FieldSpec::text("r", "Risk Free Rate"),
        volatility ("sigma", ""): FieldSpec::text("sigma", "Volatility"),
        repo_rate ("q", ""): FieldSpec::text("q", "Repo Rate"),
        option_type ("option_type", "call"):
            FieldSpec::choice("option_type", "Option Type", OptionType::TOKENS),
    }
}

impl EuropeanOptionForm {
    pub fn validate(&self) -> Result<EuropeanOptionRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let s = check.positive("S", "Spot price", &self.spot);
        let k = check.positive("K", "Strike price", &self.strike);
        let t = check.positive("T", "Time to maturity", &self.maturity);
        let r = check.positive("r", "Risk free rate", &self.rate);
        let sigma = check.positive("sigma", "Volatility", &self.volatility);
        let q = check.positive("q", "Repo rate", &self.repo_rate);
        let option_type = check.one_of(
            "option_type",
            "Option type",
            &self.option_type,
            OptionType::TOKENS,
            OptionType::from_token,
            OptionType::Call,
        );
        check.finish(EuropeanOptionRequest {
            s,
            k,
            t,
            r,
            sigma,
            q,
            option_type,
        })
    }
}

/// Validated request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOptionRequest {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
    pub q: f64,
    pub option_type: OptionType,
}

/// Server response: a price plus the echoed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EuropeanOptionResponse {
    pub price: Figure,
    pub input: EuropeanOptionRequest,
}
