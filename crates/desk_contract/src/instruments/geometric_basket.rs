//! Closed-form geometric basket option on two assets.

use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};
use crate::types::OptionType;

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = "/closed-form-geometric-basket-option";

instrument_form! {
    /// Raw inputs for a geometric basket option request.
    pub struct GeometricBasketForm {
        spot1 ("S1", ""): FieldSpec::text("S1", "First Asset Price"),
        spot2 ("S2", ""): FieldSpec::text("S2", "Second Asset Price"),
        volatility1 ("sigma1", ""): FieldSpec::text("sigma1", "First Asset Volatility"),
        volatility2 ("sigma2", ""): FieldSpec::text("sigma2", "Second Asset Volatility"),
        rate ("r", ""): FieldSpec::text("r", "Risk Free Rate"),
        strike ("K", ""): FieldSpec::text("K", "Strike Price"),
        maturity ("T", ""): FieldSpec::text("T", "Time to Maturity (years)"),
        correlation ("rho", ""): FieldSpec::text("rho", "Correlation Coefficient"),
        option_type ("option_type", "call"):
            FieldSpec::choice("option_type", "Option Type", OptionType::TOKENS),
    }
}

impl GeometricBasketForm {
    pub fn validate(&self) -> Result<GeometricBasketRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let s1 = check.positive("S1", "First asset price", &self.spot1);
        let s2 = check.positive("S2", "Second asset price", &self.spot2);
        let sigma1 = check.positive("sigma1", "First asset volatility", &self.volatility1);
        let sigma2 = check.positive("sigma2", "Second asset volatility", &self.volatility2);
        let r = check.positive("r", "Risk free rate", &self.rate);
        let k = check.positive("K", "Strike price", &self.strike);
        let t = check.positive("T", "Time to maturity", &self.maturity);
        let rho = check.bounded("rho", "Correlation coefficient", &self.correlation, -1.0, 1.0);
        let option_type = check.one_of(
            "option_type",
            "Option type",
            &self.option_type,
            OptionType::TOKENS,
            OptionType::from_token,
            OptionType::Call,
        );
        check.finish(GeometricBasketRequest {
            s1,
            s2,
            sigma1,
            sigma2,
            r,
            k,
            t,
            rho,
            option_type,
        })
    }
}

/// Validated request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricBasketRequest {
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
    pub option_type: OptionType,
}

/// Server response: a closed-form price plus the echoed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricBasketResponse {
    pub price: Figure,
    pub input: GeometricBasketRequest,
}
