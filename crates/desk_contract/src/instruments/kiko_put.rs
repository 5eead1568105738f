//! Quasi-Monte Carlo knock-in knock-out put option.
//!
//! Always a put, so the schema carries no option side; the rebate is the
//! one barrier field that accepts zero.

use serde::{Deserialize, Serialize};

use crate::figure::Figure;
use crate::form::FieldSpec;
use crate::rules::{FieldCheck, FieldErrors};

use super::instrument_form;

/// POST path on the pricing service.
pub const PATH: &str = "/quasi-monte-carlo-kiko-put-option";

instrument_form! {
    /// Raw inputs for a KIKO put pricing request.
    pub struct KikoPutForm {
        spot ("S", ""): FieldSpec::text("S", "Spot Price"),
        strike ("K", ""): FieldSpec::text("K", "Strike Price"),
        maturity ("T", ""): FieldSpec::text("T", "Time to Maturity (years)"),
        rate ("r", ""): FieldSpec::text("r", "Risk Free Rate"),
        volatility ("sigma", ""): FieldSpec::text("sigma", "Volatility"),
        lower_barrier ("L", ""): FieldSpec::text("L", "Lower Barrier"),
        upper_barrier ("U", ""): FieldSpec::text("U", "Upper Barrier"),
        timesteps ("n", ""): FieldSpec::text("n", "Number of Timesteps"),
        rebate ("R", ""): FieldSpec::text("R", "Rebate Amount"),
    }
}

impl KikoPutForm {
    pub fn validate(&self) -> Result<KikoPutRequest, FieldErrors> {
        let mut check = FieldCheck::new();
        let s = check.positive("S", "Spot price", &self.spot);
        let k = check.positive("K", "Strike price", &self.strike);
        let t = check.positive("T", "Time to maturity", &self.maturity);
        let r = check.positive("r", "Risk free rate", &self.rate);
        let sigma = check.positive("sigma", "Volatility", &self.volatility);
        let l = check.positive("L", "Lower barrier", &self.lower_barrier);
        let u = check.positive("U", "Upper barrier", &self.upper_barrier);
        let n = check.positive_integer("n", "Number of timesteps", &self.timesteps);
        let rebate = check.non_negative("R", "Rebate amount", &self.rebate);
        check.finish(KikoPutRequest {
            s,
            k,
            t,
            r,
            sigma,
            l,
            u,
            n,
            rebate,
        })
    }
}

/// Validated request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KikoPutRequest {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "T")]
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "U")]
    pub u: f64,
    pub n: u32,
    #[serde(rename = "R")]
    pub rebate: f64,
}

/// Server response: price, delta, 95% confidence interval and the echoed
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KikoPutResponse {
    pub price: Figure,
    pub delta: Figure,
    pub confident_interval: [Figure; 2],
    pub input: KikoPutRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> KikoPutForm {
        KikoPutForm {
            spot: "100".into(),
            strike: "100".into(),
            maturity: "1".into(),
            rate: "0.05".into(),
            volatility: "0.2".into(),
            lower_barrier: "80".into(),
            upper_barrier: "120".into(),
            timesteps: "50".into(),
            rebate: "0".into(),
        }
    }

    #[test]
    fn zero_rebate_is_accepted_and_serialised() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.rebate, 0.0);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["R"], 0.0);
        assert_eq!(value["L"], 80.0);
        assert_eq!(value["U"], 120.0);
        assert_eq!(value["n"], 50);
    }

    #[test]
    fn negative_rebate_reports_the_bound_message() {
        let mut form = filled_form();
        form.rebate = "-5".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("R"),
            Some("Rebate amount must be greater than or equal to 0")
        );
    }

    #[test]
    fn barriers_must_be_strictly_positive() {
        let mut form = filled_form();
        form.lower_barrier = "0".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("L"), Some("Lower barrier must be positive"));
    }

    #[test]
    fn response_parses_numeric_outputs() {
        let body = r#"{"price": 2.5, "delta": -0.4, "confident_interval": [2.3, 2.7],
            "input": {"S": 100.0, "K": 100.0, "T": 1.0, "r": 0.05, "sigma": 0.2,
            "L": 80.0, "U": 120.0, "n": 50, "R": 0.0}}"#;
        let response: KikoPutResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.price, Figure::Number(2.5));
        assert_eq!(response.delta, Figure::Number(-0.4));
        assert_eq!(response.input.rebate, 0.0);
    }
}
