//! Cross-instrument properties of the validation schemas.

use proptest::prelude::*;

use desk_contract::instruments::{
    arithmetic_basket::ArithmeticBasketForm, geometric_asian::GeometricAsianForm,
    implied_volatility::ImpliedVolatilityForm, kiko_put::KikoPutForm, AnyForm, Instrument,
};

/// Zero maturity/rate/repo is an implied-volatility privilege; the same
/// inputs must fail on every other instrument that has those fields.
#[test]
fn zero_rates_only_pass_for_implied_volatility() {
    let implied = ImpliedVolatilityForm {
        spot: "100".into(),
        strike: "100".into(),
        maturity: "0".into(),
        rate: "0".into(),
        option_premium: "5".into(),
        repo_rate: "0".into(),
        option_type: "call".into(),
    };
    assert!(implied.validate().is_ok());

    let asian = GeometricAsianForm {
        spot: "100".into(),
        strike: "100".into(),
        maturity: "0".into(),
        rate: "0".into(),
        volatility: "0.3".into(),
        periods: "50".into(),
        option_type: "call".into(),
    };
    let errors = asian.validate().unwrap_err();
    assert_eq!(errors.get("T"), Some("Time to maturity must be positive"));
    assert_eq!(errors.get("r"), Some("Risk free rate must be positive"));
}

/// A non-numeric string fails with the type message on every numeric field,
/// even where it would also fail the range check.
#[test]
fn type_errors_take_precedence_everywhere() {
    let form = KikoPutForm {
        spot: "not-a-price".into(),
        strike: "100".into(),
        maturity: "1".into(),
        rate: "0.05".into(),
        volatility: "0.2".into(),
        lower_barrier: "80".into(),
        upper_barrier: "120".into(),
        timesteps: "50".into(),
        rebate: "also-not-a-number".into(),
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("S"), Some("Spot price must be a number"));
    assert_eq!(errors.get("R"), Some("Rebate amount must be a number"));
}

/// An untouched form never produces a request, for any instrument.
#[test]
fn blank_forms_block_submission() {
    for instrument in Instrument::ALL {
        assert!(AnyForm::new(instrument).validate().is_err());
    }
}

proptest! {
    /// For any in-range inputs the basket schema accepts, re-validating the
    /// rendering of the coerced values yields the same request.
    #[test]
    fn validation_is_idempotent_on_valid_input(
        spot1 in 0.01f64..10_000.0,
        spot2 in 0.01f64..10_000.0,
        vol in 0.001f64..5.0,
        rate in 0.0001f64..1.0,
        rho in -1.0f64..=1.0,
        sims in 1u32..10_000_000,
    ) {
        let form = ArithmeticBasketForm {
            spot1: spot1.to_string(),
            spot2: spot2.to_string(),
            volatility1: vol.to_string(),
            volatility2: vol.to_string(),
            rate: rate.to_string(),
            strike: spot1.to_string(),
            maturity: "1".to_string(),
            correlation: rho.to_string(),
            simulations: sims.to_string(),
            option_type: "call".to_string(),
            control_variate: "geometric".to_string(),
        };
        let first = form.validate().unwrap();

        let rendered = ArithmeticBasketForm {
            spot1: first.s1.to_string(),
            spot2: first.s2.to_string(),
            volatility1: first.sigma1.to_string(),
            volatility2: first.sigma2.to_string(),
            rate: first.r.to_string(),
            strike: first.k.to_string(),
            maturity: first.t.to_string(),
            correlation: first.rho.to_string(),
            simulations: first.m.to_string(),
            option_type: first.option_type.as_str().to_string(),
            control_variate: first.control_variate.as_str().to_string(),
        };
        prop_assert_eq!(first, rendered.validate().unwrap());
    }

    /// Correlation inputs outside [-1, 1] always report the range message,
    /// never the type message.
    #[test]
    fn out_of_range_correlation_reports_range_message(rho in 1.0001f64..100.0) {
        for signed in [rho, -rho] {
            let form = ArithmeticBasketForm {
                spot1: "100".to_string(),
                spot2: "100".to_string(),
                volatility1: "0.3".to_string(),
                volatility2: "0.3".to_string(),
                rate: "0.05".to_string(),
                strike: "100".to_string(),
                maturity: "3".to_string(),
                correlation: signed.to_string(),
                simulations: "100000".to_string(),
                option_type: "call".to_string(),
                control_variate: "none".to_string(),
            };
            let errors = form.validate().unwrap_err();
            prop_assert_eq!(
                errors.get("rho"),
                Some("Correlation coefficient must be between -1 and 1")
            );
        }
    }
}
