//! The nine instrument request modules.
//!
//! Each module owns its validation schema, its wire-level request and
//! response types and its POST path. Modules share no state; the unions at
//! the bottom of this file exist only so the selector can hold any module's
//! form and route any module's request without knowing the concrete type.

pub mod american;
pub mod arithmetic_asian;
pub mod arithmetic_basket;
pub mod european;
pub mod geometric_asian;
pub mod geometric_basket;
pub mod implied_volatility;
pub mod kiko_put;
pub mod swap;

use serde::Serialize;

use crate::form::InstrumentForm;
use crate::rules::FieldErrors;

/// Declares a form struct holding raw string inputs: field storage, display
/// metadata, defaults and uniform access. Validation stays hand-written per
/// instrument so each schema's constraints remain visible in one place.
macro_rules! instrument_form {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $field:ident ($wire:literal, $default:expr): $spec:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( pub $field: String, )+
        }

        impl $name {
            /// Field metadata in display order.
            pub const FIELDS: &'static [$crate::form::FieldSpec] = &[ $( $spec, )+ ];
        }

        impl Default for $name {
            fn default() -> Self {
                Self { $( $field: $default.to_string(), )+ }
            }
        }

        impl $crate::form::InstrumentForm for $name {
            fn fields(&self) -> &'static [$crate::form::FieldSpec] {
                Self::FIELDS
            }

            fn value(&self, name: &str) -> &str {
                match name {
                    $( $wire => &self.$field, )+
                    _ => "",
                }
            }

            fn value_mut(&mut self, name: &str) -> Option<&mut String> {
                match name {
                    $( $wire => Some(&mut self.$field), )+
                    _ => None,
                }
            }
        }
    };
}
pub(crate) use instrument_form;

/// The nine instruments, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    European,
    ImpliedVolatility,
    GeometricAsian,
    GeometricBasket,
    ArithmeticAsian,
    ArithmeticBasket,
    American,
    KikoPut,
    Swap,
}

impl Instrument {
    /// Tab order, matching the selector.
    pub const ALL: [Instrument; 9] = [
        Instrument::European,
        Instrument::ImpliedVolatility,
        Instrument::GeometricAsian,
        Instrument::GeometricBasket,
        Instrument::ArithmeticAsian,
        Instrument::ArithmeticBasket,
        Instrument::American,
        Instrument::KikoPut,
        Instrument::Swap,
    ];

    /// Selector label.
    pub fn title(&self) -> &'static str {
        match self {
            Instrument::European => "European Option",
            Instrument::ImpliedVolatility => "Implied Volatility",
            Instrument::GeometricAsian => "Geometric Asian Option",
            Instrument::GeometricBasket => "Geometric Basket Option",
            Instrument::ArithmeticAsian => "Arithmetic Asian Option",
            Instrument::ArithmeticBasket => "Arithmetic Basket Option",
            Instrument::American => "American Option",
            Instrument::KikoPut => "KIKO Put Option",
            Instrument::Swap => "Interest Rate Swap",
        }
    }

    /// POST path on the pricing service.
    pub fn path(&self) -> &'static str {
        match self {
            Instrument::European => european::PATH,
            Instrument::ImpliedVolatility => implied_volatility::PATH,
            Instrument::GeometricAsian => geometric_asian::PATH,
            Instrument::GeometricBasket => geometric_basket::PATH,
            Instrument::ArithmeticAsian => arithmetic_asian::PATH,
            Instrument::ArithmeticBasket => arithmetic_basket::PATH,
            Instrument::American => american::PATH,
            Instrument::KikoPut => kiko_put::PATH,
            Instrument::Swap => swap::PATH,
        }
    }
}

/// Any instrument's form, for the selector.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyForm {
    European(european::EuropeanOptionForm),
    ImpliedVolatility(implied_volatility::ImpliedVolatilityForm),
    GeometricAsian(geometric_asian::GeometricAsianForm),
    GeometricBasket(geometric_basket::GeometricBasketForm),
    ArithmeticAsian(arithmetic_asian::ArithmeticAsianForm),
    ArithmeticBasket(arithmetic_basket::ArithmeticBasketForm),
    American(american::AmericanOptionForm),
    KikoPut(kiko_put::KikoPutForm),
    Swap(swap::SwapForm),
}

impl AnyForm {
    /// Fresh form with that instrument's defaults.
    pub fn new(instrument: Instrument) -> Self {
        match instrument {
            Instrument::European => AnyForm::European(Default::default()),
            Instrument::ImpliedVolatility => AnyForm::ImpliedVolatility(Default::default()),
            Instrument::GeometricAsian => AnyForm::GeometricAsian(Default::default()),
            Instrument::GeometricBasket => AnyForm::GeometricBasket(Default::default()),
            Instrument::ArithmeticAsian => AnyForm::ArithmeticAsian(Default::default()),
            Instrument::ArithmeticBasket => AnyForm::ArithmeticBasket(Default::default()),
            Instrument::American => AnyForm::American(Default::default()),
            Instrument::KikoPut => AnyForm::KikoPut(Default::default()),
            Instrument::Swap => AnyForm::Swap(Default::default()),
        }
    }

    pub fn form(&self) -> &dyn InstrumentForm {
        match self {
            AnyForm::European(form) => form,
            AnyForm::ImpliedVolatility(form) => form,
            AnyForm::GeometricAsian(form) => form,
            AnyForm::GeometricBasket(form) => form,
            AnyForm::ArithmeticAsian(form) => form,
            AnyForm::ArithmeticBasket(form) => form,
            AnyForm::American(form) => form,
            AnyForm::KikoPut(form) => form,
            AnyForm::Swap(form) => form,
        }
    }

    pub fn form_mut(&mut self) -> &mut dyn InstrumentForm {
        match self {
            AnyForm::European(form) => form,
            AnyForm::ImpliedVolatility(form) => form,
            AnyForm::GeometricAsian(form) => form,
            AnyForm::GeometricBasket(form) => form,
            AnyForm::ArithmeticAsian(form) => form,
            AnyForm::ArithmeticBasket(form) => form,
            AnyForm::American(form) => form,
            AnyForm::KikoPut(form) => form,
            AnyForm::Swap(form) => form,
        }
    }

    /// Run the instrument's schema over the raw inputs.
    pub fn validate(&self) -> Result<AnyRequest, FieldErrors> {
        match self {
            AnyForm::European(form) => form.validate().map(AnyRequest::European),
            AnyForm::ImpliedVolatility(form) => {
                form.validate().map(AnyRequest::ImpliedVolatility)
            }
            AnyForm::GeometricAsian(form) => form.validate().map(AnyRequest::GeometricAsian),
            AnyForm::GeometricBasket(form) => form.validate().map(AnyRequest::GeometricBasket),
            AnyForm::ArithmeticAsian(form) => form.validate().map(AnyRequest::ArithmeticAsian),
            AnyForm::ArithmeticBasket(form) => {
                form.validate().map(AnyRequest::ArithmeticBasket)
            }
            AnyForm::American(form) => form.validate().map(AnyRequest::American),
            AnyForm::KikoPut(form) => form.validate().map(AnyRequest::KikoPut),
            AnyForm::Swap(form) => form.validate().map(AnyRequest::Swap),
        }
    }
}

/// Any instrument's validated request, tagged for routing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyRequest {
    European(european::EuropeanOptionRequest),
    ImpliedVolatility(implied_volatility::ImpliedVolatilityRequest),
    GeometricAsian(geometric_asian::GeometricAsianRequest),
    GeometricBasket(geometric_basket::GeometricBasketRequest),
    ArithmeticAsian(arithmetic_asian::ArithmeticAsianRequest),
    ArithmeticBasket(arithmetic_basket::ArithmeticBasketRequest),
    American(american::AmericanOptionRequest),
    KikoPut(kiko_put::KikoPutRequest),
    Swap(swap::SwapRequest),
}

impl AnyRequest {
    pub fn instrument(&self) -> Instrument {
        match self {
            AnyRequest::European(_) => Instrument::European,
            AnyRequest::ImpliedVolatility(_) => Instrument::ImpliedVolatility,
            AnyRequest::GeometricAsian(_) => Instrument::GeometricAsian,
            AnyRequest::GeometricBasket(_) => Instrument::GeometricBasket,
            AnyRequest::ArithmeticAsian(_) => Instrument::ArithmeticAsian,
            AnyRequest::ArithmeticBasket(_) => Instrument::ArithmeticBasket,
            AnyRequest::American(_) => Instrument::American,
            AnyRequest::KikoPut(_) => Instrument::KikoPut,
            AnyRequest::Swap(_) => Instrument::Swap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_has_nine_distinct_instruments() {
        assert_eq!(Instrument::ALL.len(), 9);
        for pair in Instrument::ALL.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn asian_and_basket_monte_carlo_share_a_path() {
        assert_eq!(
            Instrument::ArithmeticAsian.path(),
            Instrument::ArithmeticBasket.path()
        );
    }

    #[test]
    fn tagged_requests_serialise_transparently() {
        let form = kiko_put::KikoPutForm {
            spot: "100".into(),
            strike: "100".into(),
            maturity: "1".into(),
            rate: "0.05".into(),
            volatility: "0.2".into(),
            lower_barrier: "80".into(),
            upper_barrier: "120".into(),
            timesteps: "50".into(),
            rebate: "0".into(),
        };
        let request = AnyForm::KikoPut(form).validate().unwrap();
        // The routing tag must not leak into the wire body.
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["R"], 0.0);
        assert!(value.get("KikoPut").is_none());
        assert_eq!(request.instrument(), Instrument::KikoPut);
    }

    #[test]
    fn default_forms_validate_only_when_filled() {
        for instrument in Instrument::ALL {
            let form = AnyForm::new(instrument);
            // Every instrument has at least one required numeric or date
            // field with no default, so an untouched form cannot submit.
            assert!(form.validate().is_err(), "{:?}", instrument);
        }
    }
}
