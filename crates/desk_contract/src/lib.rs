//! # desk_contract: Validation Schemas and Wire Types
//!
//! The contract layer of the pricing desk client. For each of the nine
//! supported instruments this crate defines:
//!
//! - a **form** of raw string inputs exactly as typed,
//! - a **validation schema** built from a shared rule set
//!   ([`rules::FieldRule`]) that coerces and range-checks every field,
//!   reporting the first failing predicate per field,
//! - the **request body** the pricing service expects (exact JSON field
//!   names) and the **response body** it returns, where every numeric
//!   output may arrive as a number or a diagnostic string
//!   ([`figure::Figure`]).
//!
//! No request leaves this layer unless every field passed its schema. The
//! crate performs no I/O and holds no state; transport lives in
//! `desk_client`, presentation in `desk_report` and `desk_tui`.

pub mod figure;
pub mod form;
pub mod instruments;
pub mod rules;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::figure::Figure;
    pub use crate::form::{FieldSpec, InputKind, InstrumentForm};
    pub use crate::instruments::{AnyForm, AnyRequest, Instrument};
    pub use crate::rules::{FieldErrors, FieldRule};
    pub use crate::types::{
        BusinessDayConvention, ControlVariate, DayCount, OptionType, PaymentFrequency,
    };
}
