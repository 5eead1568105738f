//! Form metadata shared by every instrument module.
//!
//! A form holds raw string inputs exactly as typed. The metadata here lets
//! the selector render and edit any instrument's form without knowing its
//! concrete type; validation stays with the instrument schema itself.

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text entry.
    Text,
    /// One token from a fixed vocabulary.
    Choice(&'static [&'static str]),
}

/// Display metadata for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire-level field name, also the key in [`crate::rules::FieldErrors`].
    pub name: &'static str,
    /// Human-facing label used in error messages and on screen.
    pub label: &'static str,
    pub input: InputKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input: InputKind::Text,
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        tokens: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            input: InputKind::Choice(tokens),
        }
    }
}

/// Uniform access to a form's raw fields, in display order.
pub trait InstrumentForm {
    /// Field metadata in display order.
    fn fields(&self) -> &'static [FieldSpec];

    /// Raw value of a field by wire name; empty for unknown names.
    fn value(&self, name: &str) -> &str;

    /// Mutable raw value of a field by wire name.
    ///
    /// Returns `None` for names not present on this form.
    fn value_mut(&mut self, name: &str) -> Option<&mut String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_spec_carries_its_vocabulary() {
        let spec = FieldSpec::choice("option_type", "Option type", &["call", "put"]);
        assert_eq!(spec.input, InputKind::Choice(&["call", "put"]));
        assert_eq!(spec.name, "option_type");
    }
}
