//! Field coercion and range-check primitives.
//!
//! Every instrument schema is built from the same small rule set: a raw
//! string as typed by the user is trimmed, coerced to its semantic type and
//! then range-checked. Checks run in a fixed order and the first failing
//! predicate wins, so a non-numeric value always reports a type message
//! rather than a range message.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Constraint attached to a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    /// Numeric, strictly positive.
    PositiveNumber,
    /// Numeric, zero permitted.
    NonNegativeNumber,
    /// Numeric within an inclusive range.
    BoundedNumber { min: f64, max: f64 },
    /// Numeric, no bound (float spread may be negative).
    AnyNumber,
    /// Integer, strictly positive.
    PositiveInteger,
    /// Exact membership in a fixed vocabulary.
    OneOf(&'static [&'static str]),
    /// String of exactly this many characters.
    ExactLength(usize),
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
}

/// A raw field value coerced to its semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Integer(u32),
    Token(&'static str),
    Text(String),
    Date(NaiveDate),
}

impl FieldRule {
    /// Apply the rule to a raw input, producing the coerced value or the
    /// single message for the first failing predicate.
    pub fn check(&self, label: &str, raw: &str) -> Result<FieldValue, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(format!("{label} must not be empty"));
        }

        match *self {
            FieldRule::PositiveNumber => {
                let value = coerce_number(label, raw)?;
                if value > 0.0 {
                    Ok(FieldValue::Number(value))
                } else {
                    Err(format!("{label} must be positive"))
                }
            }
            FieldRule::NonNegativeNumber => {
                let value = coerce_number(label, raw)?;
                if value >= 0.0 {
                    Ok(FieldValue::Number(value))
                } else {
                    Err(format!("{label} must be greater than or equal to 0"))
                }
            }
            FieldRule::BoundedNumber { min, max } => {
                let value = coerce_number(label, raw)?;
                if value >= min && value <= max {
                    Ok(FieldValue::Number(value))
                } else {
                    Err(format!("{label} must be between {min} and {max}"))
                }
            }
            FieldRule::AnyNumber => coerce_number(label, raw).map(FieldValue::Number),
            FieldRule::PositiveInteger => {
                let value = coerce_number(label, raw)?;
                if value.fract() != 0.0 {
                    return Err(format!("{label} must be an integer"));
                }
                if value <= 0.0 || value > u32::MAX as f64 {
                    return Err(format!("{label} must be positive"));
                }
                Ok(FieldValue::Integer(value as u32))
            }
            FieldRule::OneOf(tokens) => match tokens.iter().find(|t| **t == raw) {
                Some(token) => Ok(FieldValue::Token(token)),
                None => Err(one_of_message(label, tokens)),
            },
            FieldRule::ExactLength(len) => {
                if raw.chars().count() == len {
                    Ok(FieldValue::Text(raw.to_string()))
                } else {
                    Err(format!("{label} must be exactly {len} characters"))
                }
            }
            FieldRule::Date => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Ok(FieldValue::Date(date)),
                Err(_) => Err(format!("{label} must be a valid date (YYYY-MM-DD)")),
            },
        }
    }
}

/// Parse a numeric-looking string, rejecting NaN and infinities as type
/// failures rather than range failures.
fn coerce_number(label: &str, raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("{label} must be a number")),
    }
}

fn one_of_message(label: &str, tokens: &[&str]) -> String {
    match tokens {
        [a, b] => format!("{label} must be either {a} or {b}"),
        _ => format!("{label} must be one of {}", tokens.join(", ")),
    }
}

/// Field name to message mapping produced by a failed validation.
///
/// A field appears here iff its raw input failed at least one constraint;
/// only the first failing message per field is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: String) {
        self.0.entry(field).or_insert(message);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Accumulator that runs rules over a form and collects per-field errors.
///
/// Checked accessors return a placeholder on failure; the placeholder can
/// never escape because [`FieldCheck::finish`] only hands back the request
/// when no field failed.
#[derive(Debug, Default)]
pub struct FieldCheck {
    errors: FieldErrors,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    fn number(
        &mut self,
        field: &'static str,
        label: &str,
        rule: FieldRule,
        raw: &str,
    ) -> f64 {
        match rule.check(label, raw) {
            Ok(FieldValue::Number(value)) => value,
            Ok(_) => unreachable!("numeric rule yielded a non-numeric value"),
            Err(message) => {
                self.errors.insert(field, message);
                0.0
            }
        }
    }

    /// Numeric, strictly positive.
    pub fn positive(&mut self, field: &'static str, label: &str, raw: &str) -> f64 {
        self.number(field, label, FieldRule::PositiveNumber, raw)
    }

    /// Numeric, zero permitted.
    pub fn non_negative(&mut self, field: &'static str, label: &str, raw: &str) -> f64 {
        self.number(field, label, FieldRule::NonNegativeNumber, raw)
    }

    /// Numeric within an inclusive range.
    pub fn bounded(
        &mut self,
        field: &'static str,
        label: &str,
        raw: &str,
        min: f64,
        max: f64,
    ) -> f64 {
        self.number(field, label, FieldRule::BoundedNumber { min, max }, raw)
    }

    /// Numeric, unconstrained sign.
    pub fn any_number(&mut self, field: &'static str, label: &str, raw: &str) -> f64 {
        self.number(field, label, FieldRule::AnyNumber, raw)
    }

    /// Integer, strictly positive.
    pub fn positive_integer(&mut self, field: &'static str, label: &str, raw: &str) -> u32 {
        match FieldRule::PositiveInteger.check(label, raw) {
            Ok(FieldValue::Integer(value)) => value,
            Ok(_) => unreachable!("integer rule yielded a non-integer value"),
            Err(message) => {
                self.errors.insert(field, message);
                1
            }
        }
    }

    /// Exact token membership, mapped through the caller's parser.
    pub fn one_of<T>(
        &mut self,
        field: &'static str,
        label: &str,
        raw: &str,
        tokens: &'static [&'static str],
        parse: impl Fn(&str) -> Option<T>,
        placeholder: T,
    ) -> T {
        match FieldRule::OneOf(tokens).check(label, raw) {
            Ok(FieldValue::Token(token)) => match parse(token) {
                Some(value) => value,
                None => {
                    self.errors.insert(field, one_of_message(label, tokens));
                    placeholder
                }
            },
            Ok(_) => unreachable!("token rule yielded a non-token value"),
            Err(message) => {
                self.errors.insert(field, message);
                placeholder
            }
        }
    }

    /// String of an exact character count.
    pub fn exact_length(
        &mut self,
        field: &'static str,
        label: &str,
        raw: &str,
        len: usize,
    ) -> String {
        match FieldRule::ExactLength(len).check(label, raw) {
            Ok(FieldValue::Text(value)) => value,
            Ok(_) => unreachable!("length rule yielded a non-text value"),
            Err(message) => {
                self.errors.insert(field, message);
                String::new()
            }
        }
    }

    /// Calendar date.
    pub fn date(&mut self, field: &'static str, label: &str, raw: &str) -> NaiveDate {
        match FieldRule::Date.check(label, raw) {
            Ok(FieldValue::Date(value)) => value,
            Ok(_) => unreachable!("date rule yielded a non-date value"),
            Err(message) => {
                self.errors.insert(field, message);
                NaiveDate::default()
            }
        }
    }

    /// Hand back the request iff every field passed.
    pub fn finish<R>(self, request: R) -> Result<R, FieldErrors> {
        if self.errors.is_empty() {
            Ok(request)
        } else {
            Err(self.errors)
        }
    }
}
