//! Numeric-or-text result values.

use serde::{Deserialize, Serialize};

/// A numeric output field that the server may replace with a diagnostic
/// string (for example `"NaN"` when a solver fails to converge).
///
/// The untagged representation mirrors the wire format: a JSON number
/// deserialises to [`Figure::Number`], anything else to [`Figure::Text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Figure {
    Number(f64),
    Text(String),
}

impl Figure {
    /// Render with a fixed number of decimal places when numeric, verbatim
    /// otherwise.
    pub fn format(&self, decimals: usize) -> String {
        match self {
            Figure::Number(value) => format!("{value:.decimals$}"),
            Figure::Text(text) => text.clone(),
        }
    }

    /// Whether the server supplied an actual number.
    pub fn is_number(&self) -> bool {
        matches!(self, Figure::Number(_))
    }
}

impl From<f64> for Figure {
    fn from(value: f64) -> Self {
        Figure::Number(value)
    }
}

impl From<&str> for Figure {
    fn from(text: &str) -> Self {
        Figure::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_numbers_and_strings() {
        let number: Figure = serde_json::from_str("2.5").unwrap();
        assert_eq!(number, Figure::Number(2.5));

        let text: Figure = serde_json::from_str("\"NaN\"").unwrap();
        assert_eq!(text, Figure::Text("NaN".to_string()));
    }

    #[test]
    fn formats_numbers_to_fixed_decimals() {
        assert_eq!(Figure::Number(2.5).format(6), "2.500000");
        assert_eq!(Figure::Number(-0.4).format(6), "-0.400000");
        assert_eq!(Figure::Number(1234.567).format(2), "1234.57");
    }

    #[test]
    fn formats_text_verbatim() {
        assert_eq!(Figure::Text("N/A".to_string()).format(6), "N/A");
        assert_eq!(Figure::from("no barrier hit").format(2), "no barrier hit");
    }

    #[test]
    fn serialises_back_to_the_wire_shape() {
        assert_eq!(serde_json::to_string(&Figure::Number(1.0)).unwrap(), "1.0");
        assert_eq!(
            serde_json::to_string(&Figure::from("NaN")).unwrap(),
            "\"NaN\""
        );
    }
}
