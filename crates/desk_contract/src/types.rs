//! Shared enum vocabularies used across the instrument schemas.

use serde::{Deserialize, Serialize};

/// Option side (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Allowed wire tokens, in display order.
    pub const TOKENS: &'static [&'static str] = &["call", "put"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "call" => Some(OptionType::Call),
            "put" => Some(OptionType::Put),
            _ => None,
        }
    }

    /// Wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Capitalised form for input echo rows.
    pub fn display(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

/// Variance-reduction choice for the Monte Carlo instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlVariate {
    None,
    Geometric,
}

impl ControlVariate {
    pub const TOKENS: &'static [&'static str] = &["none", "geometric"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "none" => Some(ControlVariate::None),
            "geometric" => Some(ControlVariate::Geometric),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlVariate::None => "none",
            ControlVariate::Geometric => "geometric",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            ControlVariate::None => "None",
            ControlVariate::Geometric => "Geometric",
        }
    }
}

/// Swap leg payment frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    #[serde(rename = "1M")]
    Monthly,
    #[serde(rename = "3M")]
    Quarterly,
    #[serde(rename = "6M")]
    SemiAnnual,
    #[serde(rename = "12M")]
    Annual,
}

impl PaymentFrequency {
    pub const TOKENS: &'static [&'static str] = &["1M", "3M", "6M", "12M"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1M" => Some(PaymentFrequency::Monthly),
            "3M" => Some(PaymentFrequency::Quarterly),
            "6M" => Some(PaymentFrequency::SemiAnnual),
            "12M" => Some(PaymentFrequency::Annual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "1M",
            PaymentFrequency::Quarterly => "3M",
            PaymentFrequency::SemiAnnual => "6M",
            PaymentFrequency::Annual => "12M",
        }
    }
}

/// Day count convention for a swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCount {
    #[serde(rename = "30/360")]
    Thirty360,
    #[serde(rename = "ACT/360")]
    Act360,
    #[serde(rename = "ACT/365")]
    Act365,
}

impl DayCount {
    pub const TOKENS: &'static [&'static str] = &["30/360", "ACT/360", "ACT/365"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "30/360" => Some(DayCount::Thirty360),
            "ACT/360" => Some(DayCount::Act360),
            "ACT/365" => Some(DayCount::Act365),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayCount::Thirty360 => "30/360",
            DayCount::Act360 => "ACT/360",
            DayCount::Act365 => "ACT/365",
        }
    }
}

/// Business day adjustment convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    #[serde(rename = "Following")]
    Following,
    #[serde(rename = "Modified Following")]
    ModifiedFollowing,
    #[serde(rename = "Preceding")]
    Preceding,
}

impl BusinessDayConvention {
    pub const TOKENS: &'static [&'static str] =
        &["Following", "Modified Following", "Preceding"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Following" => Some(BusinessDayConvention::Following),
            "Modified Following" => Some(BusinessDayConvention::ModifiedFollowing),
            "Preceding" => Some(BusinessDayConvention::Preceding),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
        }
    }
}
