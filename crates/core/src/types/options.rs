//! Enumerated product options.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a drink can be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServingType {
    #[default]
    Hot,
    Iced,
    Both,
}

impl fmt::Display for ServingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hot => write!(f, "hot"),
            Self::Iced => write!(f, "iced"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl FromStr for ServingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(Self::Hot),
            "iced" => Ok(Self::Iced),
            "both" => Ok(Self::Both),
            _ => Err(format!("invalid serving type: {s}")),
        }
    }
}

/// Cup size.
///
/// The three standard sizes drive size pricing. They are read from either
/// the selector label (`S`) or the full name (`Small`), in any case, and
/// always written back as the selector label. Anything else is kept as a
/// free-form label and priced at the base price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum CupSize {
    Small,
    #[default]
    Medium,
    Large,
    Other(String),
}

impl CupSize {
    /// Price delta relative to the medium (base) price.
    #[must_use]
    pub fn price_delta(&self) -> Decimal {
        match self {
            Self::Small => Decimal::new(-50, 2),
            Self::Large => Decimal::new(50, 2),
            Self::Medium | Self::Other(_) => Decimal::ZERO,
        }
    }

    /// Short label shown on the size selector.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for CupSize {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "small" => Self::Small,
            "m" | "medium" => Self::Medium,
            "l" | "large" => Self::Large,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for CupSize {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<CupSize> for String {
    fn from(size: CupSize) -> Self {
        size.label().to_owned()
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    Deliver,
    Pickup,
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deliver => write!(f, "deliver"),
            Self::Pickup => write!(f, "pickup"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_type_wire_names() {
        assert_eq!(serde_json::to_string(&ServingType::Iced).unwrap(), "\"iced\"");
        let parsed: ServingType = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(parsed, ServingType::Both);
        assert!("lukewarm".parse::<ServingType>().is_err());
    }

    #[test]
    fn test_cup_size_parsing() {
        assert_eq!(CupSize::from("S"), CupSize::Small);
        assert_eq!(CupSize::from("L"), CupSize::Large);
        assert_eq!(CupSize::from("Venti"), CupSize::Other("Venti".to_owned()));
    }

    #[test]
    fn test_cup_size_full_names() {
        assert_eq!(CupSize::from("Small"), CupSize::Small);
        assert_eq!(CupSize::from("medium"), CupSize::Medium);
        assert_eq!(CupSize::from("LARGE"), CupSize::Large);
        assert_eq!(CupSize::from("Large").label(), "L");
        assert_eq!(CupSize::from("Large").price_delta(), Decimal::new(50, 2));
    }

    #[test]
    fn test_cup_size_free_form_round_trips_through_serde() {
        let json = serde_json::to_string(&CupSize::Other("Venti".to_owned())).unwrap();
        assert_eq!(json, "\"Venti\"");
        let parsed: CupSize = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(parsed, CupSize::Medium);
    }

    #[test]
    fn test_price_delta() {
        assert_eq!(CupSize::Small.price_delta(), Decimal::new(-50, 2));
        assert_eq!(CupSize::Medium.price_delta(), Decimal::ZERO);
        assert_eq!(CupSize::Other("XL".to_owned()).price_delta(), Decimal::ZERO);
    }
}
