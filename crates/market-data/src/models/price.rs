use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Listing price as shown to the user.
///
/// Keeps the decimal string the detail source produced alongside its parsed
/// value. Parsing happens once, here; a string that is not a decimal number
/// yields a price with no value instead of an error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Price {
    raw: String,
    value: Option<Decimal>,
}

impl Price {
    /// Parse a decimal string. Never fails.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok();
        Self { raw, value }
    }

    /// The decimal string as received.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The numeric value, if the string was a number.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self {
            raw: value.to_string(),
            value: Some(value),
        }
    }
}

impl From<&str> for Price {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal() {
        let price = Price::parse("1.25");
        assert_eq!(price.value(), Some(dec!(1.25)));
        assert_eq!(price.as_str(), "1.25");
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(Price::parse(" 100 ").value(), Some(dec!(100)));
    }

    #[test]
    fn test_parse_non_numeric_has_no_value() {
        let price = Price::parse("free");
        assert!(!price.is_numeric());
        assert_eq!(price.to_string(), "free");
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(Price::parse("1e3").value(), Some(dec!(1000)));
    }

    #[test]
    fn test_serializes_raw_string() {
        let price = Price::parse("0.50");
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"0.50\"");

        let back: Price = serde_json::from_str("\"0.50\"").unwrap();
        assert_eq!(back.value(), Some(dec!(0.50)));
    }
}
