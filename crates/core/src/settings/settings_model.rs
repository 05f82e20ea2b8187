//! Marketplace configuration.

use std::str::FromStr;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_FETCH_ERROR_MESSAGE, ENV_FETCH_ERROR_MESSAGE, ENV_MAX_PRICE, ENV_MIN_PRICE,
};
use crate::errors::{Error, Result};
use crate::marketplace::{FilterCriteria, PriceRange};

/// Initial price bounds. A missing bound is unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialPriceRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl InitialPriceRange {
    pub fn to_price_range(self) -> PriceRange {
        PriceRange::new(
            self.min.unwrap_or(f64::NEG_INFINITY),
            self.max.unwrap_or(f64::INFINITY),
        )
    }
}

/// Settings for the marketplace service.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketplaceConfig {
    /// Bounds new and cleared criteria start from
    pub initial_price_range: InitialPriceRange,

    /// Message exposed when a refresh fails
    pub fetch_error_message: String,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            initial_price_range: InitialPriceRange::default(),
            fetch_error_message: DEFAULT_FETCH_ERROR_MESSAGE.to_string(),
        }
    }
}

impl MarketplaceConfig {
    /// Load from `CLOSET_*` environment variables, reading `.env` if present.
    ///
    /// Unset variables keep their defaults; set but unparsable ones are an
    /// error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(format!("marketplace config: {}", e)))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(min) = parse_var::<f64>(&lookup, ENV_MIN_PRICE)? {
            config.initial_price_range.min = Some(min);
        }
        if let Some(max) = parse_var::<f64>(&lookup, ENV_MAX_PRICE)? {
            config.initial_price_range.max = Some(max);
        }
        if let Some(message) = lookup(ENV_FETCH_ERROR_MESSAGE).filter(|m| !m.trim().is_empty()) {
            config.fetch_error_message = message;
        }

        Ok(config)
    }

    /// Criteria a fresh view starts with.
    pub fn initial_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            price_range: self.initial_price_range.to_price_range(),
            ..FilterCriteria::default()
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::InvalidConfigValue(format!("{}={}", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = MarketplaceConfig::default();
        assert_eq!(config.fetch_error_message, "Failed to fetch assets.");
        assert!(config.initial_criteria().is_unrestricted());
    }

    #[test]
    fn test_env_overrides() {
        let config = MarketplaceConfig::from_lookup(lookup(&[
            ("CLOSET_MIN_PRICE", "0"),
            ("CLOSET_MAX_PRICE", "10000000000"),
            ("CLOSET_FETCH_ERROR_MESSAGE", "Could not load the closet."),
        ]))
        .unwrap();

        let range = config.initial_criteria().price_range;
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 10_000_000_000.0);
        assert_eq!(config.fetch_error_message, "Could not load the closet.");
    }

    #[test]
    fn test_blank_env_values_keep_defaults() {
        let config = MarketplaceConfig::from_lookup(lookup(&[
            ("CLOSET_MIN_PRICE", " "),
            ("CLOSET_FETCH_ERROR_MESSAGE", ""),
        ]))
        .unwrap();

        assert_eq!(config, MarketplaceConfig::default());
    }

    #[test]
    fn test_invalid_env_value_is_rejected() {
        let err = MarketplaceConfig::from_lookup(lookup(&[("CLOSET_MAX_PRICE", "lots")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(ref v) if v == "CLOSET_MAX_PRICE=lots"));
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            MarketplaceConfig::from_json(r#"{ "initialPriceRange": { "max": 250.5 } }"#).unwrap();

        assert_eq!(config.initial_price_range.min, None);
        assert_eq!(config.initial_price_range.max, Some(250.5));
        assert_eq!(config.fetch_error_message, "Failed to fetch assets.");
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        assert!(MarketplaceConfig::from_json(r#"{ "initialPriceRange": { "min": "cheap" } }"#).is_err());
    }
}
