/// Message shown when a resolver run fails, whatever the cause
pub const DEFAULT_FETCH_ERROR_MESSAGE: &str = "Failed to fetch assets.";

/// Lower price bound used by the config loader
pub const ENV_MIN_PRICE: &str = "CLOSET_MIN_PRICE";

/// Upper price bound used by the config loader
pub const ENV_MAX_PRICE: &str = "CLOSET_MAX_PRICE";

/// Override for the user-visible fetch error
pub const ENV_FETCH_ERROR_MESSAGE: &str = "CLOSET_FETCH_ERROR_MESSAGE";
