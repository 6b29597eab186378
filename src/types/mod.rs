//! Type definitions shared across the crate

use serde::{Deserialize, Serialize};

use crate::errors::TransportError;

pub mod district_catalog;

/// Default storage slot holding the serialized order list.
pub const DEFAULT_STORAGE_KEY: &str = "crackers_craze_transport_orders";

/// Widest accepted zero-pad width for order codes.
pub const MAX_ORDER_CODE_WIDTH: usize = 12;

/// Transport order configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Storage slot name
    pub storage_key:              String,
    /// Prefix of the display order code
    pub order_code_prefix:        String,
    /// Zero-pad width of the order code ordinal
    pub order_code_width:         usize,
    /// Reject pickup/drop points not listed for the selected district
    pub enforce_district_catalog: bool,
    /// Seed the sample order when the storage slot is empty
    pub seed_sample_order:        bool,
    /// Page size used when a caller asks for zero
    pub default_page_size:        usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            storage_key:              DEFAULT_STORAGE_KEY.to_string(),
            order_code_prefix:        "TRN".to_string(),
            order_code_width:         3,
            enforce_district_catalog: false,
            seed_sample_order:        false,
            default_page_size:        10,
        }
    }
}

impl TransportConfig {
    /// Parses a configuration from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TransportError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the value ranges `apply_setting` enforces.
    pub fn validate(&self) -> Result<(), TransportError> {
        let invalid = |key: &str, reason: &str| TransportError::InvalidConfig {
            key:    key.to_string(),
            reason: reason.to_string(),
        };

        if self.storage_key.trim().is_empty() {
            return Err(invalid("storage_key", "must not be empty"));
        }
        if !(1..=MAX_ORDER_CODE_WIDTH).contains(&self.order_code_width) {
            return Err(invalid("order_code_width", "must be between 1 and 12"));
        }
        if self.default_page_size == 0 {
            return Err(invalid("default_page_size", "must be greater than 0"));
        }
        Ok(())
    }

    /// Sets the storage slot name.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Enables or disables the district catalog check.
    #[must_use]
    pub fn with_district_catalog(mut self, enforce: bool) -> Self {
        self.enforce_district_catalog = enforce;
        self
    }

    /// Enables or disables seeding the sample order.
    #[must_use]
    pub fn with_sample_order(mut self, seed: bool) -> Self {
        self.seed_sample_order = seed;
        self
    }

    /// Formats the display code for the given ordinal, e.g. `TRN007`.
    #[must_use]
    pub fn order_code(&self, ordinal: usize) -> String {
        format!(
            "{}{:0width$}",
            self.order_code_prefix,
            ordinal,
            width = self.order_code_width
        )
    }

    /// Applies a single `key = value` setting.
    pub fn apply_setting(&mut self, key: &str, value: &str) -> Result<(), TransportError> {
        let invalid = |reason: &str| TransportError::InvalidConfig {
            key:    key.to_string(),
            reason: reason.to_string(),
        };

        match key {
            "storage_key" => {
                if value.trim().is_empty() {
                    return Err(invalid("must not be empty"));
                }
                self.storage_key = value.to_string();
            },
            "order_code_prefix" => self.order_code_prefix = value.to_string(),
            "order_code_width" => {
                let width: usize = value.parse().map_err(|_| invalid("expected a number"))?;
                if !(1..=MAX_ORDER_CODE_WIDTH).contains(&width) {
                    return Err(invalid("must be between 1 and 12"));
                }
                self.order_code_width = width;
            },
            "enforce_district_catalog" => {
                self.enforce_district_catalog =
                    value.parse().map_err(|_| invalid("expected true or false"))?;
            },
            "seed_sample_order" => {
                self.seed_sample_order =
                    value.parse().map_err(|_| invalid("expected true or false"))?;
            },
            "default_page_size" => {
                let size: usize = value.parse().map_err(|_| invalid("expected a number"))?;
                if size == 0 {
                    return Err(invalid("must be greater than 0"));
                }
                self.default_page_size = size;
            },
            _ => return Err(invalid("unknown key")),
        }
        Ok(())
    }

    /// Applies settings in order, stopping at the first bad one.
    pub fn apply_settings(&mut self, settings: &[(String, String)]) -> Result<(), TransportError> {
        for (key, value) in settings {
            self.apply_setting(key, value)?;
        }
        Ok(())
    }

    /// Current settings as `key = value` pairs.
    #[must_use]
    pub fn settings(&self) -> Vec<(String, String)> {
        vec![
            ("storage_key".to_string(), self.storage_key.clone()),
            ("order_code_prefix".to_string(), self.order_code_prefix.clone()),
            ("order_code_width".to_string(), self.order_code_width.to_string()),
            (
                "enforce_district_catalog".to_string(),
                self.enforce_district_catalog.to_string(),
            ),
            ("seed_sample_order".to_string(), self.seed_sample_order.to_string()),
            ("default_page_size".to_string(), self.default_page_size.to_string()),
        ]
    }
}
