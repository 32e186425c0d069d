//! # Session Configuration
//!
//! Deployment-level settings for an order session.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

use lunchtray_core::TaxRate;

/// Deployment configuration for order sessions.
///
/// ## Fields
/// All fields have defaults matching the lunch counter deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Store name (displayed on receipts).
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Tax rate in basis points.
    /// e.g., 800 = 8%
    pub tax_rate_bps: u32,
}

impl SessionConfig {
    /// Returns the tax rate as a typed value.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

impl Default for SessionConfig {
    /// Default configuration: the lunch counter.
    ///
    /// ## Default Values
    /// - Store: "Lunch Tray"
    /// - Currency: $ (USD)
    /// - Tax: 8%
    fn default() -> Self {
        SessionConfig {
            store_name: "Lunch Tray".to_string(),
            currency_symbol: "$".to_string(),
            tax_rate_bps: 800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.tax_rate(), TaxRate::from_bps(800));
        assert_eq!(config.currency_symbol, "$");
    }
}
