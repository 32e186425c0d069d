//! # Validation Module
//!
//! Validation for externally supplied catalog data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction (this module)                           │
//! │  ├── Every MenuItem checked before the catalog is usable               │
//! │  └── Rejects nameless dishes and negative prices                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Order state (none, by design)                                │
//! │  └── Setters accept any MenuItem; the state machine trusts its        │
//! │      caller and stays a total function over its inputs                 │
//! │                                                                         │
//! │  Validation happens once, at the boundary where bad data can enter.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::MenuItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a menu item name.
pub const MAX_NAME_LENGTH: usize = 80;

/// Validates a menu item before it enters a catalog.
///
/// ## Rules
/// - Name must not be empty (after trimming)
/// - Name must be at most [`MAX_NAME_LENGTH`] characters
/// - Price must be non-negative
///
/// ## Example
/// ```rust
/// use lunchtray_core::types::MenuItem;
/// use lunchtray_core::validation::validate_menu_item;
///
/// let ok = MenuItem::new("Lunch Roll", 50, "Fresh baked roll made in house");
/// assert!(validate_menu_item(&ok).is_ok());
///
/// let bad = MenuItem::new("", 50, "Anonymous bread");
/// assert!(validate_menu_item(&bad).is_err());
/// ```
pub fn validate_menu_item(item: &MenuItem) -> ValidationResult<()> {
    let name = item.name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    if item.price_cents < 0 {
        return Err(ValidationError::NegativePrice {
            name: name.to_string(),
            cents: item.price_cents,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item_passes() {
        let item = MenuItem::new("Summer Salad", 250, "Heirloom tomatoes, butter lettuce");
        assert!(validate_menu_item(&item).is_ok());
    }

    #[test]
    fn test_free_item_passes() {
        // Zero is a legal price (a complimentary accompaniment)
        let item = MenuItem::new("Water", 0, "Tap water");
        assert!(validate_menu_item(&item).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let item = MenuItem::new("   ", 250, "Whitespace only");
        assert_eq!(
            validate_menu_item(&item),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_overlong_name_rejected() {
        let item = MenuItem::new("X".repeat(MAX_NAME_LENGTH + 1), 250, "Too chatty");
        assert!(matches!(
            validate_menu_item(&item),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let item = MenuItem::new("Mystery Soup", -100, "Pays you to eat it");
        assert_eq!(
            validate_menu_item(&item),
            Err(ValidationError::NegativePrice {
                name: "Mystery Soup".to_string(),
                cents: -100
            })
        );
    }
}
