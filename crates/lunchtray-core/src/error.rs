//! # Error Types
//!
//! Validation errors for lunchtray-core.
//!
//! ## Where errors live (and where they don't)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Boundaries                                │
//! │                                                                         │
//! │  Catalog construction ──► ValidationError (this file)                  │
//! │    A catalog with a negative price or a nameless dish is a data bug    │
//! │    and is rejected up front, before any order can reference it.        │
//! │                                                                         │
//! │  Order mutation ──► infallible                                         │
//! │    Every setter and reset on OrderState is a total function. The       │
//! │    state machine does not re-check catalog membership or re-validate   │
//! │    items: that screening already happened at the catalog boundary.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when externally supplied catalog data doesn't meet requirements.
/// Used for early validation before any order is built against the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A menu item carries a negative price.
    #[error("menu item '{name}' has a negative price ({cents} cents)")]
    NegativePrice { name: String, cents: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type CoreResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NegativePrice {
            name: "Mystery Soup".to_string(),
            cents: -100,
        };
        assert_eq!(
            err.to_string(),
            "menu item 'Mystery Soup' has a negative price (-100 cents)"
        );
    }
}
