//! # Domain Types
//!
//! Core domain types for the Lunch Tray order core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │     Course      │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  Entree         │   │  bps (u32)      │       │
//! │  │  price_cents    │   │  SideDish       │   │  800 = 8%       │       │
//! │  │  description    │   │  Accompaniment  │   │                 │       │
//! │  │  image          │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! MenuItems are plain values: the catalog owns them, the order state only
//! ever holds copies of selected ones. Two MenuItems with identical fields
//! are interchangeable for pricing purposes.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (the rate the lunch counter deployment charges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Course
// =============================================================================

/// The three selection slots an order is built from.
///
/// The order in which a user walks through them (entree, then side, then
/// accompaniment) is the navigation shell's concern. The order state itself
/// accepts selections for any course at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    /// Main dish.
    Entree,
    /// Side dish.
    SideDish,
    /// Accompaniment (roll, fruit, etc.).
    Accompaniment,
}

impl Course {
    /// All courses in presentation order.
    pub const ALL: [Course; 3] = [Course::Entree, Course::SideDish, Course::Accompaniment];
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Course::Entree => "entree",
            Course::SideDish => "side dish",
            Course::Accompaniment => "accompaniment",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish available for selection.
///
/// ## Immutability
/// The catalog constructs MenuItems once and hands out references; the order
/// state clones the selected item into its slot. Nothing in the core mutates
/// a MenuItem after construction.
///
/// ## Equality
/// Value equality: two items with identical fields compare equal, which is
/// all pricing ever needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Display name shown on the menu and the checkout summary.
    pub name: String,

    /// Price in cents (smallest currency unit). Non-negative for any item
    /// that passes catalog validation.
    pub price_cents: i64,

    /// Short description shown under the name.
    pub description: String,

    /// Opaque resource handle for the item's picture (asset path, URL).
    /// The core never dereferences it.
    pub image: Option<String>,
}

impl MenuItem {
    /// Creates a menu item without an image.
    pub fn new(
        name: impl Into<String>,
        price_cents: i64,
        description: impl Into<String>,
    ) -> Self {
        MenuItem {
            name: name.into(),
            price_cents,
            description: description.into(),
            image: None,
        }
    }

    /// Attaches an image resource handle, builder-style.
    ///
    /// The handle is opaque to the core; only the presenting UI resolves it.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(8.0);
        assert_eq!(rate.bps(), 800);
    }

    #[test]
    fn test_menu_item_value_equality() {
        let a = MenuItem::new("Coconut Rice", 150, "Rice, coconut milk, lime, and sugar");
        let b = MenuItem::new("Coconut Rice", 150, "Rice, coconut milk, lime, and sugar");
        assert_eq!(a, b);

        let cheaper = MenuItem::new("Coconut Rice", 100, "Rice, coconut milk, lime, and sugar");
        assert_ne!(a, cheaper);
    }

    #[test]
    fn test_menu_item_price() {
        let item = MenuItem::new("Cauliflower", 700, "Whole cauliflower");
        assert_eq!(item.price(), Money::from_cents(700));
    }

    #[test]
    fn test_menu_item_with_image() {
        let plain = MenuItem::new("Cauliflower", 700, "Whole cauliflower");
        assert_eq!(plain.image, None);

        let pictured = plain.clone().with_image("images/cauliflower.jpg");
        assert_eq!(pictured.image.as_deref(), Some("images/cauliflower.jpg"));

        // The image does not participate in pricing, but it does in equality
        assert_eq!(pictured.price(), plain.price());
        assert_ne!(pictured, plain);
    }

    #[test]
    fn test_course_display() {
        assert_eq!(Course::Entree.to_string(), "entree");
        assert_eq!(Course::SideDish.to_string(), "side dish");
        assert_eq!(Course::Accompaniment.to_string(), "accompaniment");
    }
}
