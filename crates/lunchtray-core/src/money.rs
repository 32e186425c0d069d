//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  An order of $5.50 + $2.50 + $0.50 must total EXACTLY $8.50,           │
//! │  and 8% tax on it must round the same way on every machine.            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    550 + 250 + 50 = 850 cents, always                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lunchtray_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(550); // $5.50
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(250); // $8.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(5.50); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Catalog prices are non-negative, but keeping the sign
///   lets validation detect and report a bad (negative) price instead of
///   silently wrapping.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  MenuItem.price_cents ──► OrderState slot ──► item_total               │
/// │                                                                         │
/// │  item_total ──► Tax Calculation ──► order_total ──► Checkout display   │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use lunchtray_core::money::Money;
    ///
    /// let price = Money::from_cents(550); // Represents $5.50
    /// assert_eq!(price.cents(), 550);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The catalog, calculations, and snapshots all use cents.
    /// Only the UI converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use lunchtray_core::money::Money;
    ///
    /// let price = Money::from_major_minor(5, 50); // $5.50
    /// assert_eq!(price.cents(), 550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use lunchtray_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`
    /// The +5000 provides round-half-up behavior (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use lunchtray_core::money::Money;
    /// use lunchtray_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(850); // $8.50
    /// let rate = TaxRate::from_bps(800);     // 8%
    ///
    /// let tax = subtotal.calculate_tax(rate);
    /// // $8.50 × 8% = $0.68
    /// assert_eq!(tax.cents(), 68);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Item Total: $8.50
    ///      │
    ///      ▼
    /// calculate_tax(8%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: $0.68
    ///      │
    ///      ▼
    /// Order Total: $9.18
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 800 = 8%
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
