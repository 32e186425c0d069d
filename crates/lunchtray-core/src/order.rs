//! # Order State
//!
//! The order state machine: one slot per course, a derived item total, and a
//! reset that returns to the empty state.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order State Operations                               │
//! │                                                                         │
//! │  User Action               Operation               State Change         │
//! │  ───────────               ─────────               ────────────         │
//! │                                                                         │
//! │  Pick entree ────────────► set_entree() ─────────► entree = Some(item) │
//! │                                                                         │
//! │  Pick side dish ─────────► set_side_dish() ──────► side_dish = Some    │
//! │                                                                         │
//! │  Pick accompaniment ─────► set_accompaniment() ──► accompaniment = Some│
//! │                                                                         │
//! │  Cancel / finish ────────► reset() ──────────────► all slots = None    │
//! │                                                                         │
//! │  Review checkout ────────► snapshot() ───────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Every mutation recomputes item_total in full from the three     │
//! │        slots. There is no incremental accounting to drift.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What this is NOT
//! The "choose entree, then side, then accompaniment" sequence belongs to the
//! navigation shell. OrderState accepts selections for any course in any
//! order, any number of times; the latest selection per slot wins.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Course, MenuItem, TaxRate};

/// Sales tax rate charged by the lunch counter deployment: 8%.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(800);

// =============================================================================
// Order State
// =============================================================================

/// The in-progress order: three selection slots plus the derived item total.
///
/// ## Invariants
/// - `item_total` always equals the sum of the prices of the set slots;
///   unset slots contribute zero.
/// - Each slot holds at most one item; a second selection for the same
///   course replaces the first.
/// - `reset()` returns to a state indistinguishable from a fresh
///   `OrderState` with the same tax rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderState {
    entree: Option<MenuItem>,
    side_dish: Option<MenuItem>,
    accompaniment: Option<MenuItem>,
    /// Derived: recomputed in full after every mutation.
    item_total: Money,
    /// Pure function of `item_total`; fixed for the life of the order.
    tax_rate: TaxRate,
}

impl OrderState {
    /// Creates an empty order charged at the default 8% tax rate.
    pub fn new() -> Self {
        Self::with_tax_rate(DEFAULT_TAX_RATE)
    }

    /// Creates an empty order with an explicit tax rate.
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        OrderState {
            entree: None,
            side_dish: None,
            accompaniment: None,
            item_total: Money::zero(),
            tax_rate,
        }
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Replaces the entree slot, regardless of its prior value.
    ///
    /// Accepts any MenuItem: whether the item belongs to the official catalog
    /// is the caller's concern, not the state machine's.
    pub fn set_entree(&mut self, item: MenuItem) {
        self.entree = Some(item);
        self.recompute_total();
    }

    /// Replaces the side-dish slot, regardless of its prior value.
    pub fn set_side_dish(&mut self, item: MenuItem) {
        self.side_dish = Some(item);
        self.recompute_total();
    }

    /// Replaces the accompaniment slot, regardless of its prior value.
    pub fn set_accompaniment(&mut self, item: MenuItem) {
        self.accompaniment = Some(item);
        self.recompute_total();
    }

    /// Routes a selection to the slot for the given course.
    ///
    /// Convenience for callers that drive all three menu screens through a
    /// single selection handler.
    pub fn select(&mut self, course: Course, item: MenuItem) {
        match course {
            Course::Entree => self.set_entree(item),
            Course::SideDish => self.set_side_dish(item),
            Course::Accompaniment => self.set_accompaniment(item),
        }
    }

    /// Clears all three slots and zeroes the total, unconditionally.
    ///
    /// Used on both cancel and completed checkout. Idempotent: resetting an
    /// already-empty order changes nothing.
    pub fn reset(&mut self) {
        self.entree = None;
        self.side_dish = None;
        self.accompaniment = None;
        self.recompute_total();
    }

    /// Recomputes the item total from scratch.
    ///
    /// Full recomputation (not incremental) so the cached total can never
    /// drift from the slot contents.
    fn recompute_total(&mut self) {
        self.item_total = [&self.entree, &self.side_dish, &self.accompaniment]
            .into_iter()
            .flatten()
            .map(MenuItem::price)
            .fold(Money::zero(), |acc, price| acc + price);
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// Currently selected entree, if any.
    #[inline]
    pub fn entree(&self) -> Option<&MenuItem> {
        self.entree.as_ref()
    }

    /// Currently selected side dish, if any.
    #[inline]
    pub fn side_dish(&self) -> Option<&MenuItem> {
        self.side_dish.as_ref()
    }

    /// Currently selected accompaniment, if any.
    #[inline]
    pub fn accompaniment(&self) -> Option<&MenuItem> {
        self.accompaniment.as_ref()
    }

    /// Current selection for a course.
    pub fn selection(&self, course: Course) -> Option<&MenuItem> {
        match course {
            Course::Entree => self.entree(),
            Course::SideDish => self.side_dish(),
            Course::Accompaniment => self.accompaniment(),
        }
    }

    /// Sum of the prices of the currently set slots.
    #[inline]
    pub fn item_total(&self) -> Money {
        self.item_total
    }

    /// Tax on the current item total.
    #[inline]
    pub fn tax(&self) -> Money {
        self.item_total.calculate_tax(self.tax_rate)
    }

    /// Item total plus tax.
    #[inline]
    pub fn order_total(&self) -> Money {
        self.item_total + self.tax()
    }

    /// The tax rate this order is charged at.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// True when no course has a selection.
    pub fn is_empty(&self) -> bool {
        self.entree.is_none() && self.side_dish.is_none() && self.accompaniment.is_none()
    }

    /// Takes an owned snapshot of the full current state.
    ///
    /// The snapshot is what crosses the boundary to the checkout summary;
    /// it never changes after being taken.
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            entree: self.entree.clone(),
            side_dish: self.side_dish.clone(),
            accompaniment: self.accompaniment.clone(),
            item_total_cents: self.item_total.cents(),
            tax_cents: self.tax().cents(),
            order_total_cents: self.order_total().cents(),
        }
    }
}

impl Default for OrderState {
    fn default() -> Self {
        OrderState::new()
    }
}

// =============================================================================
// Order Snapshot
// =============================================================================

/// The full value of an order at one instant: three optional selections plus
/// the derived totals.
///
/// This is the read contract for the checkout summary and for state-change
/// observers. All formatting (currency symbols, localization) happens on the
/// consuming side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub entree: Option<MenuItem>,
    pub side_dish: Option<MenuItem>,
    pub accompaniment: Option<MenuItem>,
    /// Sum of set-slot prices, in cents.
    pub item_total_cents: i64,
    /// Tax on the item total, in cents.
    pub tax_cents: i64,
    /// Item total plus tax, in cents.
    pub order_total_cents: i64,
}

impl OrderSnapshot {
    /// An empty snapshot: no selections, zero totals.
    pub fn empty() -> Self {
        OrderSnapshot {
            entree: None,
            side_dish: None,
            accompaniment: None,
            item_total_cents: 0,
            tax_cents: 0,
            order_total_cents: 0,
        }
    }

    /// Item total as Money.
    #[inline]
    pub fn item_total(&self) -> Money {
        Money::from_cents(self.item_total_cents)
    }

    /// Tax as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// Order total as Money.
    #[inline]
    pub fn order_total(&self) -> Money {
        Money::from_cents(self.order_total_cents)
    }

    /// True when no course has a selection.
    pub fn is_empty(&self) -> bool {
        self.entree.is_none() && self.side_dish.is_none() && self.accompaniment.is_none()
    }
}

impl Default for OrderSnapshot {
    fn default() -> Self {
        OrderSnapshot::empty()
    }
}

impl From<&OrderState> for OrderSnapshot {
    fn from(order: &OrderState) -> Self {
        order.snapshot()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
