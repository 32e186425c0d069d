//! # lunchtray-core: Pure Business Logic for the Lunch Tray Order Core
//!
//! This crate is the **heart** of the order builder. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lunch Tray Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 UI / Navigation Shell (external)                │   │
//! │  │   Start ──► Entree ──► Side Dish ──► Accompaniment ──► Checkout │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ selections / snapshots                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 lunchtray-session (state layer)                 │   │
//! │  │    OrderSession, Catalog, snapshot broadcasting                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lunchtray-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │ MenuItem  │  │   Money   │  │OrderState │  │   rules   │  │   │
//! │  │   │  Course   │  │  TaxCalc  │  │ Snapshot  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Course, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - The order state machine (OrderState, OrderSnapshot)
//! - [`error`] - Validation error types
//! - [`validation`] - Catalog data validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Mutators**: Order mutations never fail; validation happens at the
//!    catalog boundary, once
//!
//! ## Example Usage
//!
//! ```rust
//! use lunchtray_core::order::OrderState;
//! use lunchtray_core::types::MenuItem;
//!
//! let mut order = OrderState::new();
//! order.set_entree(MenuItem::new("Three Bean Chili", 400, "Slow cooked beans"));
//! order.set_side_dish(MenuItem::new("Coconut Rice", 150, "Rice, coconut milk"));
//!
//! // 4.00 + 1.50 = 5.50, plus 8% tax
//! assert_eq!(order.item_total().cents(), 550);
//! assert_eq!(order.order_total().cents(), 594);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lunchtray_core::Money` instead of
// `use lunchtray_core::money::Money`

pub use error::{CoreResult, ValidationError};
pub use money::Money;
pub use order::{OrderSnapshot, OrderState, DEFAULT_TAX_RATE};
pub use types::{Course, MenuItem, TaxRate};
