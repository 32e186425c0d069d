//! # lunchtray-session: Session State Layer
//!
//! Owns the live order for one sitting and everything the UI shell needs to
//! drive it: the validated catalog, deployment configuration, and a snapshot
//! channel for observers.
//!
//! ## Module Organization
//! ```text
//! lunchtray_session/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── session.rs      ◄─── OrderSession, Receipt, snapshot broadcasting
//! ├── catalog.rs      ◄─── Validated, ordered menu data per course
//! └── config.rs       ◄─── SessionConfig (tax rate, store name)
//! ```
//!
//! ## Typical Flow
//! ```rust
//! use lunchtray_core::Course;
//! use lunchtray_session::{Catalog, OrderSession};
//!
//! let catalog = Catalog::lunch_tray();
//! let session = OrderSession::new();
//!
//! // The navigation shell walks the user through the courses; the session
//! // does not care about the order of calls.
//! let chili = catalog.find(Course::Entree, "Three Bean Chili").unwrap();
//! session.set_entree(chili.clone());
//!
//! let rice = catalog.find(Course::SideDish, "Coconut Rice").unwrap();
//! session.set_side_dish(rice.clone());
//!
//! // Checkout summary reads one snapshot
//! let snap = session.snapshot();
//! assert_eq!(snap.item_total_cents, 550);
//!
//! let receipt = session.checkout();
//! assert_eq!(receipt.order.order_total_cents, 594);
//! assert!(session.snapshot().is_empty());
//! ```

pub mod catalog;
pub mod config;
pub mod session;

pub use catalog::Catalog;
pub use config::SessionConfig;
pub use session::{OrderSession, Receipt};

// Re-export the core types callers need alongside the session API.
pub use lunchtray_core::{Course, MenuItem, Money, OrderSnapshot, OrderState, TaxRate};
