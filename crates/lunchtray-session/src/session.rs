//! # Order Session
//!
//! Owns the single live [`OrderState`] for one order session and broadcasts
//! a fresh snapshot to observers after every completed mutation.
//!
//! ## Thread Safety
//! The order is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple callers may access/modify the order
//! 2. Only one caller should modify the order at a time
//! 3. Observers must never see a half-applied mutation
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Session Operations                             │
//! │                                                                         │
//! │  User Action              Session Call             Order State Change   │
//! │  ───────────              ────────────             ──────────────────   │
//! │                                                                         │
//! │  Pick entree ───────────► set_entree() ──────────► entree slot set     │
//! │                                                                         │
//! │  Pick side dish ────────► set_side_dish() ───────► side_dish slot set  │
//! │                                                                         │
//! │  Pick accompaniment ────► set_accompaniment() ───► accompaniment set   │
//! │                                                                         │
//! │  Cancel ────────────────► reset_order() ─────────► all slots cleared   │
//! │                                                                         │
//! │  Submit at checkout ────► checkout() ────────────► receipt, then reset │
//! │                                                                         │
//! │  View summary ──────────► snapshot() ────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Every mutation publishes one snapshot on the watch channel       │
//! │        while still holding the lock, so subscribers always observe      │
//! │        fully applied states, in mutation order.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use lunchtray_core::{Course, MenuItem, OrderSnapshot, OrderState};

use crate::config::SessionConfig;

// =============================================================================
// Receipt
// =============================================================================

/// A completed order, captured at checkout before the session resets.
///
/// Cancel and checkout both end in the same empty state; the receipt is what
/// distinguishes them. A cancelled order produces none.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Receipt identifier (UUID v4).
    pub id: String,

    /// Session that produced this receipt.
    pub session_id: String,

    /// Store name at time of checkout.
    pub store_name: String,

    /// The final order: selections and totals, frozen.
    pub order: OrderSnapshot,

    /// When checkout completed.
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Order Session
// =============================================================================

/// The live order for one session.
///
/// ## Lifecycle
/// Created once when the user starts ordering, mutated by one call per
/// selection event, and reset (not destroyed) on cancel or checkout. The
/// session object itself lives for the whole sitting.
///
/// ## Observation
/// `subscribe()` hands out a `watch::Receiver<OrderSnapshot>`. The channel
/// always holds the snapshot of the latest completed mutation; a subscriber
/// that misses intermediate states still converges on the current one.
#[derive(Debug)]
pub struct OrderSession {
    /// Session identifier (UUID v4), for logs and receipts.
    id: String,

    /// When the session started.
    started_at: DateTime<Utc>,

    /// Deployment settings (tax rate, store name).
    config: SessionConfig,

    /// The single live order. See module docs for the locking contract.
    order: Arc<Mutex<OrderState>>,

    /// Publishes a snapshot after every completed mutation.
    snapshot_tx: watch::Sender<OrderSnapshot>,

    /// Keep one receiver alive so the channel never closes.
    _snapshot_rx: watch::Receiver<OrderSnapshot>,
}

impl OrderSession {
    /// Starts a session with the default (lunch counter) configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Starts a session with explicit deployment configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        let order = OrderState::with_tax_rate(config.tax_rate());
        let (snapshot_tx, snapshot_rx) = watch::channel(order.snapshot());
        let id = Uuid::new_v4().to_string();

        info!(session_id = %id, store = %config.store_name, "order session started");

        OrderSession {
            id,
            started_at: Utc::now(),
            config,
            order: Arc::new(Mutex::new(order)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Session identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the session started.
    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Deployment configuration.
    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Selects the entree. Returns the post-mutation snapshot.
    pub fn set_entree(&self, item: MenuItem) -> OrderSnapshot {
        self.mutate("set_entree", |order| order.set_entree(item))
    }

    /// Selects the side dish. Returns the post-mutation snapshot.
    pub fn set_side_dish(&self, item: MenuItem) -> OrderSnapshot {
        self.mutate("set_side_dish", |order| order.set_side_dish(item))
    }

    /// Selects the accompaniment. Returns the post-mutation snapshot.
    pub fn set_accompaniment(&self, item: MenuItem) -> OrderSnapshot {
        self.mutate("set_accompaniment", |order| order.set_accompaniment(item))
    }

    /// Routes a selection to the slot for the given course.
    pub fn select(&self, course: Course, item: MenuItem) -> OrderSnapshot {
        self.mutate("select", |order| order.select(course, item))
    }

    /// Discards the order: clears every slot and zeroes the totals.
    ///
    /// Used on cancel from any step. Idempotent.
    pub fn reset_order(&self) -> OrderSnapshot {
        self.mutate("reset_order", OrderState::reset)
    }

    /// Completes the order: captures a receipt, then resets to empty.
    ///
    /// The receipt freezes the selections and totals as they stood at the
    /// moment of checkout; the reset observers see afterwards is the same
    /// empty state a cancel produces.
    pub fn checkout(&self) -> Receipt {
        let (receipt_order, empty) = {
            let mut order = self.order.lock().expect("order mutex poisoned");
            let final_snapshot = order.snapshot();
            order.reset();
            let empty = order.snapshot();
            self.snapshot_tx.send_replace(empty.clone());
            (final_snapshot, empty)
        };
        debug_assert!(empty.is_empty());

        let receipt = Receipt {
            id: Uuid::new_v4().to_string(),
            session_id: self.id.clone(),
            store_name: self.config.store_name.clone(),
            order: receipt_order,
            completed_at: Utc::now(),
        };

        info!(
            session_id = %self.id,
            receipt_id = %receipt.id,
            total_cents = receipt.order.order_total_cents,
            "order checked out"
        );

        receipt
    }

    /// Applies one mutation under the lock and publishes the result.
    ///
    /// The snapshot is sent before the lock is released so the channel
    /// carries snapshots in mutation order.
    fn mutate<F>(&self, op: &'static str, f: F) -> OrderSnapshot
    where
        F: FnOnce(&mut OrderState),
    {
        let snapshot = {
            let mut order = self.order.lock().expect("order mutex poisoned");
            f(&mut order);
            let snapshot = order.snapshot();
            self.snapshot_tx.send_replace(snapshot.clone());
            snapshot
        };

        debug!(
            session_id = %self.id,
            op,
            item_total_cents = snapshot.item_total_cents,
            order_total_cents = snapshot.order_total_cents,
            "order mutated"
        );

        snapshot
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// Snapshot of the current order state.
    ///
    /// Reflects the latest completed mutation; before any selection this is
    /// the documented empty state, not an error.
    pub fn snapshot(&self) -> OrderSnapshot {
        self.order
            .lock()
            .expect("order mutex poisoned")
            .snapshot()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver immediately holds the current snapshot and is updated on
    /// every completed mutation. Dropping it never affects the session.
    pub fn subscribe(&self) -> watch::Receiver<OrderSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Executes a function with read access to the order.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let has_entree = session.with_order(|order| order.entree().is_some());
    /// ```
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderState) -> R,
    {
        let order = self.order.lock().expect("order mutex poisoned");
        f(&order)
    }

    /// Executes a function with write access to the order.
    ///
    /// Publishes a post-mutation snapshot exactly like the named mutators,
    /// so a closure-driven mutation cannot slip past observers.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_order_mut(|order| order.set_entree(item));
    /// ```
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderState) -> R,
    {
        let (result, snapshot) = {
            let mut order = self.order.lock().expect("order mutex poisoned");
            let result = f(&mut order);
            let snapshot = order.snapshot();
            self.snapshot_tx.send_replace(snapshot.clone());
            (result, snapshot)
        };

        debug!(
            session_id = %self.id,
            op = "with_order_mut",
            item_total_cents = snapshot.item_total_cents,
            order_total_cents = snapshot.order_total_cents,
            "order mutated"
        );

        result
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lunchtray_core::Money;

    fn burrito() -> MenuItem {
        MenuItem::new("Burrito", 400, "Bean and rice burrito")
    }

    fn rice() -> MenuItem {
        MenuItem::new("Rice", 150, "Steamed rice")
    }

    fn salsa() -> MenuItem {
        MenuItem::new("Salsa", 50, "House salsa")
    }

    #[test]
    fn test_fresh_session_snapshot_is_empty() {
        let session = OrderSession::new();
        let snap = session.snapshot();
        assert!(snap.is_empty());
        assert_eq!(snap.order_total_cents, 0);
    }

    #[test]
    fn test_mutators_return_post_mutation_snapshot() {
        let session = OrderSession::new();

        let snap = session.set_entree(burrito());
        assert_eq!(snap.item_total_cents, 400);

        let snap = session.set_side_dish(rice());
        assert_eq!(snap.item_total_cents, 550);

        let snap = session.set_accompaniment(salsa());
        assert_eq!(snap.item_total_cents, 600);
        assert_eq!(snap.tax_cents, 48);
        assert_eq!(snap.order_total_cents, 648);
    }

    #[test]
    fn test_reset_order_clears_everything() {
        let session = OrderSession::new();
        session.set_entree(burrito());
        session.set_side_dish(rice());

        let snap = session.reset_order();
        assert!(snap.is_empty());
        assert_eq!(snap.order_total_cents, 0);

        // Idempotent
        let again = session.reset_order();
        assert_eq!(snap, again);
    }

    #[test]
    fn test_subscriber_sees_latest_completed_mutation() {
        let session = OrderSession::new();
        let rx = session.subscribe();

        assert!(rx.borrow().is_empty());

        session.set_entree(burrito());
        assert_eq!(rx.borrow().item_total_cents, 400);

        session.reset_order();
        assert!(rx.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_subscriber_is_notified_of_changes() {
        let session = OrderSession::new();
        let mut rx = session.subscribe();

        session.set_side_dish(rice());
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().item_total_cents, 150);
    }

    #[test]
    fn test_checkout_returns_receipt_and_resets() {
        let session = OrderSession::new();
        session.set_entree(burrito());
        session.set_side_dish(rice());
        session.set_accompaniment(salsa());

        let receipt = session.checkout();

        assert_eq!(receipt.session_id, session.id());
        assert_eq!(receipt.order.order_total_cents, 648);
        assert_eq!(receipt.order.entree, Some(burrito()));

        // Session is back to empty, ready for the next order
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn test_checkout_of_empty_order_yields_zero_receipt() {
        let session = OrderSession::new();
        let receipt = session.checkout();
        assert!(receipt.order.is_empty());
        assert_eq!(receipt.order.order_total_cents, 0);
    }

    #[test]
    fn test_with_order_reads_under_lock() {
        let session = OrderSession::new();
        session.set_entree(burrito());

        let total = session.with_order(|order| order.item_total());
        assert_eq!(total, Money::from_cents(400));
    }

    #[test]
    fn test_with_order_mut_publishes_to_observers() {
        let session = OrderSession::new();
        let rx = session.subscribe();

        session.with_order_mut(|order| order.set_entree(burrito()));

        // The closure-driven mutation is visible on the channel, same as a
        // named mutator
        assert_eq!(rx.borrow().item_total_cents, 400);
        assert_eq!(session.snapshot().item_total_cents, 400);
    }

    #[test]
    fn test_with_order_mut_returns_closure_result() {
        let session = OrderSession::new();

        let total = session.with_order_mut(|order| {
            order.set_side_dish(rice());
            order.item_total()
        });

        assert_eq!(total, Money::from_cents(150));
    }

    #[test]
    fn test_receipt_json_round_trip() {
        let session = OrderSession::new();
        session.set_entree(burrito());
        session.set_accompaniment(salsa());

        let receipt = session.checkout();

        let json = serde_json::to_string(&receipt).unwrap();
        let parsed: Receipt = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, receipt.id);
        assert_eq!(parsed.session_id, receipt.session_id);
        assert_eq!(parsed.order, receipt.order);
        assert_eq!(parsed.completed_at, receipt.completed_at);

        // Field names cross the UI boundary in camelCase
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["sessionId"].is_string());
        assert_eq!(value["order"]["orderTotalCents"], 486);
    }

    #[test]
    fn test_custom_config_tax_rate() {
        let config = SessionConfig {
            tax_rate_bps: 0,
            ..SessionConfig::default()
        };
        let session = OrderSession::with_config(config);

        let snap = session.set_entree(burrito());
        assert_eq!(snap.tax_cents, 0);
        assert_eq!(snap.order_total_cents, snap.item_total_cents);
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a = OrderSession::new();
        let b = OrderSession::new();
        assert_ne!(a.id(), b.id());
    }
}
