//! Scoped outside-click subscriptions.
//!
//! The host UI owns the actual listener. An edit session holds an
//! [`OutsideClickSubscription`] only while one of its dropdowns is open;
//! dropping the guard detaches the listener, whichever way the session ends.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Identifier of one attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Host capability that reports clicks outside the editor region.
///
/// When such a click happens the host calls
/// [`ProfileEditor::dismiss_dropdowns`](crate::ProfileEditor::dismiss_dropdowns).
pub trait OutsideClickSource: Send + Sync {
    /// Starts listening for outside clicks.
    fn attach(&self) -> SubscriptionId;

    /// Stops the listener started by [`attach`](OutsideClickSource::attach).
    fn detach(&self, id: SubscriptionId);
}

/// RAII guard over an attached listener.
pub struct OutsideClickSubscription {
    source: Arc<dyn OutsideClickSource>,
    id: SubscriptionId,
}

impl OutsideClickSubscription {
    pub fn acquire(source: &Arc<dyn OutsideClickSource>) -> Self {
        let id = source.attach();
        tracing::debug!(id = id.0, "Outside-click listener attached");
        Self {
            source: Arc::clone(source),
            id,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        self.source.detach(self.id);
        tracing::debug!(id = self.id.0, "Outside-click listener detached");
    }
}

impl std::fmt::Debug for OutsideClickSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutsideClickSubscription")
            .field("id", &self.id)
            .finish()
    }
}

/// In-process [`OutsideClickSource`] that tracks which listeners are attached.
///
/// Hosts without a pointer device use it as-is; hosts with one can query
/// [`is_listening`](OutsideClickRegistry::is_listening) before routing a click.
#[derive(Debug, Default)]
pub struct OutsideClickRegistry {
    next_id: AtomicU64,
    active: Mutex<HashSet<SubscriptionId>>,
}

impl OutsideClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently attached.
    pub fn active_count(&self) -> usize {
        self.active.lock().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_listening(&self) -> bool {
        self.active_count() > 0
    }
}

impl OutsideClickSource for OutsideClickRegistry {
    fn attach(&self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut active) = self.active.lock() {
            active.insert(id);
        }
        id
    }

    fn detach(&self, id: SubscriptionId) {
        if let Ok(mut active) = self.active.lock() {
            active.remove(&id);
        }
    }
}
