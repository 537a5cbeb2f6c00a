//! Alert Queue
//!
//! Transient user-facing notifications with auto-expiry. Each push spawns a
//! cancellable timer task that removes its alert by identifier once the TTL
//! elapses; `shutdown` cancels every pending timer deterministically.

use parking_lot::Mutex;
use rand::random;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Information,
    Warning,
    Error,
}

/// One queued notification. The id is random and collision-tolerant: it is
/// used only to look the alert up for removal, and removal takes the first
/// match so a colliding id cannot remove more than one alert.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub severity: AlertSeverity,
}

pub struct AlertQueue {
    alerts: Arc<watch::Sender<Vec<Alert>>>,
    timers: Arc<Mutex<HashMap<u64, JoinHandle<()>>>>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self {
            alerts: Arc::new(watch::channel(Vec::new()).0),
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Current alerts in display (insertion) order.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<Vec<Alert>> {
        self.alerts.subscribe()
    }

    /// Append an alert and schedule its removal after `ttl`. Must be called
    /// from within a tokio runtime. Returns the generated id.
    pub fn push(&self, message: impl Into<String>, severity: AlertSeverity, ttl: Duration) -> u64 {
        let id = random::<u64>();
        let alert = Alert {
            id,
            message: message.into(),
            severity,
        };
        debug!(id, severity = ?severity, ttl_secs = ttl.as_secs(), "Queued alert");
        self.alerts.send_modify(|list| list.push(alert));

        let alerts = Arc::clone(&self.alerts);
        let timers = Arc::clone(&self.timers);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            alerts.send_if_modified(|list| remove_first(list, id));
            timers.lock().remove(&id);
        });

        let mut timers = self.timers.lock();
        timers.retain(|_, handle| !handle.is_finished());
        timers.insert(id, handle);
        id
    }

    /// Remove an alert before its TTL elapses and cancel its timer.
    pub fn dismiss(&self, id: u64) {
        if let Some(handle) = self.timers.lock().remove(&id) {
            handle.abort();
        }
        self.alerts.send_if_modified(|list| remove_first(list, id));
    }

    /// Cancel every pending expiry timer. Queued alerts stay listed; nothing
    /// will remove them afterwards. Used on application shutdown so no timer
    /// fires into torn-down state.
    pub fn shutdown(&self) {
        let mut timers = self.timers.lock();
        let cancelled = timers.len();
        for (_, handle) in timers.drain() {
            handle.abort();
        }
        debug!(cancelled, "Cancelled pending alert timers");
    }

    #[cfg(test)]
    fn pending_timers(&self) -> usize {
        self.timers.lock().len()
    }
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the first alert with the given id, leaving the relative order of
/// the rest unchanged.
fn remove_first(list: &mut Vec<Alert>, id: u64) -> bool {
    match list.iter().position(|alert| alert.id == id) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}
