use crate::ProgressListener;
use featurelife_types::{DeprecatedUsage, ProgressNotification};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps every notification it receives, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingListener {
    received: Mutex<Vec<ProgressNotification>>,
}

impl CollectingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<ProgressNotification> {
        self.lock().clone()
    }

    /// Deprecated-usage payloads only, in arrival order.
    pub fn deprecated_usages(&self) -> Vec<DeprecatedUsage> {
        self.lock()
            .iter()
            .filter_map(|n| n.details.as_deprecated_usage().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ProgressNotification>> {
        // A panicking reader cannot leave the buffer half-written.
        self.received.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProgressListener for CollectingListener {
    fn on_progress(&self, notification: &ProgressNotification) {
        self.lock().push(notification.clone());
    }
}
