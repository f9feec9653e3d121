//! The consumer side of featurelife progress events.
//!
//! A [`ProgressListener`] receives each [`ProgressNotification`] by reference. Listeners
//! read the payload through its accessors and never change it; the same notification is
//! handed to every listener in registration order.

#![forbid(unsafe_code)]

mod collect;
mod logging;

pub use collect::CollectingListener;
pub use logging::{LoggingListener, LOG_TARGET};

use featurelife_types::ProgressNotification;
use std::sync::Arc;

pub trait ProgressListener: Send + Sync {
    fn on_progress(&self, notification: &ProgressNotification);
}

impl<L: ProgressListener + ?Sized> ProgressListener for &L {
    fn on_progress(&self, notification: &ProgressNotification) {
        (**self).on_progress(notification);
    }
}

impl<L: ProgressListener + ?Sized> ProgressListener for Box<L> {
    fn on_progress(&self, notification: &ProgressNotification) {
        (**self).on_progress(notification);
    }
}

impl<L: ProgressListener + ?Sized> ProgressListener for Arc<L> {
    fn on_progress(&self, notification: &ProgressNotification) {
        (**self).on_progress(notification);
    }
}

/// Deliver one notification to each listener, in order.
pub fn broadcast<L: ProgressListener>(listeners: &[L], notification: &ProgressNotification) {
    for listener in listeners {
        listener.on_progress(notification);
    }
}
