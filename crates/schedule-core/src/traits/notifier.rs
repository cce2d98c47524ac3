//! `Notifier`: fire-and-forget user notifications (toasts).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Warning,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) {
        (**self).notify(kind, title, description)
    }
}
