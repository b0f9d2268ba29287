use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::{Notification, NotificationDuration, NotificationLevel, NotificationPort};

/// Display time for each duration hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDurations {
    pub short: Duration,
    pub long: Duration,
}

impl ToastDurations {
    #[must_use]
    pub const fn resolve(&self, hint: NotificationDuration) -> Duration {
        match hint {
            NotificationDuration::Short => self.short,
            NotificationDuration::Long => self.long,
        }
    }
}

impl Default for ToastDurations {
    fn default() -> Self {
        Self {
            short: Duration::from_secs(2),
            long: Duration::from_secs(4),
        }
    }
}

/// FIFO toast queue. Only the front notification is on screen.
#[derive(Debug)]
pub struct NotificationManager {
    queue: Mutex<VecDeque<Notification>>,
    durations: ToastDurations,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(ToastDurations::default())
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(durations: ToastDurations) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            durations,
        }
    }

    /// Queues a toast. Its level and display time both follow `hint`.
    pub fn push(&self, message: impl Into<String>, hint: NotificationDuration) {
        let notification = Notification::new(message)
            .with_level(NotificationLevel::from(hint))
            .with_duration(self.durations.resolve(hint));
        self.queue.lock().push_back(notification);
    }

    /// Starts the clock on the front toast and drops it once expired.
    ///
    /// Returns `true` when the visible toast changed.
    pub fn tick(&self) -> bool {
        let mut queue = self.queue.lock();
        let Some(front) = queue.front_mut() else {
            return false;
        };

        front.mark_displayed();
        if !front.is_expired() {
            return false;
        }

        queue.pop_front();
        if let Some(next) = queue.front_mut() {
            next.mark_displayed();
        }
        true
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<Notification> {
        self.queue.lock().front().cloned()
    }
}

impl NotificationPort for NotificationManager {
    fn notify(&self, message: &str, duration: NotificationDuration) {
        debug!(text = message, ?duration, "Queueing notification");
        self.push(message, duration);
    }
}
