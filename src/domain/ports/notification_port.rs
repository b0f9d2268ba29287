use crate::domain::NotificationDuration;

/// Port for transient user-facing messages.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    /// Shows a message. Fire and forget.
    fn notify(&self, message: &str, duration: NotificationDuration);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every message for later inspection.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notifications: Arc<Mutex<Vec<(String, NotificationDuration)>>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<String> {
            self.notifications
                .lock()
                .unwrap()
                .iter()
                .map(|(message, _)| message.clone())
                .collect()
        }
    }

    impl NotificationPort for RecordingNotifier {
        fn notify(&self, message: &str, duration: NotificationDuration) {
            self.notifications
                .lock()
                .unwrap()
                .push((message.to_string(), duration));
        }
    }
}
