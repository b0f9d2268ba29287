use std::time::{Duration, Instant};

/// How long a notification should stay on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationDuration {
    #[default]
    Short,
    Long,
}

/// Severity of a notification, drives the toast colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationLevel {
    #[default]
    Info,
    Error,
}

impl From<NotificationDuration> for NotificationLevel {
    /// Short toasts report rejected input; long ones confirm a completed action.
    fn from(duration: NotificationDuration) -> Self {
        match duration {
            NotificationDuration::Short => Self::Error,
            NotificationDuration::Long => Self::Info,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub displayed_at: Option<Instant>,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            displayed_at: None,
            duration: Duration::from_secs(2),
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: NotificationLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}
