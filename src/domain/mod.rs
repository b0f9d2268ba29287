//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Transient user-facing messages.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Navigation destinations.
pub mod screen;

pub use entities::{Contact, ContactId, NewContact};
pub use errors::{RequiredField, ValidationError};
pub use notification::{Notification, NotificationDuration, NotificationLevel};
pub use ports::{NavigationPort, NotificationPort};
pub use screen::ScreenId;
