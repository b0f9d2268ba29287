//! Application layer with controllers, session state and services.

/// Screen controllers.
pub mod controllers;
/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Session-owned state.
pub mod store;

pub use controllers::{AddContactController, ContactListController, ContactRow, ContactRows};
pub use dto::{ContactForm, FormField};
pub use services::NotificationManager;
pub use store::{ContactStore, StoreSubscription};
