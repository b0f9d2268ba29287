//! Domain entity definitions.

mod contact;

pub use contact::{Contact, ContactId, NewContact};
