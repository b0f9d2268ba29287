//! Session-owned state.

mod contact_store;

pub use contact_store::{ContactStore, StoreSubscription};
