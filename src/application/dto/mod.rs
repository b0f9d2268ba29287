//! Data transfer objects for the application layer.

mod contact_form;

pub use contact_form::{ContactForm, FormField};
