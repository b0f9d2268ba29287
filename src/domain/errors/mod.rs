//! Domain error types.

mod validation_error;

pub use validation_error::{RequiredField, ValidationError};
