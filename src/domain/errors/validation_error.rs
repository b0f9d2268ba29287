//! Contact form validation errors.

use thiserror::Error;

/// Form field that must not be blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Phone,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
        }
    }
}

/// User-correctable input error raised on form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields were empty or whitespace only.
    #[error("Name and Phone are required.")]
    MissingRequired { missing: Vec<RequiredField> },
}

impl ValidationError {
    /// Creates a missing-field error.
    #[must_use]
    pub fn missing(missing: Vec<RequiredField>) -> Self {
        Self::MissingRequired { missing }
    }

    /// Returns the blank required fields.
    #[must_use]
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            Self::MissingRequired { missing } => missing,
        }
    }
}
