//! Uncommitted add-contact form values.

use crate::domain::entities::NewContact;
use crate::domain::errors::{RequiredField, ValidationError};

/// Fields of the add-contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Address,
    Phone,
    Email,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Address, Self::Phone, Self::Email];

    /// Returns human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Phone => "Phone",
            Self::Email => "Email",
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Phone)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Address => 1,
            Self::Phone => 2,
            Self::Email => 3,
        }
    }

    /// Next field in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in tab order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Email)
    }
}

/// Mutable form state, one independent value per field. All start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    address: String,
    phone: String,
    email: String,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Sets the value of `field`.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Name => self.set_name(value),
            FormField::Address => self.set_address(value),
            FormField::Phone => self.set_phone(value),
            FormField::Email => self.set_email(value),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Checks that name and phone are not blank.
    ///
    /// # Errors
    /// Returns `ValidationError::MissingRequired` naming every blank required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Name, &self.name),
            (RequiredField::Phone, &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::missing(missing))
        }
    }

    /// Validates and converts into a trimmed store candidate.
    ///
    /// # Errors
    /// Returns `ValidationError` if name or phone is blank.
    pub fn to_candidate(&self) -> Result<NewContact, ValidationError> {
        self.validate()?;

        Ok(NewContact::new(self.name.trim(), self.phone.trim())
            .with_address(self.address.trim())
            .with_email(self.email.trim()))
    }
}
