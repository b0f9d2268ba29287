//! Address book contact entity.

use serde::{Deserialize, Serialize};

/// Contact identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u32);

impl ContactId {
    /// Returns the identifier following this one. Saturates at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ContactId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A single address book entry. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    address: String,
    phone_number: String,
    #[serde(default)]
    email: String,
}

impl Contact {
    #[must_use]
    pub fn new(
        id: impl Into<ContactId>,
        name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    /// Builds a stored contact from a candidate, trimming every text field.
    #[must_use]
    pub fn from_candidate(id: ContactId, candidate: NewContact) -> Self {
        Self {
            id,
            name: candidate.name.trim().to_string(),
            address: candidate.address.trim().to_string(),
            phone_number: candidate.phone_number.trim().to_string(),
            email: candidate.email.trim().to_string(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ContactId {
        self.id
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
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Candidate values for a contact that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
}

impl NewContact {
    /// Creates a candidate with the two required fields; address and email start empty.
    #[must_use]
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}
