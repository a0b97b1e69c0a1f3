use std::fmt;
use std::str::FromStr;

use super::*;

/// Opaque contact identifier.
///
/// Ids are random v4 UUIDs, so an id handed out once is never produced again
/// for a later contact, even after the first one is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// A single address-book entry.
///
/// Fields are read-only once built; the only way to get a new `Contact` into a
/// store is through [`ContactController::add`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    email: String,
    #[serde(default)]
    phone: String,
}

impl Contact {
    pub(crate) fn new(id: ContactId, name: String, email: String, phone: String) -> Self {
        Contact {
            id,
            name,
            email,
            phone,
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}
