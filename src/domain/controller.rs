use super::*;
use tracing::{debug, info};

/// Façade between the view and the store.
///
/// Every business rule lives here. The view calls [`list`](Self::list),
/// [`add`](Self::add) and [`delete`](Self::delete) and nothing else.
pub struct ContactController {
    store: Box<dyn ContactStore>,
}

impl ContactController {
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        Self { store }
    }

    pub fn medium(&self) -> &str {
        self.store.get_medium()
    }

    /// Snapshot of every contact, in insertion order.
    pub fn list(&self) -> Vec<Contact> {
        let contacts = self.store.list();
        debug!(count = contacts.len(), "listed contacts");
        contacts
    }

    /// Validates and appends a new contact.
    ///
    /// Name and email must be non-empty once trimmed; phone may be empty.
    /// Nothing is stored when this returns an error.
    pub fn add(&mut self, name: &str, email: &str, phone: &str) -> Result<Contact, AppError> {
        let (name, email) = match self.validate(name, email) {
            Ok(valid) => valid,
            Err(err) => {
                debug!(field = %err.field, "rejected new contact");
                return Err(err.into());
            }
        };

        let contact = Contact::new(self.fresh_id(), name, email, phone.trim().to_string());
        self.store.add(contact.clone())?;

        info!(id = %contact.id(), "contact added");
        Ok(contact)
    }

    /// Removes the contact with `id`. `Ok(false)` means there was nothing to remove.
    pub fn delete(&mut self, id: ContactId) -> Result<bool, AppError> {
        let removed = self.store.delete(id)?;
        if removed {
            info!(%id, "contact deleted");
        } else {
            debug!(%id, "delete ignored, no such contact");
        }
        Ok(removed)
    }

    fn validate(&self, name: &str, email: &str) -> Result<(String, String), ValidationError> {
        let name = validation::require(Field::Name, name)?;
        let email = validation::require(Field::Email, email)?;
        Ok((name, email))
    }

    fn fresh_id(&self) -> ContactId {
        let mut id = ContactId::generate();
        while self.store.contains(id) {
            id = ContactId::generate();
        }
        id
    }
}
