use super::*;
use tracing::debug;

#[derive(Debug, Default)]
pub struct MemStore {
    pub(crate) data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Pre-seeded store. Contacts keep the order given.
    pub fn with_contacts(data: Vec<Contact>) -> Self {
        debug!(count = data.len(), "seeded memory store");
        Self { data }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.data.iter()
    }

    pub(crate) fn position(&self, id: ContactId) -> Option<usize> {
        self.iter().position(|c| c.id() == id)
    }
}

impl ContactStore for MemStore {
    fn list(&self) -> Vec<Contact> {
        self.iter().cloned().collect()
    }

    fn contains(&self, id: ContactId) -> bool {
        self.position(id).is_some()
    }

    fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        self.data.push(contact);
        Ok(())
    }

    fn delete(&mut self, id: ContactId) -> Result<bool, AppError> {
        match self.position(id) {
            Some(index) => {
                // `remove` shifts the tail so order is kept
                self.data.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
