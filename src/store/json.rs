use super::*;
use super::memory::MemStore;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use tracing::debug;

pub const STORAGE_PATH: &str = "./.instance/contacts.json";

/// File-backed store. The file holds a JSON array in insertion order and is
/// rewritten in full on every mutation.
#[derive(Debug)]
pub struct JsonStore {
    mem: MemStore,
    pub path: String,
}

impl JsonStore {
    pub fn open(path: &str) -> Result<Self, AppError> {
        let contacts = load(path).map_err(|e| storage_error("load", path, e))?;
        debug!(path, count = contacts.len(), "opened json store");

        Ok(Self {
            mem: MemStore::with_contacts(contacts),
            path: path.to_string(),
        })
    }

    /// Writes `next` and only then makes it the visible state.
    fn commit(&mut self, next: Vec<Contact>) -> Result<(), AppError> {
        save(&self.path, &next).map_err(|e| storage_error("save", &self.path, e))?;
        self.mem.data = next;
        Ok(())
    }
}

impl ContactStore for JsonStore {
    fn list(&self) -> Vec<Contact> {
        self.mem.list()
    }

    fn contains(&self, id: ContactId) -> bool {
        self.mem.contains(id)
    }

    fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        let mut next = self.mem.data.clone();
        next.push(contact);
        self.commit(next)
    }

    fn delete(&mut self, id: ContactId) -> Result<bool, AppError> {
        let Some(index) = self.mem.position(id) else {
            return Ok(false);
        };

        let mut next = self.mem.data.clone();
        next.remove(index);
        self.commit(next)?;
        Ok(true)
    }

    fn get_medium(&self) -> &str {
        "json"
    }
}

fn load(path: &str) -> Result<Vec<Contact>, AppError> {
    if !fs::exists(Path::new(path))? {
        return Ok(Vec::new());
    }

    let mut file = OpenOptions::new().read(true).open(path)?;
    let mut data = String::new();
    file.read_to_string(&mut data)?;

    // serde_json will give an error if data is empty
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }

    let contacts: Vec<Contact> = serde_json::from_str(&data)?;

    let mut seen = std::collections::HashSet::new();
    if let Some(dup) = contacts.iter().find(|c| !seen.insert(c.id())) {
        return Err(AppError::Storage(format!("duplicate contact id {}", dup.id())));
    }

    Ok(contacts)
}

fn save(path: &str, contacts: &[Contact]) -> Result<(), AppError> {
    let json_contacts = serde_json::to_string_pretty(contacts)?;

    create_file_parent(path)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(json_contacts.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn storage_error(action: &str, path: &str, err: AppError) -> AppError {
    match err {
        AppError::Storage(msg) => AppError::Storage(format!("{} {}: {}", action, path, msg)),
        other => AppError::Storage(format!("{} {}: {}", action, path, other)),
    }
}
