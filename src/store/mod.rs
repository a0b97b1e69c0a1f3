pub mod json;
pub mod memory;

use crate::domain::{Contact, ContactId};
use crate::errors::AppError;
use std::fs;
use std::path::Path;

/// Authoritative, ordered collection of contacts.
///
/// Implementations keep insertion order and apply each mutation as a whole:
/// when `add` or `delete` returns an error the visible contents are unchanged.
pub trait ContactStore {
    fn list(&self) -> Vec<Contact>;

    fn contains(&self, id: ContactId) -> bool;

    fn add(&mut self, contact: Contact) -> Result<(), AppError>;

    fn delete(&mut self, id: ContactId) -> Result<bool, AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    Json,
}

impl StorageMediums {
    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "mem" => Ok(StorageMediums::Mem),
            "json" => Ok(StorageMediums::Json),
            other => Err(AppError::Config(format!(
                "'{}' is not a recognized storage medium (mem, json)",
                other
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    json_path: &str,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Mem => Ok(Box::new(memory::MemStore::new())),
        StorageMediums::Json => Ok(Box::new(json::JsonStore::open(json_path)?)),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
