use dotenv::dotenv;

use crate::domain::ContactController;
use crate::errors::AppError;
use crate::store::{self, StorageMediums};

pub const STORAGE_CHOICE: &str = "STORAGE_CHOICE";
pub const JSON_STORAGE_PATH: &str = "JSON_STORAGE_PATH";

/// Loads `.env` into the process environment. Variables already set win.
pub fn load_dotenv() {
    dotenv().ok();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub medium: StorageMediums,
    pub json_path: String,
}

impl Config {
    pub fn new(storage_choice: &str, json_path: impl Into<String>) -> Result<Self, AppError> {
        let json_path = json_path.into();
        if json_path.trim().is_empty() {
            return Err(AppError::Config("json storage path is empty".to_string()));
        }

        Ok(Self {
            medium: StorageMediums::from(storage_choice)?,
            json_path,
        })
    }

    pub fn open_controller(&self) -> Result<ContactController, AppError> {
        let store = store::parse_storage_type(self.medium, &self.json_path)?;
        Ok(ContactController::new(store))
    }
}
