pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{Contact, ContactController, ContactId, Field, ValidationError};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, StorageMediums, json::JsonStore, memory::MemStore};
pub use crate::view::{ContactView, render_table};
