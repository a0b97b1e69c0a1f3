pub mod contact;
pub mod controller;
pub mod validation;

use crate::errors::AppError;
use crate::store::ContactStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use contact::{Contact, ContactId};
pub use controller::ContactController;
pub use validation::{Field, ValidationError};
