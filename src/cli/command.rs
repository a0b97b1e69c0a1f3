use clap::{Parser, Subcommand};

use crate::config::{JSON_STORAGE_PATH, STORAGE_CHOICE};
use crate::store::json::STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "agenda", version, about = "Simple contact agenda")]
pub struct Cli {
    /// Storage choice (mem, json)
    #[arg(long, env = STORAGE_CHOICE, default_value_t = String::from("mem"))]
    pub storage_choice: String,

    /// Path of the json storage file
    #[arg(long, env = JSON_STORAGE_PATH, default_value_t = String::from(STORAGE_PATH))]
    pub path: String,

    /// Defaults to the interactive agenda
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Contact phone number
        #[arg(long, default_value_t = String::new())]
        phone: String,
    },
    /// List contacts in the order they were added
    List,
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete, as shown by `list`
        #[arg(long)]
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open the interactive agenda (table, add dialog, delete with confirmation)
    Interactive,
}
