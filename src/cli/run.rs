use crate::{
    cli::command::{Cli, Commands},
    config::{self, Config},
    domain::{ContactController, ContactId},
    errors::AppError,
    view::{self, ContactView, render_table},
};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, warn};

pub fn run_app() -> Result<(), AppError> {
    config::load_dotenv();
    let cli = Cli::parse();

    let config = Config::new(&cli.storage_choice, cli.path.as_str())?;
    debug!(?config, "resolved configuration");

    let mut controller = config.open_controller()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Add { name, email, phone } => {
            let contact = controller.add(&name, &email, &phone)?;

            writeln!(output, "Contact added successfully")?;
            writeln!(output, "ID: {}", contact.id())?;
            warn_if_not_persisted(&controller);
            Ok(())
        }

        Commands::List => {
            write!(output, "{}", render_table(&controller.list()))?;
            Ok(())
        }

        Commands::Delete { id, yes } => {
            let id: ContactId = id.parse()?;

            if !yes {
                let Some(contact) = controller.list().into_iter().find(|c| c.id() == id) else {
                    eprintln!("{}", AppError::NotFound("Contact".to_string()));
                    return Ok(());
                };

                let message = format!(
                    "delete this contact from your agenda \n{}\n",
                    view::display_contact(&contact)
                );
                if !view::confirm(&mut input, &mut output, &message)? {
                    writeln!(output, "Deletion cancelled")?;
                    return Ok(());
                }
            }

            if controller.delete(id)? {
                writeln!(output, "Contact deleted successfully")?;
                warn_if_not_persisted(&controller);
            } else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
            }
            Ok(())
        }

        Commands::Interactive => ContactView::new(&mut controller, input, output).run(),
    }
}

fn warn_if_not_persisted(controller: &ContactController) {
    if controller.medium() == "mem" {
        warn!("storage is 'mem', this change is not persisted. Use --storage-choice json");
    }
}
