use super::*;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddContact,
    DeleteContact,
    Exit,
}

pub fn parse_menu_command(action: &str) -> Result<MenuCommand, AppError> {
    match action.trim() {
        "1" => Ok(MenuCommand::AddContact),
        "2" => Ok(MenuCommand::DeleteContact),
        "3" => Ok(MenuCommand::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

/// Main agenda screen: the contact table plus the add and delete actions.
///
/// Owns the terminal handles, borrows the controller. After any change the
/// table is drawn again from a fresh `list()`.
pub struct ContactView<'a, R, W> {
    controller: &'a mut ContactController,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> ContactView<'a, R, W> {
    pub fn new(controller: &'a mut ContactController, input: R, output: W) -> Self {
        Self {
            controller,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n--- Contact AGENDA ---\n")?;
        self.refresh()?;

        loop {
            let Some(action) = self.read_menu()? else {
                return Ok(());
            };

            let result = match parse_menu_command(&action) {
                Ok(MenuCommand::AddContact) => self.add_contact(),
                Ok(MenuCommand::DeleteContact) => self.delete_selected_contact(),
                Ok(MenuCommand::Exit) => {
                    writeln!(self.output, "\nBye!")?;
                    return Ok(());
                }
                Err(err) => Err(err),
            };

            if let Err(err) = result {
                if !err.is_recoverable() {
                    return Err(err);
                }
                debug!(error = %err, "action failed");
                writeln!(self.output, "\n{}", err)?;
            }
        }
    }

    /// Full redraw from the controller's latest snapshot.
    pub fn refresh(&mut self) -> Result<(), AppError> {
        let table = render_table(&self.controller.list());
        write!(self.output, "\n{}", table)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_menu(&mut self) -> Result<Option<String>, AppError> {
        let menu = format!(
            "\n1. Add Contact\n2. Delete Contact\n3. Exit (storage: {})",
            self.controller.medium()
        );
        prompt(&mut self.input, &mut self.output, &menu)
    }

    fn add_contact(&mut self) -> Result<(), AppError> {
        let outcome =
            AddContactDialog::new(&mut *self.controller, &mut self.input, &mut self.output).run()?;

        if let DialogOutcome::Submitted(_) = outcome {
            writeln!(self.output, "\nContact added successfully!")?;
            self.refresh()?;
        }
        Ok(())
    }

    fn delete_selected_contact(&mut self) -> Result<(), AppError> {
        let contacts = self.controller.list();

        let Some(selected) = self.select_row(&contacts)? else {
            writeln!(self.output, "\nSelect a contact to delete.")?;
            return Ok(());
        };

        let message = format!(
            "delete this contact from your agenda \n{}\n",
            display_contact(selected)
        );
        if !confirm(&mut self.input, &mut self.output, &message)? {
            return Ok(());
        }

        if self.controller.delete(selected.id())? {
            writeln!(self.output, "\nContact deleted successfully!")?;
        } else {
            writeln!(self.output, "\nContact Not found")?;
        }
        self.refresh()
    }

    /// Row numbers are the 1-based positions shown by [`render_table`].
    fn select_row<'c>(&mut self, contacts: &'c [Contact]) -> Result<Option<&'c Contact>, AppError> {
        if contacts.is_empty() {
            return Ok(None);
        }

        let answer = prompt(
            &mut self.input,
            &mut self.output,
            "\nEnter the row number of the contact to delete",
        )?;

        let row = answer.and_then(|a| a.parse::<usize>().ok());
        Ok(row
            .and_then(|r| r.checked_sub(1))
            .and_then(|index| contacts.get(index)))
    }
}
