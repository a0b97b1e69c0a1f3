use super::*;
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Submitted(Contact),
    Cancelled,
}

/// Modal form for a new contact.
///
/// Holds the terminal until it has handed a valid triple to
/// [`ContactController::add`] or the user backs out with `*`. A validation
/// error is reported and the form starts over.
pub struct AddContactDialog<'a, R, W> {
    controller: &'a mut ContactController,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> AddContactDialog<'a, R, W> {
    pub fn new(controller: &'a mut ContactController, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            controller,
            input,
            output,
        }
    }

    pub fn run(mut self) -> Result<DialogOutcome, AppError> {
        loop {
            let Some(name) = self.ask("Enter contact name")? else {
                return Ok(self.cancel());
            };
            let Some(email) = self.ask("Enter contact email")? else {
                return Ok(self.cancel());
            };
            let Some(phone) = self.ask("Enter contact phone (may be empty)")? else {
                return Ok(self.cancel());
            };

            match self.controller.add(&name, &email, &phone) {
                Ok(contact) => return Ok(DialogOutcome::Submitted(contact)),
                Err(AppError::Validation(err)) => {
                    writeln!(self.output, "\nValidation failed: {}", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// `None` when the user cancels or input ends.
    fn ask(&mut self, label: &str) -> Result<Option<String>, AppError> {
        let message = format!("\n{} \n{} to go back:", label, CANCEL);
        match prompt(&mut *self.input, &mut *self.output, &message)? {
            Some(answer) if answer != CANCEL => Ok(Some(answer)),
            _ => Ok(None),
        }
    }

    fn cancel(&self) -> DialogOutcome {
        debug!("add dialog cancelled");
        DialogOutcome::Cancelled
    }
}
