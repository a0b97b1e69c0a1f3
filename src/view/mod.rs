//! Terminal presentation of the agenda.
//!
//! Nothing in here keeps contact state: every screen is drawn from the latest
//! [`ContactController::list`] snapshot, and mutations go through the controller.

mod app;
mod dialog;

pub use app::{ContactView, MenuCommand, parse_menu_command};
pub use dialog::{AddContactDialog, DialogOutcome};

use crate::domain::{Contact, ContactController};
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub const COLUMNS: [&str; 4] = ["ID", "Name", "Email", "Phone"];
pub const CANCEL: &str = "*";

/// Renders the contact table. Rows are numbered from 1 in list order.
pub fn render_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contact yet\n".to_string();
    }

    let rows: Vec<[String; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.id().to_string(),
                c.name().to_string(),
                c.email().to_string(),
                c.phone().to_string(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    table.push_str(&format_line(&format!("{:>3} ", "#"), &COLUMNS, &widths));
    for (i, row) in rows.iter().enumerate() {
        let cells = row.each_ref().map(String::as_str);
        table.push_str(&format_line(&format!("{:>3}.", i + 1), &cells, &widths));
    }
    table
}

fn format_line(lead: &str, cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let mut line = lead.to_string();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<width$} ", cell, width = *width));
    }
    format!("{}\n", line.trim_end())
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Email: {}\n\
        Phone: {}",
        contact.name(),
        contact.email(),
        contact.phone()
    )
}

/// Prints `message` and reads one trimmed line. `None` on end of input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>, AppError> {
    writeln!(output, "{}", message)?;
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks a y/n question. Anything but `y` (or end of input) is a no.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    action: &str,
) -> Result<bool, AppError> {
    let answer = prompt(input, output, &format!("\nAre you sure you want to {}\n? (y/n)", action))?;
    Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;
    use std::io::Cursor;

    #[test]
    fn empty_table_says_so() {
        assert_eq!(render_table(&[]), "No contact yet\n");
    }

    #[test]
    fn table_has_columns_in_order_and_numbered_rows() -> Result<(), AppError> {
        let mut controller = ContactController::new(Box::new(MemStore::new()));
        let ana = controller.add("Ana", "ana@x.com", "111")?;
        let bo = controller.add("Bo", "bo@x.com", "")?;

        let table = render_table(&controller.list());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        let header: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(header, vec!["#", "ID", "Name", "Email", "Phone"]);

        let (ana_id, bo_id) = (ana.id().to_string(), bo.id().to_string());
        let first: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(first, vec!["1.", ana_id.as_str(), "Ana", "ana@x.com", "111"]);

        let second: Vec<&str> = lines[2].split_whitespace().collect();
        assert_eq!(second, vec!["2.", bo_id.as_str(), "Bo", "bo@x.com"]);
        Ok(())
    }

    #[test]
    fn columns_line_up() -> Result<(), AppError> {
        let mut controller = ContactController::new(Box::new(MemStore::new()));
        controller.add("A much longer name", "a@x.com", "1")?;
        controller.add("Bo", "bo@x.com", "2")?;

        let table = render_table(&controller.list());
        let email_offsets: Vec<Option<usize>> = table
            .lines()
            .zip(["Email", "a@x.com", "bo@x.com"])
            .map(|(line, needle)| line.find(needle))
            .collect();

        assert!(email_offsets.iter().all(|o| o.is_some()));
        assert!(email_offsets.windows(2).all(|w| w[0] == w[1]));
        Ok(())
    }

    #[test]
    fn confirm_only_accepts_y() -> Result<(), AppError> {
        let mut out = Vec::new();
        for (answer, expected) in [("y\n", true), ("Y\n", true), ("n\n", false), ("yes\n", false), ("", false)] {
            let mut input = Cursor::new(answer);
            assert_eq!(confirm(&mut input, &mut out, "delete")?, expected);
        }
        Ok(())
    }
}
