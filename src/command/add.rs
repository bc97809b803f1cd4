use crate::{contact::Contact, fmt::format_contact, model::Model};

use super::{CommandError, CommandResult};

#[derive(Debug, Clone)]
pub struct AddCommand {
  to_add: Contact,
  // true while the contact added by this command is in the model
  in_model: Option<bool>,
}

impl AddCommand {
  pub const WORD: &'static str = "add";
  pub const USAGE: &'static str = "add: Adds a contact to the address book.\n\
    Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [r/REMARK] [t/TAG]...\n\
    Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/friends";

  pub fn new(to_add: Contact) -> Self {
    Self {
      to_add,
      in_model: None,
    }
  }

  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    model.add_contact(self.to_add.clone())?;
    self.in_model = Some(true);
    Ok(CommandResult::new(format!(
      "New contact added: {}",
      format_contact(&self.to_add)
    )))
  }

  pub fn undo(&mut self, model: &mut Model) -> Result<String, CommandError> {
    match self.in_model {
      None => Err(CommandError::NotExecuted),
      Some(true) => {
        model.remove_contact(&self.to_add)?;
        self.in_model = Some(false);
        Ok(format!("Removed added contact: {}", format_contact(&self.to_add)))
      }
      Some(false) => {
        model.add_contact(self.to_add.clone())?;
        self.in_model = Some(true);
        Ok(format!("Re-added contact: {}", format_contact(&self.to_add)))
      }
    }
  }
}

impl PartialEq for AddCommand {
  fn eq(&self, other: &Self) -> bool {
    self.to_add == other.to_add
  }
}
