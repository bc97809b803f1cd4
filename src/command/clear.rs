use crate::{contact::Contact, model::Model};

use super::{CommandError, CommandResult};

#[derive(Debug, Clone, Default)]
pub struct ClearCommand {
  // contacts swapped out of the model by the last execute/undo
  stashed: Option<Vec<Contact>>,
}

impl ClearCommand {
  pub const WORD: &'static str = "clear";

  pub fn new() -> Self {
    Self { stashed: None }
  }

  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    self.stashed = Some(model.replace_contacts(Vec::new()));
    Ok(CommandResult::new("Address book has been cleared!".to_owned()))
  }

  pub fn undo(&mut self, model: &mut Model) -> Result<String, CommandError> {
    let stashed = self.stashed.take().ok_or(CommandError::NotExecuted)?;
    let restored = stashed.len();
    self.stashed = Some(model.replace_contacts(stashed));
    Ok(format!("Address book now holds {} contacts", restored))
  }
}

impl PartialEq for ClearCommand {
  fn eq(&self, _other: &Self) -> bool {
    true
  }
}

#[cfg(test)]
mod test {
  use super::ClearCommand;
  use crate::model::Model;
  use crate::testutil::{typical_contacts, typical_model};

  #[test]
  fn clear_non_empty_address_book() {
    let mut model = typical_model();
    let result = ClearCommand::new().execute(&mut model).unwrap();
    assert_eq!(result.feedback(), "Address book has been cleared!");
    assert!(model.contacts().is_empty());
  }

  #[test]
  fn clear_empty_address_book() {
    let mut model = Model::new(Vec::new()).unwrap();
    ClearCommand::new().execute(&mut model).unwrap();
    assert!(model.contacts().is_empty());
  }

  #[test]
  fn undo_swaps_contacts_back() {
    let mut model = typical_model();
    let mut command = ClearCommand::new();
    command.execute(&mut model).unwrap();

    let message = command.undo(&mut model).unwrap();
    assert_eq!(message, "Address book now holds 7 contacts");
    assert_eq!(model.contacts(), typical_contacts().as_slice());

    command.undo(&mut model).unwrap();
    assert!(model.contacts().is_empty());
  }
}
