use crate::{contact::Contact, fmt::format_contact, index::Index, model::Model};

use super::{CommandError, CommandResult};

#[derive(Debug, Clone)]
struct Deletion {
  contact: Contact,
  position: usize,
  in_model: bool,
}

#[derive(Debug, Clone)]
pub struct DeleteCommand {
  index: Index,
  deletion: Option<Deletion>,
}

impl DeleteCommand {
  pub const WORD: &'static str = "delete";
  pub const USAGE: &'static str = "delete: Deletes the contact identified by the index number \
    used in the displayed contact list.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: delete 1";

  pub fn new(index: Index) -> Self {
    Self {
      index,
      deletion: None,
    }
  }

  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    let target = model
      .filtered_contact_at(self.index.zero_based())
      .cloned()
      .ok_or(CommandError::InvalidIndex(self.index.one_based()))?;

    let position = model.remove_contact(&target)?;
    let message = format!("Deleted Contact: {}", format_contact(&target));
    self.deletion = Some(Deletion {
      contact: target,
      position,
      in_model: false,
    });

    Ok(CommandResult::new(message))
  }

  pub fn undo(&mut self, model: &mut Model) -> Result<String, CommandError> {
    let deletion = self.deletion.as_mut().ok_or(CommandError::NotExecuted)?;

    if deletion.in_model {
      model.remove_contact(&deletion.contact)?;
      deletion.in_model = false;
      return Ok(format!("Deleted Contact: {}", format_contact(&deletion.contact)));
    }

    model.insert_contact(deletion.position, deletion.contact.clone())?;
    deletion.in_model = true;
    Ok(format!("Restored Contact: {}", format_contact(&deletion.contact)))
  }
}

impl PartialEq for DeleteCommand {
  fn eq(&self, other: &Self) -> bool {
    self.index == other.index
  }
}

#[cfg(test)]
mod test {
  use super::DeleteCommand;
  use crate::command::CommandError;
  use crate::index::Index;
  use crate::predicate::{ContactFilter, ContactMatchesPredicate};
  use crate::testutil::{benson, daniel, typical_contacts, typical_model};

  #[test]
  fn delete_from_unfiltered_list() {
    let mut model = typical_model();
    let mut command = DeleteCommand::new(Index::from_one_based(2).unwrap());

    let result = command.execute(&mut model).unwrap();

    assert!(result.feedback().starts_with("Deleted Contact: Benson Meier"));
    assert!(!model.has_contact(&benson()));
  }

  #[test]
  fn delete_from_filtered_list() {
    let mut model = typical_model();
    model.update_filtered_contact_list(ContactFilter::Matches(ContactMatchesPredicate::new(vec![
      "Meier".to_owned(),
    ])));

    let mut command = DeleteCommand::new(Index::from_one_based(2).unwrap());
    command.execute(&mut model).unwrap();

    assert!(!model.has_contact(&daniel()));
    assert!(model.has_contact(&benson()));
  }

  #[test]
  fn invalid_index() {
    let mut model = typical_model();
    let mut command = DeleteCommand::new(Index::from_one_based(8).unwrap());
    assert_eq!(command.execute(&mut model), Err(CommandError::InvalidIndex(8)));
    assert_eq!(model.contacts(), typical_contacts().as_slice());
  }

  #[test]
  fn undo_restores_original_position() {
    let mut model = typical_model();
    let mut command = DeleteCommand::new(Index::from_one_based(2).unwrap());
    command.execute(&mut model).unwrap();

    let message = command.undo(&mut model).unwrap();
    assert!(message.starts_with("Restored Contact: Benson Meier"));
    assert_eq!(model.contacts(), typical_contacts().as_slice());

    command.undo(&mut model).unwrap();
    assert!(!model.has_contact(&benson()));
  }
}
