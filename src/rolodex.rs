use log::{debug, error};

use crate::{
  command::{Command, CommandError, CommandResult, UndoCommand},
  config::Config,
  contact::Contact,
  model::{Model, ModelError},
  parser::{parse_command, ParseError},
  predicate::ContactFilter,
  storage::{JsonStorage, Storage, StorageError},
};

#[derive(Debug, thiserror::Error)]
pub enum RolodexError {
  #[error(transparent)]
  Parse(#[from] ParseError),

  #[error(transparent)]
  Command(#[from] CommandError),

  #[error(transparent)]
  Storage(#[from] StorageError),

  #[error("contacts in {path} are invalid: {source}")]
  InvalidContacts { path: String, source: ModelError },
}

/// Session over one address book: parses user input, runs commands against
/// the model, records undo history and persists changes.
///
/// Commands run one at a time through `&mut self`, so the undo history is a
/// single linear sequence. A command whose changes cannot be saved is rolled
/// back and left out of the history.
pub struct Rolodex {
  storage: Box<dyn Storage>,
  model: Model,
}

impl Rolodex {
  pub fn new(config: &Config) -> Result<Self, RolodexError> {
    debug!("rolodex storage file: {}", config.storage_file_path);
    let storage = JsonStorage::new(&config.storage_file_path)?;
    Self::with_storage(Box::new(storage))
  }

  pub fn with_storage(storage: Box<dyn Storage>) -> Result<Self, RolodexError> {
    let model = Model::new(storage.contacts()).map_err(|source| RolodexError::InvalidContacts {
      path: storage.storage_path().to_owned(),
      source,
    })?;
    Ok(Self { storage, model })
  }

  pub fn execute(&mut self, input: &str) -> Result<CommandResult, RolodexError> {
    let mut command = parse_command(input)?;
    debug!("executing '{}'", command.word());

    let was_saved = !self.model.has_unsaved_changes();
    let filter = self.model.filter().clone();
    let result = command.execute(&mut self.model)?;

    if let Err(err) = self.save() {
      error!("could not save after '{}': {}", command.word(), err);
      self.roll_back(&mut command, filter, was_saved);
      return Err(err.into());
    }

    if command.is_mutable() {
      self.model.push_undo_command_history(command);
    }
    Ok(result)
  }

  pub fn filtered_contacts(&self) -> Vec<&Contact> {
    self.model.filtered_contacts()
  }

  pub fn contacts(&self) -> &[Contact] {
    self.model.contacts()
  }

  pub fn storage_path(&self) -> &str {
    self.storage.storage_path()
  }

  fn save(&mut self) -> Result<(), StorageError> {
    if self.model.has_unsaved_changes() {
      self.storage.save_contacts(self.model.contacts())?;
      self.model.mark_saved();
    }
    Ok(())
  }

  /// Reverts `command` after its changes failed to reach storage. When the
  /// revert itself fails the model stays dirty and the next command retries
  /// the save.
  fn roll_back(&mut self, command: &mut Command, filter: ContactFilter, was_saved: bool) {
    // An undone command sits on top of the history again, so undoing once
    // more toggles it back.
    let reverted = if matches!(command, Command::Undo(_)) {
      UndoCommand::new().execute(&mut self.model).map(|_| ())
    } else if command.is_mutable() {
      command.undo(&mut self.model).map(|_| ())
    } else {
      Ok(())
    };
    self.model.update_filtered_contact_list(filter);

    match reverted {
      Ok(()) if was_saved => self.model.mark_saved(),
      Ok(()) => {}
      Err(err) => error!("could not roll back '{}': {}", command.word(), err),
    }
  }
}

#[cfg(test)]
mod test {
  use std::cell::{Cell, RefCell};
  use std::rc::Rc;

  use super::{Rolodex, RolodexError};
  use crate::command::CommandError;
  use crate::contact::Contact;
  use crate::model::ModelError;
  use crate::parser::ParseError;
  use crate::storage::{JsonStorage, Storage, StorageError};
  use crate::testutil::{alice, bob, carl, elle, fiona, typical_contacts};

  /// In-memory storage whose saves fail while `failing` is set.
  struct FlakyStorage {
    saved: Rc<RefCell<Vec<Contact>>>,
    failing: Rc<Cell<bool>>,
  }

  impl Storage for FlakyStorage {
    fn storage_path(&self) -> &str {
      "memory"
    }

    fn contacts(&self) -> Vec<Contact> {
      self.saved.borrow().clone()
    }

    fn save_contacts(&mut self, contacts: &[Contact]) -> Result<(), StorageError> {
      if self.failing.get() {
        return Err(StorageError::Io {
          path: "memory".to_owned(),
          source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        });
      }
      *self.saved.borrow_mut() = contacts.to_vec();
      Ok(())
    }
  }

  fn flaky_rolodex() -> (Rolodex, Rc<RefCell<Vec<Contact>>>, Rc<Cell<bool>>) {
    let saved = Rc::new(RefCell::new(typical_contacts()));
    let failing = Rc::new(Cell::new(false));
    let storage = FlakyStorage {
      saved: saved.clone(),
      failing: failing.clone(),
    };
    (Rolodex::with_storage(Box::new(storage)).unwrap(), saved, failing)
  }

  fn rolodex_with_typical_contacts(dir: &tempfile::TempDir) -> (Rolodex, String) {
    let path = dir.path().join("contacts.json").to_str().unwrap().to_owned();
    let mut storage = JsonStorage::new(&path).unwrap();
    storage.save_contacts(&typical_contacts()).unwrap();
    (Rolodex::with_storage(Box::new(storage)).unwrap(), path)
  }

  fn stored_contacts(path: &str) -> Vec<crate::contact::Contact> {
    JsonStorage::new(path).unwrap().contacts()
  }

  #[test]
  fn find_then_remark_then_undo() {
    let dir = tempfile::tempdir().unwrap();
    let (mut rolodex, path) = rolodex_with_typical_contacts(&dir);

    let found = rolodex.execute("find Kurz Elle Kunz").unwrap();
    assert_eq!(found.feedback(), "3 contacts listed!");
    assert_eq!(rolodex.filtered_contacts(), vec![&carl(), &elle(), &fiona()]);

    let remarked = rolodex.execute("remark 2 r/Prefers email").unwrap();
    assert!(remarked.feedback().starts_with("Added remark to Contact: Elle Meyer"));
    assert_eq!(rolodex.filtered_contacts().len(), typical_contacts().len());
    assert_eq!(stored_contacts(&path)[4].remark().as_str(), "Prefers email");

    let undone = rolodex.execute("undo").unwrap();
    assert!(undone.feedback().starts_with("Undo successful."));
    assert_eq!(rolodex.contacts(), typical_contacts().as_slice());
    assert_eq!(stored_contacts(&path), typical_contacts());
  }

  #[test]
  fn undo_with_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let (mut rolodex, path) = rolodex_with_typical_contacts(&dir);

    match rolodex.execute("undo") {
      Err(RolodexError::Command(CommandError::NothingToUndo)) => {}
      other => panic!("unexpected result: {:?}", other.map(|r| r.to_string())),
    }
    assert_eq!(rolodex.contacts(), typical_contacts().as_slice());
    assert_eq!(stored_contacts(&path), typical_contacts());
  }

  #[test]
  fn query_commands_are_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let (mut rolodex, _) = rolodex_with_typical_contacts(&dir);

    rolodex.execute("find alice").unwrap();
    rolodex.execute("list").unwrap();

    assert!(matches!(
      rolodex.execute("undo"),
      Err(RolodexError::Command(CommandError::NothingToUndo))
    ));
  }

  #[test]
  fn failed_commands_are_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let (mut rolodex, _) = rolodex_with_typical_contacts(&dir);

    assert!(matches!(
      rolodex.execute("remark 42 r/x"),
      Err(RolodexError::Command(CommandError::InvalidIndex(42)))
    ));
    assert!(matches!(
      rolodex.execute("delete zero"),
      Err(RolodexError::Parse(ParseError::InvalidIndex(_)))
    ));
    assert!(matches!(
      rolodex.execute("undo"),
      Err(RolodexError::Command(CommandError::NothingToUndo))
    ));
  }

  #[test]
  fn add_delete_and_undo_persist() {
    let dir = tempfile::tempdir().unwrap();
    let (mut rolodex, path) = rolodex_with_typical_contacts(&dir);

    rolodex
      .execute("add n/Bob Choo p/22222222 e/bob@example.com a/Block 123, Bobby Street 3 t/husband t/friend")
      .unwrap();
    assert_eq!(stored_contacts(&path).last(), Some(&bob()));

    rolodex.execute("delete 1").unwrap();
    assert!(!stored_contacts(&path).contains(&alice()));

    rolodex.execute("undo").unwrap();
    assert_eq!(stored_contacts(&path)[0], alice());
    assert!(stored_contacts(&path).contains(&bob()));
  }

  #[test]
  fn new_reads_config_storage_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book").join("contacts.json").to_str().unwrap().to_owned();
    let config = crate::config::Config {
      storage_file_path: path.clone(),
    };

    let rolodex = Rolodex::new(&config).unwrap();
    assert_eq!(rolodex.storage_path(), path);
    assert!(rolodex.contacts().is_empty());
  }

  #[test]
  fn failed_save_rolls_command_back() {
    let (mut rolodex, saved, failing) = flaky_rolodex();
    rolodex.execute("find Kurz").unwrap();
    failing.set(true);

    assert!(matches!(
      rolodex.execute("remark 1 r/hello"),
      Err(RolodexError::Storage(StorageError::Io { .. }))
    ));
    assert_eq!(rolodex.contacts(), typical_contacts().as_slice());
    assert_eq!(rolodex.filtered_contacts(), vec![&carl()]);
    assert_eq!(*saved.borrow(), typical_contacts());

    failing.set(false);
    assert!(matches!(
      rolodex.execute("undo"),
      Err(RolodexError::Command(CommandError::NothingToUndo))
    ));
  }

  #[test]
  fn failed_save_rolls_undo_back() {
    let (mut rolodex, saved, failing) = flaky_rolodex();
    rolodex.execute("remark 1 r/hello").unwrap();
    assert_eq!(saved.borrow()[0].remark().as_str(), "hello");

    failing.set(true);
    assert!(rolodex.execute("undo").is_err());
    assert_eq!(rolodex.contacts()[0].remark().as_str(), "hello");

    failing.set(false);
    rolodex.execute("undo").unwrap();
    assert_eq!(rolodex.contacts(), typical_contacts().as_slice());
    assert_eq!(*saved.borrow(), typical_contacts());
  }

  #[test]
  fn duplicate_contacts_in_storage_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json").to_str().unwrap().to_owned();
    let mut storage = JsonStorage::new(&path).unwrap();
    storage.save_contacts(&[alice(), bob(), alice()]).unwrap();

    match Rolodex::with_storage(Box::new(storage)) {
      Err(RolodexError::InvalidContacts { path: reported, source }) => {
        assert_eq!(reported, path);
        assert_eq!(source, ModelError::DuplicateContact);
      }
      Err(err) => panic!("unexpected error: {}", err),
      Ok(_) => panic!("duplicate contacts were accepted"),
    }
  }
}
