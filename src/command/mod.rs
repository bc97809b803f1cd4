mod add;
mod clear;
mod delete;
mod edit;
mod find;
mod list;
mod remark;
mod undo;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditContactDescriptor};
pub use find::FindCommand;
pub use list::ListCommand;
pub use remark::RemarkCommand;
pub use undo::UndoCommand;

use crate::{contact::Contact, model::Model, model::ModelError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
  #[error("the contact index provided is invalid: {0}")]
  InvalidIndex(usize),

  #[error("no commands to undo")]
  NothingToUndo,

  #[error("last command is not mutable, cannot undo")]
  NotUndoable,

  #[error("command has not been executed yet, nothing to revert")]
  NotExecuted,

  #[error(transparent)]
  Model(#[from] ModelError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
  feedback: String,
}

impl CommandResult {
  pub fn new(feedback: String) -> Self {
    Self { feedback }
  }

  pub fn feedback(&self) -> &str {
    self.feedback.as_str()
  }
}

impl std::fmt::Display for CommandResult {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.feedback)
  }
}

/// Every user action the address book understands.
///
/// Mutable commands keep whatever they need to revert themselves after
/// `execute`. Reverting is a toggle: calling `undo` a second time re-applies
/// the change, which is what the undo command relies on since it puts the
/// reverted command back on the history stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Add(AddCommand),
  Clear(ClearCommand),
  Delete(DeleteCommand),
  Edit(EditCommand),
  Find(FindCommand),
  List(ListCommand),
  Remark(RemarkCommand),
  Undo(UndoCommand),
}

impl Command {
  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    match self {
      Command::Add(cmd) => cmd.execute(model),
      Command::Clear(cmd) => cmd.execute(model),
      Command::Delete(cmd) => cmd.execute(model),
      Command::Edit(cmd) => cmd.execute(model),
      Command::Find(cmd) => cmd.execute(model),
      Command::List(cmd) => cmd.execute(model),
      Command::Remark(cmd) => cmd.execute(model),
      Command::Undo(cmd) => cmd.execute(model),
    }
  }

  /// Whether the command changes the contact list and may be undone.
  pub fn is_mutable(&self) -> bool {
    match self {
      Command::Add(_)
      | Command::Clear(_)
      | Command::Delete(_)
      | Command::Edit(_)
      | Command::Remark(_) => true,
      Command::Find(_) | Command::List(_) | Command::Undo(_) => false,
    }
  }

  pub fn undo(&mut self, model: &mut Model) -> Result<String, CommandError> {
    match self {
      Command::Add(cmd) => cmd.undo(model),
      Command::Clear(cmd) => cmd.undo(model),
      Command::Delete(cmd) => cmd.undo(model),
      Command::Edit(cmd) => cmd.undo(model),
      Command::Remark(cmd) => cmd.undo(model),
      Command::Find(_) | Command::List(_) | Command::Undo(_) => Err(CommandError::NotUndoable),
    }
  }

  pub fn word(&self) -> &'static str {
    match self {
      Command::Add(_) => AddCommand::WORD,
      Command::Clear(_) => ClearCommand::WORD,
      Command::Delete(_) => DeleteCommand::WORD,
      Command::Edit(_) => EditCommand::WORD,
      Command::Find(_) => FindCommand::WORD,
      Command::List(_) => ListCommand::WORD,
      Command::Remark(_) => RemarkCommand::WORD,
      Command::Undo(_) => UndoCommand::WORD,
    }
  }
}

/// A contact edit that has been applied to the model. Reverting it swaps the
/// two sides so the next revert re-applies the edit.
#[derive(Debug, Clone)]
struct Replacement {
  before: Contact,
  after: Contact,
}

impl Replacement {
  fn revert(&mut self, model: &mut Model) -> Result<&Contact, CommandError> {
    model.set_contact(&self.after, self.before.clone())?;
    std::mem::swap(&mut self.before, &mut self.after);
    Ok(&self.after)
  }
}
