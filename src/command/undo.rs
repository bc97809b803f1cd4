use log::{debug, warn};

use crate::model::Model;

use super::{CommandError, CommandResult};

/// Reverts the most recent mutable command.
///
/// The reverted command is pushed back on the history stack, so undoing
/// twice in a row toggles that same command rather than walking further
/// back in history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndoCommand {}

impl UndoCommand {
  pub const WORD: &'static str = "undo";

  pub fn new() -> Self {
    Self {}
  }

  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    let mut command = model
      .pop_last_mutable_command()
      .ok_or(CommandError::NothingToUndo)?;

    if !command.is_mutable() {
      // History only ever accepts mutable commands.
      warn!(
        "non mutable command '{}' found in undo history, dropping it",
        command.word()
      );
      return Err(CommandError::NotUndoable);
    }

    debug!("undoing '{}'", command.word());
    let undone = command.undo(model);
    model.push_undo_command_history(command);

    let message = undone?;
    Ok(CommandResult::new(format!("Undo successful.\n{}", message)))
  }
}
