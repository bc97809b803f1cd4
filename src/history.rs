use log::{debug, warn};

use crate::command::Command;

/// Undo stack of executed mutable commands, most recent last.
#[derive(Debug, Default)]
pub struct CommandHistory {
  undo_stack: Vec<Command>,
}

impl CommandHistory {
  pub fn new() -> Self {
    Self {
      undo_stack: Vec::new(),
    }
  }

  /// Pushes `command` on top of the stack. Commands that are not mutable are
  /// rejected and `false` is returned.
  pub fn push(&mut self, command: Command) -> bool {
    if !command.is_mutable() {
      warn!(
        "refusing to record non mutable command '{}' in undo history",
        command.word()
      );
      return false;
    }

    debug!("recording '{}' in undo history", command.word());
    self.undo_stack.push(command);
    return true;
  }

  pub fn pop(&mut self) -> Option<Command> {
    self.undo_stack.pop()
  }

  pub fn len(&self) -> usize {
    self.undo_stack.len()
  }

  pub fn is_empty(&self) -> bool {
    self.undo_stack.is_empty()
  }
}
