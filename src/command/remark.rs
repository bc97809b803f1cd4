use crate::{
  contact::Remark,
  fmt::format_contact,
  index::Index,
  model::Model,
  predicate::ContactFilter,
};

use super::{CommandError, CommandResult, Replacement};

/// Overwrites the remark of the contact at `index` in the current view. An
/// empty remark removes it.
#[derive(Debug, Clone)]
pub struct RemarkCommand {
  index: Index,
  remark: Remark,
  applied: Option<Replacement>,
}

impl RemarkCommand {
  pub const WORD: &'static str = "remark";
  pub const USAGE: &'static str = "remark: Edits the remark of the contact identified by the index \
    number used in the last contact listing. Existing remark will be overwritten by the input.\n\
    Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
    Example: remark 1 r/Likes to swim.";

  pub fn new(index: Index, remark: Remark) -> Self {
    Self {
      index,
      remark,
      applied: None,
    }
  }

  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    let target = model
      .filtered_contact_at(self.index.zero_based())
      .cloned()
      .ok_or(CommandError::InvalidIndex(self.index.one_based()))?;

    let edited = target.with_remark(self.remark.clone());
    model.set_contact(&target, edited.clone())?;
    model.update_filtered_contact_list(ContactFilter::ShowAll);

    let message = match self.remark.is_empty() {
      false => format!("Added remark to Contact: {}", format_contact(&edited)),
      true => format!("Removed remark from Contact: {}", format_contact(&edited)),
    };

    self.applied = Some(Replacement {
      before: target,
      after: edited,
    });

    Ok(CommandResult::new(message))
  }

  pub fn undo(&mut self, model: &mut Model) -> Result<String, CommandError> {
    let replacement = self.applied.as_mut().ok_or(CommandError::NotExecuted)?;
    let restored = replacement.revert(model)?;
    let message = format!("Restored remark of Contact: {}", format_contact(restored));
    model.update_filtered_contact_list(ContactFilter::ShowAll);
    Ok(message)
  }
}

impl PartialEq for RemarkCommand {
  fn eq(&self, other: &Self) -> bool {
    self.index == other.index && self.remark == other.remark
  }
}
