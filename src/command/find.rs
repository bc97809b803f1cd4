use crate::{
  model::Model,
  predicate::{ContactFilter, ContactMatchesPredicate},
};

use super::{CommandError, CommandResult};

/// Narrows the contact view to contacts matching any of the keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
  predicate: ContactMatchesPredicate,
}

impl FindCommand {
  pub const WORD: &'static str = "find";
  pub const USAGE: &'static str = "find: Finds all contacts whose name, phone or email contains \
    any of the given keywords (case-insensitive, partial matches allowed) and displays them as a \
    list with index numbers.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice 9123 gmail";

  pub fn new(predicate: ContactMatchesPredicate) -> Self {
    Self { predicate }
  }

  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    model.update_filtered_contact_list(ContactFilter::Matches(self.predicate.clone()));
    let listed = model.filtered_contacts().len();
    Ok(CommandResult::new(format!("{} contacts listed!", listed)))
  }
}
