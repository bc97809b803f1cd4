use crate::{model::Model, predicate::ContactFilter};

use super::{CommandError, CommandResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCommand {}

impl ListCommand {
  pub const WORD: &'static str = "list";

  pub fn new() -> Self {
    Self {}
  }

  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    model.update_filtered_contact_list(ContactFilter::ShowAll);
    Ok(CommandResult::new("Listed all contacts".to_owned()))
  }
}
