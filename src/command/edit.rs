use std::collections::BTreeSet;

use crate::{
  contact::{Address, Contact, Email, Name, Phone},
  fmt::format_contact,
  index::Index,
  model::Model,
  predicate::ContactFilter,
  tag::Tag,
};

use super::{CommandError, CommandResult, Replacement};

/// Fields to overwrite on the edited contact. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditContactDescriptor {
  pub name: Option<Name>,
  pub phone: Option<Phone>,
  pub email: Option<Email>,
  pub address: Option<Address>,
  pub tags: Option<BTreeSet<Tag>>,
}

impl EditContactDescriptor {
  pub fn is_any_field_edited(&self) -> bool {
    self.name.is_some()
      || self.phone.is_some()
      || self.email.is_some()
      || self.address.is_some()
      || self.tags.is_some()
  }

  fn apply(&self, contact: &Contact) -> Contact {
    Contact::new(
      self.name.clone().unwrap_or_else(|| contact.name().clone()),
      self.phone.clone().unwrap_or_else(|| contact.phone().clone()),
      self.email.clone().unwrap_or_else(|| contact.email().clone()),
      self
        .address
        .clone()
        .unwrap_or_else(|| contact.address().clone()),
      self.tags.clone().unwrap_or_else(|| contact.tags().clone()),
      contact.remark().clone(),
    )
  }
}

#[derive(Debug, Clone)]
pub struct EditCommand {
  index: Index,
  descriptor: EditContactDescriptor,
  applied: Option<Replacement>,
}

impl EditCommand {
  pub const WORD: &'static str = "edit";
  pub const USAGE: &'static str = "edit: Edits the details of the contact identified by the index \
    number used in the displayed contact list. Existing values will be overwritten by the input \
    values.\n\
    Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
    Example: edit 1 p/91234567 e/johndoe@example.com";

  pub fn new(index: Index, descriptor: EditContactDescriptor) -> Self {
    Self {
      index,
      descriptor,
      applied: None,
    }
  }

  pub fn execute(&mut self, model: &mut Model) -> Result<CommandResult, CommandError> {
    let target = model
      .filtered_contact_at(self.index.zero_based())
      .cloned()
      .ok_or(CommandError::InvalidIndex(self.index.one_based()))?;

    let edited = self.descriptor.apply(&target);
    model.set_contact(&target, edited.clone())?;
    model.update_filtered_contact_list(ContactFilter::ShowAll);

    let message = format!("Edited Contact: {}", format_contact(&edited));
    self.applied = Some(Replacement {
      before: target,
      after: edited,
    });

    Ok(CommandResult::new(message))
  }

  pub fn undo(&mut self, model: &mut Model) -> Result<String, CommandError> {
    let replacement = self.applied.as_mut().ok_or(CommandError::NotExecuted)?;
    let restored = replacement.revert(model)?;
    let message = format!("Reverted edit, Contact is now: {}", format_contact(restored));
    model.update_filtered_contact_list(ContactFilter::ShowAll);
    Ok(message)
  }
}

impl PartialEq for EditCommand {
  fn eq(&self, other: &Self) -> bool {
    self.index == other.index && self.descriptor == other.descriptor
  }
}
