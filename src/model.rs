use log::{debug, warn};

use crate::{
  command::Command,
  contact::Contact,
  history::CommandHistory,
  predicate::ContactFilter,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
  #[error("this contact already exists in the address book")]
  DuplicateContact,

  #[error("contact not found in the address book")]
  ContactNotFound,
}

/// In-memory address book: the canonical contact list, the filter applied to
/// it and the undo history of the current session.
#[derive(Debug, Default)]
pub struct Model {
  contacts: Vec<Contact>,
  filter: ContactFilter,
  history: CommandHistory,
  unsaved_changes: bool,
}

impl Model {
  /// Builds a model over an existing contact list, such as one restored from
  /// storage. Two contacts with the same identity are rejected.
  pub fn new(contacts: Vec<Contact>) -> Result<Self, ModelError> {
    let mut model = Self {
      contacts: Vec::with_capacity(contacts.len()),
      filter: ContactFilter::ShowAll,
      history: CommandHistory::new(),
      unsaved_changes: false,
    };
    for contact in contacts {
      if model.has_contact(&contact) {
        warn!("duplicate contact in loaded list: {}", contact.name().as_str());
        return Err(ModelError::DuplicateContact);
      }
      model.contacts.push(contact);
    }
    Ok(model)
  }

  pub fn contacts(&self) -> &[Contact] {
    &self.contacts
  }

  /// Contacts passing the active filter, in address book order. Recomputed on
  /// every call.
  pub fn filtered_contacts(&self) -> Vec<&Contact> {
    self
      .contacts
      .iter()
      .filter(|c| self.filter.test(c))
      .collect()
  }

  pub fn filtered_contact_at(&self, index: usize) -> Option<&Contact> {
    self
      .contacts
      .iter()
      .filter(|c| self.filter.test(c))
      .nth(index)
  }

  pub fn filter(&self) -> &ContactFilter {
    &self.filter
  }

  pub fn update_filtered_contact_list(&mut self, filter: ContactFilter) {
    debug!("installing contact filter: {:?}", filter);
    self.filter = filter;
  }

  pub fn has_contact(&self, contact: &Contact) -> bool {
    self.contacts.iter().any(|c| c.is_same_contact(contact))
  }

  pub fn add_contact(&mut self, contact: Contact) -> Result<(), ModelError> {
    let position = self.contacts.len();
    self.insert_contact(position, contact)
  }

  /// Inserts at `position`, clamped to the end of the list.
  pub fn insert_contact(&mut self, position: usize, contact: Contact) -> Result<(), ModelError> {
    if self.has_contact(&contact) {
      return Err(ModelError::DuplicateContact);
    }

    let position = position.min(self.contacts.len());
    self.contacts.insert(position, contact);
    self.unsaved_changes = true;
    Ok(())
  }

  /// Removes `contact` and returns the position it occupied.
  pub fn remove_contact(&mut self, contact: &Contact) -> Result<usize, ModelError> {
    let position = self.position_of(contact)?;
    self.contacts.remove(position);
    self.unsaved_changes = true;
    Ok(position)
  }

  /// Replaces `target` with `edited` in place. `edited` must not collide with
  /// any other contact.
  pub fn set_contact(&mut self, target: &Contact, edited: Contact) -> Result<(), ModelError> {
    let position = self.position_of(target)?;

    let collides = self
      .contacts
      .iter()
      .enumerate()
      .any(|(i, c)| i != position && c.is_same_contact(&edited));
    if collides {
      return Err(ModelError::DuplicateContact);
    }

    self.contacts[position] = edited;
    self.unsaved_changes = true;
    Ok(())
  }

  /// Swaps in a whole new contact list and hands back the previous one.
  pub fn replace_contacts(&mut self, contacts: Vec<Contact>) -> Vec<Contact> {
    self.unsaved_changes = true;
    std::mem::replace(&mut self.contacts, contacts)
  }

  pub fn push_undo_command_history(&mut self, command: Command) -> bool {
    self.history.push(command)
  }

  pub fn pop_last_mutable_command(&mut self) -> Option<Command> {
    self.history.pop()
  }

  pub fn history(&self) -> &CommandHistory {
    &self.history
  }

  /// Whether the contact list changed since it was last saved.
  pub fn has_unsaved_changes(&self) -> bool {
    self.unsaved_changes
  }

  pub fn mark_saved(&mut self) {
    self.unsaved_changes = false;
  }

  fn position_of(&self, contact: &Contact) -> Result<usize, ModelError> {
    self
      .contacts
      .iter()
      .position(|c| c == contact)
      .ok_or(ModelError::ContactNotFound)
  }
}
