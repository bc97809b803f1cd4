use crate::contact::Contact;

/// Plain, single line rendering of a contact used in command results.
pub fn format_contact(contact: &Contact) -> String {
  let tags: String = contact.tags().iter().map(|t| t.to_string()).collect();

  format!(
    "{name}; Phone: {phone}; Email: {email}; Address: {address}; Remark: {remark}; Tags: {tags}",
    name = contact.name(),
    phone = contact.phone(),
    email = contact.email(),
    address = contact.address(),
    remark = contact.remark(),
    tags = tags,
  )
}
