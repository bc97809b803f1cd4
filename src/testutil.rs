//! Typical contacts shared by unit tests.

use std::collections::BTreeSet;

use crate::{
  contact::{Address, Contact, Email, Name, Phone, Remark},
  model::Model,
  tag::Tag,
};

pub struct ContactBuilder {
  name: String,
  phone: String,
  email: String,
  address: String,
  tags: Vec<String>,
  remark: String,
}

impl ContactBuilder {
  pub fn new() -> Self {
    Self {
      name: "Amy Bee".to_owned(),
      phone: "85355255".to_owned(),
      email: "amy@gmail.com".to_owned(),
      address: "123, Jurong West Ave 6, #08-111".to_owned(),
      tags: Vec::new(),
      remark: String::new(),
    }
  }

  pub fn from_contact(contact: &Contact) -> Self {
    Self {
      name: contact.name().to_string(),
      phone: contact.phone().to_string(),
      email: contact.email().to_string(),
      address: contact.address().to_string(),
      tags: contact.tags().iter().map(|t| t.name().to_owned()).collect(),
      remark: contact.remark().to_string(),
    }
  }

  pub fn with_name(mut self, name: &str) -> Self {
    self.name = name.to_owned();
    self
  }

  pub fn with_phone(mut self, phone: &str) -> Self {
    self.phone = phone.to_owned();
    self
  }

  pub fn with_email(mut self, email: &str) -> Self {
    self.email = email.to_owned();
    self
  }

  pub fn with_address(mut self, address: &str) -> Self {
    self.address = address.to_owned();
    self
  }

  pub fn with_tags(mut self, tags: &[&str]) -> Self {
    self.tags = tags.iter().map(|t| t.to_string()).collect();
    self
  }

  pub fn with_remark(mut self, remark: &str) -> Self {
    self.remark = remark.to_owned();
    self
  }

  pub fn build(self) -> Contact {
    let tags: BTreeSet<Tag> = self.tags.iter().map(|t| Tag::new(t).unwrap()).collect();
    Contact::new(
      Name::new(&self.name).unwrap(),
      Phone::new(&self.phone).unwrap(),
      Email::new(&self.email).unwrap(),
      Address::new(&self.address).unwrap(),
      tags,
      Remark::new(&self.remark).unwrap(),
    )
  }
}

pub fn alice() -> Contact {
  ContactBuilder::new()
    .with_name("Alice Pauline")
    .with_phone("94351253")
    .with_email("alice@example.com")
    .with_address("123, Jurong West Ave 6, #08-111")
    .with_tags(&["friends"])
    .with_remark("She likes aardvarks.")
    .build()
}

pub fn benson() -> Contact {
  ContactBuilder::new()
    .with_name("Benson Meier")
    .with_phone("98765432")
    .with_email("johnd@example.com")
    .with_address("311, Clementi Ave 2, #02-25")
    .with_tags(&["owesMoney", "friends"])
    .build()
}

pub fn carl() -> Contact {
  ContactBuilder::new()
    .with_name("Carl Kurz")
    .with_phone("95352563")
    .with_email("heinz@example.com")
    .with_address("wall street")
    .build()
}

pub fn daniel() -> Contact {
  ContactBuilder::new()
    .with_name("Daniel Meier")
    .with_phone("87652533")
    .with_email("cornelia@example.com")
    .with_address("10th street")
    .with_tags(&["friends"])
    .build()
}

pub fn elle() -> Contact {
  ContactBuilder::new()
    .with_name("Elle Meyer")
    .with_phone("9482224")
    .with_email("werner@example.com")
    .with_address("michegan ave")
    .build()
}

pub fn fiona() -> Contact {
  ContactBuilder::new()
    .with_name("Fiona Kunz")
    .with_phone("9482427")
    .with_email("lydia@example.com")
    .with_address("little tokyo")
    .build()
}

pub fn george() -> Contact {
  ContactBuilder::new()
    .with_name("George Best")
    .with_phone("9482442")
    .with_email("anna@example.com")
    .with_address("4th street")
    .build()
}

// Not part of the typical list.
pub fn bob() -> Contact {
  ContactBuilder::new()
    .with_name("Bob Choo")
    .with_phone("22222222")
    .with_email("bob@example.com")
    .with_address("Block 123, Bobby Street 3")
    .with_tags(&["husband", "friend"])
    .build()
}

pub fn typical_contacts() -> Vec<Contact> {
  vec![
    alice(),
    benson(),
    carl(),
    daniel(),
    elle(),
    fiona(),
    george(),
  ]
}

pub fn typical_model() -> Model {
  Model::new(typical_contacts()).unwrap()
}
