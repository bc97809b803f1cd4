use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tag::Tag;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]{2,}(?:-[A-Za-z0-9]+)*$",
  )
  .expect("email pattern compiles")
});

const MIN_PHONE_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
  #[error("names should only contain alphanumeric characters and spaces, and it should not be blank: '{0}'")]
  InvalidName(String),

  #[error("phone numbers should only contain digits, and it should be at least 3 digits long: '{0}'")]
  InvalidPhone(String),

  #[error("emails should be of the format local-part@domain: '{0}'")]
  InvalidEmail(String),

  #[error("addresses can take any values, and it should not be blank")]
  InvalidAddress,

  #[error("tag names should be alphanumeric: '{0}'")]
  InvalidTag(String),
}

// Serde glue shared by the string-backed value types: deserialization goes
// through the validating constructor.
macro_rules! string_value {
  ($t:ident) => {
    impl TryFrom<String> for $t {
      type Error = ContactError;

      fn try_from(value: String) -> Result<Self, Self::Error> {
        $t::new(&value)
      }
    }

    impl From<$t> for String {
      fn from(value: $t) -> Self {
        value.0
      }
    }

    impl std::fmt::Display for $t {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
      }
    }

    impl $t {
      pub fn as_str(&self) -> &str {
        self.0.as_str()
      }
    }
  };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
  pub fn new(name: &str) -> Result<Self, ContactError> {
    let mut chars = name.chars();
    let starts_alphanumeric = chars.next().map_or(false, |c| c.is_alphanumeric());
    if !starts_alphanumeric || !chars.all(|c| c.is_alphanumeric() || c == ' ') {
      return Err(ContactError::InvalidName(name.to_owned()));
    }
    Ok(Self(name.to_owned()))
  }
}

string_value!(Name);

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
  pub fn new(phone: &str) -> Result<Self, ContactError> {
    if phone.len() < MIN_PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
      return Err(ContactError::InvalidPhone(phone.to_owned()));
    }
    Ok(Self(phone.to_owned()))
  }
}

string_value!(Phone);

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
  pub fn new(email: &str) -> Result<Self, ContactError> {
    if !EMAIL_REGEX.is_match(email) {
      return Err(ContactError::InvalidEmail(email.to_owned()));
    }
    Ok(Self(email.to_owned()))
  }
}

string_value!(Email);

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
  pub fn new(address: &str) -> Result<Self, ContactError> {
    if address.trim().is_empty() {
      return Err(ContactError::InvalidAddress);
    }
    Ok(Self(address.to_owned()))
  }
}

string_value!(Address);

/// Free text attached to a contact. Empty means "no remark".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Remark(String);

impl Remark {
  pub fn new(remark: &str) -> Result<Self, ContactError> {
    Ok(Self(remark.to_owned()))
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

string_value!(Remark);

/// An address book entry. Contacts are immutable: edits build a new value
/// which replaces the old one in the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Contact {
  name: Name,
  phone: Phone,
  email: Email,
  address: Address,
  #[serde(default)]
  tags: BTreeSet<Tag>,
  #[serde(default)]
  remark: Remark,
}

impl Contact {
  pub fn new(
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    remark: Remark,
  ) -> Self {
    Self {
      name,
      phone,
      email,
      address,
      tags,
      remark,
    }
  }

  pub fn name(&self) -> &Name {
    &self.name
  }

  pub fn phone(&self) -> &Phone {
    &self.phone
  }

  pub fn email(&self) -> &Email {
    &self.email
  }

  pub fn address(&self) -> &Address {
    &self.address
  }

  pub fn tags(&self) -> &BTreeSet<Tag> {
    &self.tags
  }

  pub fn remark(&self) -> &Remark {
    &self.remark
  }

  /// Weaker notion of equality used for duplicate detection: two contacts
  /// are the same entity when name, phone and email all match.
  pub fn is_same_contact(&self, other: &Contact) -> bool {
    self.name == other.name && self.phone == other.phone && self.email == other.email
  }

  pub fn with_remark(&self, remark: Remark) -> Contact {
    Contact {
      remark,
      ..self.clone()
    }
  }
}
