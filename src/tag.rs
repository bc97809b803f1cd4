use crate::contact::ContactError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
  name: String,
}

impl Tag {
  pub fn new(name: &str) -> Result<Self, ContactError> {
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric()) {
      return Err(ContactError::InvalidTag(name.to_owned()));
    }
    Ok(Self {
      name: name.to_owned(),
    })
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }
}

impl TryFrom<String> for Tag {
  type Error = ContactError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Tag::new(&value)
  }
}

impl From<Tag> for String {
  fn from(tag: Tag) -> Self {
    tag.name
  }
}

impl std::fmt::Display for Tag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}]", self.name)
  }
}
