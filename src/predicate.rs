use log::{debug, trace};

use crate::contact::Contact;

/// Tests whether any of the keywords is a case-insensitive substring of a
/// contact's name, phone or email.
///
/// Blank keywords are ignored, and a predicate left without any non-blank
/// keyword matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactMatchesPredicate {
  keywords: Vec<String>,
}

impl ContactMatchesPredicate {
  pub fn new(keywords: Vec<String>) -> Self {
    debug!(
      "created contact predicate with {} keywords: {:?}",
      keywords.len(),
      keywords
    );
    Self { keywords }
  }

  pub fn test(&self, contact: &Contact) -> bool {
    // Field order decides which match gets reported, not the result.
    let fields = [
      ("name", contact.name().as_str().to_lowercase()),
      ("phone", contact.phone().as_str().to_lowercase()),
      ("email", contact.email().as_str().to_lowercase()),
    ];

    for keyword in self.keywords.iter() {
      if keyword.trim().is_empty() {
        trace!("skipping blank keyword");
        continue;
      }

      let keyword = keyword.to_lowercase();
      for (field_name, value) in fields.iter() {
        if value.contains(keyword.as_str()) {
          trace!(
            "keyword '{}' matched {} of {}",
            keyword,
            field_name,
            contact.name()
          );
          return true;
        }
      }
    }

    trace!("no match found for {}", contact.name());
    return false;
  }
}

impl std::fmt::Display for ContactMatchesPredicate {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "keywords: [{}]", self.keywords.join(", "))
  }
}

/// The filter installed on the model's contact view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContactFilter {
  ShowAll,
  Matches(ContactMatchesPredicate),
}

impl ContactFilter {
  pub fn test(&self, contact: &Contact) -> bool {
    match self {
      ContactFilter::ShowAll => true,
      ContactFilter::Matches(predicate) => predicate.test(contact),
    }
  }
}

impl Default for ContactFilter {
  fn default() -> Self {
    ContactFilter::ShowAll
  }
}
