use crate::contact::Contact;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
  #[error("io error on {path}: {source}")]
  Io {
    path: String,
    source: std::io::Error,
  },

  #[error("corrupt contacts file {path}: {source}")]
  Json {
    path: String,
    source: serde_json::Error,
  },
}

pub trait Storage {
  fn storage_path(&self) -> &str;
  fn contacts(&self) -> Vec<Contact>;
  fn save_contacts(&mut self, contacts: &[Contact]) -> Result<(), StorageError>;
}
