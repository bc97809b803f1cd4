use std::io::{Read, Seek, Write};

use log::debug;

use crate::contact::Contact;

use super::storage::{Storage, StorageError};

/// Keeps the whole contact list in a single pretty printed JSON file which is
/// rewritten on every save.
pub struct JsonStorage {
  contacts: JsonStorageItem<Contact>,
}

impl JsonStorage {
  pub fn new(filepath: &str) -> Result<Self, StorageError> {
    Ok(Self {
      contacts: JsonStorageItem::new(filepath)?,
    })
  }
}

impl Storage for JsonStorage {
  fn storage_path(&self) -> &str {
    self.contacts.storage_path()
  }

  fn contacts(&self) -> Vec<Contact> {
    self.contacts.all()
  }

  fn save_contacts(&mut self, contacts: &[Contact]) -> Result<(), StorageError> {
    self.contacts.replace_all(contacts.to_vec())
  }
}

struct JsonStorageItem<T> {
  filepath: String,
  file: std::fs::File,
  buffer: Vec<T>,
}

impl<T> JsonStorageItem<T>
where
  T: Clone + serde::de::DeserializeOwned + serde::ser::Serialize,
{
  fn new(filepath: &str) -> Result<Self, StorageError> {
    if let Some(parent) = std::path::Path::new(filepath).parent() {
      std::fs::create_dir_all(parent).map_err(|source| io_error(filepath, source))?;
    }

    let file = std::fs::OpenOptions::new()
      .create(true)
      .read(true)
      .write(true)
      .open(filepath)
      .map_err(|source| io_error(filepath, source))?;

    let mut storage_item = Self {
      filepath: filepath.to_owned(),
      file,
      buffer: Vec::new(),
    };

    storage_item.restore()?;

    debug!(
      "restored {} items from: {}",
      storage_item.buffer.len(),
      filepath
    );

    return Ok(storage_item);
  }

  fn storage_path(&self) -> &str {
    self.filepath.as_str()
  }

  fn restore(&mut self) -> Result<(), StorageError> {
    let mut content = String::new();
    self
      .file
      .rewind()
      .and_then(|_| self.file.read_to_string(&mut content))
      .map_err(|source| io_error(&self.filepath, source))?;

    if content.trim().is_empty() {
      self.buffer = Vec::new();
      return Ok(());
    }

    self.buffer = serde_json::from_str(&content).map_err(|source| StorageError::Json {
      path: self.filepath.clone(),
      source,
    })?;
    Ok(())
  }

  fn replace_all(&mut self, items: Vec<T>) -> Result<(), StorageError> {
    self.buffer = items;
    self.flush()
  }

  fn all(&self) -> Vec<T> {
    self.buffer.clone()
  }

  fn flush(&mut self) -> Result<(), StorageError> {
    let serialized =
      serde_json::to_string_pretty(&self.buffer).map_err(|source| StorageError::Json {
        path: self.filepath.clone(),
        source,
      })?;

    let file = &mut self.file;
    file
      .set_len(0)
      .and_then(|_| file.rewind())
      .and_then(|_| file.write_all(serialized.as_bytes()))
      .and_then(|_| file.flush())
      .map_err(|source| io_error(&self.filepath, source))?;

    debug!("flushed {} items to: {}", self.buffer.len(), self.filepath);
    Ok(())
  }
}

fn io_error(path: &str, source: std::io::Error) -> StorageError {
  StorageError::Io {
    path: path.to_owned(),
    source,
  }
}
