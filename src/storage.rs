mod storage;
mod storage_json;

pub use storage::{Storage, StorageError};
pub use storage_json::JsonStorage;
