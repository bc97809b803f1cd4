use log::debug;

const ROLODEX_CONFIG_ENV: &str = "ROLODEX_CONFIG";
const ROLODEX_DEFAULT_STORAGE_DIR: &str = ".rolodex";
const ROLODEX_DEFAULT_STORAGE_FILE: &str = "contacts.json";
const ROLODEX_DEFAULT_CONFIG_NAME: &str = ".rolodex.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("HOME is not set, cannot locate the config file")]
  NoHome,

  #[error("config io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("malformed config: {0}")]
  Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub storage_file_path: String,
}

impl Config {
  /// Loads the config from `$ROLODEX_CONFIG` or `~/.rolodex.json`, writing a
  /// default one on first run.
  pub fn new() -> Result<Self, ConfigError> {
    let home_env = std::env::var("HOME").map_err(|_| ConfigError::NoHome)?;
    let home = std::path::Path::new(home_env.as_str());

    let config_file_path = match std::env::var(ROLODEX_CONFIG_ENV) {
      Ok(file_path) => std::path::PathBuf::from(file_path),
      Err(_) => home.join(ROLODEX_DEFAULT_CONFIG_NAME),
    };

    let default_storage = home
      .join(ROLODEX_DEFAULT_STORAGE_DIR)
      .join(ROLODEX_DEFAULT_STORAGE_FILE);

    Self::load_or_create(&config_file_path, &default_storage.to_string_lossy())
  }

  pub fn load_or_create(
    config_file_path: &std::path::Path,
    default_storage_file_path: &str,
  ) -> Result<Self, ConfigError> {
    debug!("rolodex config: {}", config_file_path.display());

    if !config_file_path.exists() {
      let config = Self {
        storage_file_path: default_storage_file_path.to_owned(),
      };

      if let Some(parent) = config_file_path.parent() {
        std::fs::create_dir_all(parent)?;
      }
      let file = std::fs::File::create(config_file_path)?;
      serde_json::to_writer_pretty(file, &config)?;
      return Ok(config);
    }

    let file = std::fs::File::open(config_file_path)?;
    Ok(serde_json::from_reader(file)?)
  }
}
