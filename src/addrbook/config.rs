use crate::book::DEFAULT_BIRTHDAY_WINDOW;
use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for addrbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Data file name, relative to the home directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Days ahead the `birthdays` command looks
    #[serde(default = "default_birthday_window")]
    pub birthday_window: i64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_birthday_window() -> i64 {
    DEFAULT_BIRTHDAY_WINDOW
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            birthday_window: default_birthday_window(),
            log_level: default_log_level(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        serde_json::from_str(&content).map_err(|e| BookError::CorruptData {
            path: config_path,
            reason: e.to_string(),
        })
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(BookError::Io)?;
        Ok(())
    }

    /// Resolve the data file against `home`.
    pub fn data_path(&self, home: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            home.join(file)
        }
    }
}
