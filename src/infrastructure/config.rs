//! Configuration management

use crate::error::{QuestionsError, Result};
use crate::infrastructure::repository::{DATA_DIR, DATA_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Name of the config file inside the content root
pub const CONFIG_FILE: &str = "questions.toml";

/// Environment variable naming the content root
pub const ROOT_ENV: &str = "QUESTIONS_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind: String,
    /// Question document, relative to the content root unless absolute
    pub data_file: PathBuf,
    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "127.0.0.1:5000".to_string(),
            data_file: Path::new(DATA_DIR).join(DATA_FILE),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load config from questions.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(QuestionsError::Io(e)),
        };

        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to questions.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Whether a config file exists in the given directory
    pub fn exists_in(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    /// Absolute location of the question document for a content root
    pub fn data_path(&self, root: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            root.join(&self.data_file)
        }
    }

    /// Parsed listen address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind.parse().map_err(|_| {
            QuestionsError::Config(format!(
                "Invalid bind address: '{}'. Expected HOST:PORT, e.g. 127.0.0.1:5000",
                self.bind
            ))
        })
    }

    /// Parsed log level
    pub fn level(&self) -> Result<tracing::Level> {
        self.log_level.parse().map_err(|_| {
            QuestionsError::Config(format!(
                "Invalid log level: '{}'. Valid levels are: trace, debug, info, warn, error",
                self.log_level
            ))
        })
    }

    fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        self.level()?;
        Ok(())
    }
}

/// Resolve the content root: explicit argument, then QUESTIONS_ROOT, then
/// the current directory.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }
    if let Ok(root) = std::env::var(ROOT_ENV) {
        if !root.trim().is_empty() {
            return Ok(PathBuf::from(root));
        }
    }
    Ok(std::env::current_dir()?)
}
