/// Client configuration
///
/// Defaults point at a database server on localhost. A JSON file under
/// `~/.btree-notes/` can override them, and command line flags override both.

use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Where the database server listens unless told otherwise
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8081/query";

/// Table holding all notes
pub const DEFAULT_TABLE: &str = "notes";

const CONFIG_DIR: &str = ".btree-notes";
const CONFIG_FILE: &str = "config.json";

/// Resolved client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: Url,
    pub table: String,
}

/// On-disk shape, every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    endpoint: Option<String>,
    table: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Constant input, pinned by test_defaults
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            NotesError::Config("Could not determine home directory".to_string())
        })?;
        Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present and the built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = match Self::default_path() {
                    Ok(p) => p,
                    // No home directory is not fatal, just use defaults
                    Err(_) => return Ok(Self::default()),
                };
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read a JSON config file on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&raw)?;

        let mut config = Self::default();
        config.apply_overrides(file.endpoint.as_deref(), file.table.as_deref())?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply overrides from any source (file, command line)
    pub fn apply_overrides(&mut self, endpoint: Option<&str>, table: Option<&str>) -> Result<()> {
        if let Some(endpoint) = endpoint {
            self.endpoint = Url::parse(endpoint)?;
        }

        if let Some(table) = table {
            let table = table.trim();
            if table.is_empty() {
                return Err(NotesError::Config("table name cannot be empty".to_string()));
            }
            if !is_identifier(table) {
                return Err(NotesError::Config(format!(
                    "invalid table name '{}': use letters, digits and underscores",
                    table
                )));
            }
            self.table = table.to_string();
        }

        Ok(())
    }
}

// The table name goes into statements unquoted, so only plain identifiers
// ([A-Za-z_][A-Za-z0-9_]*) are allowed.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
