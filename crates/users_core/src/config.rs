//! Database connection settings.
//!
//! # Responsibility
//! - Hold the four connection settings (name, user, password, host) that
//!   are populated once at process start.
//! - Derive the SQLite file location and a loggable connection target.
//!
//! # Invariants
//! - `name` and `host` are non-empty once validated.
//! - `name` never contains path separators, so the database file always
//!   lands directly inside `host`.
//! - The password never appears in `Debug` output or connection targets.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

const DATABASE_FILE_EXTENSION: &str = "sqlite3";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidName(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSetting(setting) => write!(f, "database setting `{setting}` is empty"),
            Self::InvalidName(name) => write!(
                f,
                "database name `{name}` must not contain path separators"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Connection settings for the persistence gateway.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Database name. Used as the SQLite file stem.
    pub name: String,
    /// Username. SQLite does not authenticate; kept for the target description.
    pub user: String,
    /// Password. SQLite does not authenticate; never logged.
    pub password: String,
    /// Host. For SQLite this is the directory holding the database file.
    pub host: String,
}

impl DbConfig {
    pub fn new(
        name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            user: user.into(),
            password: password.into(),
            host: host.into(),
        }
    }

    /// Checks that the settings can address a database file.
    ///
    /// # Errors
    /// - `MissingSetting` when `name` or `host` is blank.
    /// - `InvalidName` when `name` contains `/` or `\`.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::MissingSetting("name"));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingSetting("host"));
        }
        if self.name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidName(self.name.clone()));
        }
        Ok(())
    }

    /// Returns `<host>/<name>.sqlite3`.
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(self.host.trim()).join(format!(
            "{}.{DATABASE_FILE_EXTENSION}",
            self.name.trim()
        ))
    }

    /// Single connection target combining all settings, safe to log.
    pub fn connection_target(&self) -> String {
        let user = self.user.trim();
        let credentials = match (user.is_empty(), self.password.is_empty()) {
            (true, _) => String::new(),
            (false, true) => format!("{user}@"),
            (false, false) => format!("{user}:***@"),
        };
        format!(
            "sqlite://{credentials}{}/{}",
            self.host.trim().trim_end_matches('/'),
            self.name.trim()
        )
    }
}

impl Debug for DbConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .finish()
    }
}
