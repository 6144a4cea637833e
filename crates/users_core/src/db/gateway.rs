//! Persistence gateway: one connection per call.
//!
//! # Invariants
//! - Every `connect` opens a fresh connection; callers drop it when done.
//! - Settings are validated once, when the gateway is built.

use super::open::open_db;
use super::DbResult;
use crate::config::{ConfigResult, DbConfig};
use rusqlite::Connection;
use std::path::PathBuf;

/// Source of query-executing handles for the record store.
pub trait ConnectionGateway {
    /// Returns a usable connection or fails.
    fn connect(&self) -> DbResult<Connection>;
}

/// Gateway opening the SQLite file addressed by a [`DbConfig`].
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    config: DbConfig,
    path: PathBuf,
}

impl SqliteGateway {
    pub fn new(config: DbConfig) -> ConfigResult<Self> {
        config.validate()?;
        let path = config.database_path();
        Ok(Self { config, path })
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }
}

impl ConnectionGateway for SqliteGateway {
    fn connect(&self) -> DbResult<Connection> {
        open_db(&self.path)
    }
}

impl<G: ConnectionGateway + ?Sized> ConnectionGateway for &G {
    fn connect(&self) -> DbResult<Connection> {
        (**self).connect()
    }
}
