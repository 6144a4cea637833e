//! Core domain logic for the users service.
//! This crate is the single source of truth for user CRUD invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, DbConfig};
pub use db::{ConnectionGateway, DbError, SqliteGateway};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogSink};
pub use model::response::Response;
pub use model::user::{UserColumns, UserId, UserRead, UserRow, UserWrite};
pub use repo::user_repo::{
    FailureKind, RepoError, RepoResult, SqliteUserRepository, UserRecordStore,
};
pub use service::user_service::{UserResponse, UserService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
