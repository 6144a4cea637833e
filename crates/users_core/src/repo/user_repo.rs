//! User record store contract and SQLite implementation.
//!
//! # Responsibility
//! - Map the five domain verbs onto parameterized SQL.
//! - Return raw `UserRow` tuples; read-model shaping is the service's job.
//! - Classify storage failures into data and connectivity failures.
//!
//! # Invariants
//! - Each call acquires its own connection from the gateway and drops it
//!   before returning.
//! - Mutations do not check existence; callers re-check before mutating.

use crate::db::{ConnectionGateway, DbError};
use crate::model::user::{UserColumns, UserRow};
use rusqlite::{params, ErrorCode, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const INSERT_USER_SQL: &str =
    "INSERT INTO users(id, fullname, age, email, location) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_USER_SQL: &str = "DELETE FROM users WHERE id = ?1";
const UPDATE_USER_SQL: &str =
    "UPDATE users SET fullname = ?1, age = ?2, email = ?3, location = ?4 WHERE id = ?5";
const SELECT_USER_BY_ID_SQL: &str =
    "SELECT id, fullname, age, email, location FROM users WHERE id = ?1";
const SELECT_USERS_SQL: &str = "SELECT id, fullname, age, email, location FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Recoverable failure classes surfaced to callers as envelope messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Malformed or type-invalid field values.
    Data,
    /// The database could not be reached.
    Connectivity,
}

/// Repository error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl RepoError {
    /// Returns the recoverable class of this failure, or `None` when the
    /// failure is unclassified and must propagate.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::InvalidData(_) => Some(FailureKind::Data),
            Self::Db(DbError::Open(_)) => Some(FailureKind::Connectivity),
            Self::Db(DbError::Sqlite(err)) => classify_sqlite_error(err),
            Self::Db(DbError::UnsupportedSchemaVersion { .. }) => None,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

fn classify_sqlite_error(err: &rusqlite::Error) -> Option<FailureKind> {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
            ErrorCode::CannotOpen
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::SystemIoFailure
            | ErrorCode::NotADatabase
            | ErrorCode::PermissionDenied => Some(FailureKind::Connectivity),
            ErrorCode::ConstraintViolation | ErrorCode::TypeMismatch | ErrorCode::TooBig => {
                Some(FailureKind::Data)
            }
            _ => None,
        },
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..)
        | rusqlite::Error::Utf8Error(_)
        | rusqlite::Error::ToSqlConversionFailure(_) => Some(FailureKind::Data),
        _ => None,
    }
}

/// Record store interface: primitive values in, raw rows out.
pub trait UserRecordStore {
    fn insert(&self, id: &str, columns: &UserColumns<'_>) -> RepoResult<()>;
    fn delete(&self, id: &str) -> RepoResult<()>;
    fn update(&self, id: &str, columns: &UserColumns<'_>) -> RepoResult<()>;
    fn fetch_by_id(&self, id: &str) -> RepoResult<Option<UserRow>>;
    fn fetch_all(&self) -> RepoResult<Vec<UserRow>>;
}

impl<S: UserRecordStore + ?Sized> UserRecordStore for &S {
    fn insert(&self, id: &str, columns: &UserColumns<'_>) -> RepoResult<()> {
        (**self).insert(id, columns)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        (**self).delete(id)
    }

    fn update(&self, id: &str, columns: &UserColumns<'_>) -> RepoResult<()> {
        (**self).update(id, columns)
    }

    fn fetch_by_id(&self, id: &str) -> RepoResult<Option<UserRow>> {
        (**self).fetch_by_id(id)
    }

    fn fetch_all(&self) -> RepoResult<Vec<UserRow>> {
        (**self).fetch_all()
    }
}

/// SQLite-backed user record store.
pub struct SqliteUserRepository<G: ConnectionGateway> {
    gateway: G,
}

impl<G: ConnectionGateway> SqliteUserRepository<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: ConnectionGateway> UserRecordStore for SqliteUserRepository<G> {
    fn insert(&self, id: &str, columns: &UserColumns<'_>) -> RepoResult<()> {
        let conn = self.gateway.connect()?;
        conn.execute(
            INSERT_USER_SQL,
            params![
                id,
                columns.fullname,
                columns.age,
                columns.email,
                columns.location,
            ],
        )?;
        Ok(())
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let conn = self.gateway.connect()?;
        conn.execute(DELETE_USER_SQL, [id])?;
        Ok(())
    }

    fn update(&self, id: &str, columns: &UserColumns<'_>) -> RepoResult<()> {
        let conn = self.gateway.connect()?;
        conn.execute(
            UPDATE_USER_SQL,
            params![
                columns.fullname,
                columns.age,
                columns.email,
                columns.location,
                id,
            ],
        )?;
        Ok(())
    }

    fn fetch_by_id(&self, id: &str) -> RepoResult<Option<UserRow>> {
        let conn = self.gateway.connect()?;
        let row = conn
            .query_row(SELECT_USER_BY_ID_SQL, [id], read_user_row)
            .optional()?;
        Ok(row)
    }

    fn fetch_all(&self) -> RepoResult<Vec<UserRow>> {
        let conn = self.gateway.connect()?;
        let mut stmt = conn.prepare(SELECT_USERS_SQL)?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(read_user_row(row)?);
        }

        Ok(users)
    }
}

fn read_user_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::{FailureKind, RepoError};
    use crate::db::DbError;
    use rusqlite::types::Type;
    use rusqlite::ffi;

    fn sqlite_failure(code: std::os::raw::c_int) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), None)
    }

    #[test]
    fn open_failures_are_connectivity() {
        let err = RepoError::Db(DbError::Open(sqlite_failure(ffi::SQLITE_CANTOPEN)));
        assert_eq!(err.failure_kind(), Some(FailureKind::Connectivity));
    }

    #[test]
    fn busy_database_is_connectivity() {
        let err = RepoError::from(sqlite_failure(ffi::SQLITE_BUSY));
        assert_eq!(err.failure_kind(), Some(FailureKind::Connectivity));
    }

    #[test]
    fn column_decode_failures_are_data() {
        let err = RepoError::from(rusqlite::Error::InvalidColumnType(
            2,
            "age".to_string(),
            Type::Text,
        ));
        assert_eq!(err.failure_kind(), Some(FailureKind::Data));
        assert_eq!(
            RepoError::InvalidData("bad".to_string()).failure_kind(),
            Some(FailureKind::Data)
        );
    }

    #[test]
    fn constraint_violations_are_data() {
        let err = RepoError::from(sqlite_failure(ffi::SQLITE_CONSTRAINT));
        assert_eq!(err.failure_kind(), Some(FailureKind::Data));
    }

    #[test]
    fn schema_and_query_errors_are_unclassified() {
        let newer = RepoError::Db(DbError::UnsupportedSchemaVersion {
            db_version: 9,
            latest_supported: 1,
        });
        assert_eq!(newer.failure_kind(), None);
        assert_eq!(
            RepoError::from(rusqlite::Error::InvalidQuery).failure_kind(),
            None
        );
        assert_eq!(
            RepoError::from(sqlite_failure(ffi::SQLITE_ERROR)).failure_kind(),
            None
        );
    }
}
