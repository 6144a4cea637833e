//! User domain model.
//!
//! # Responsibility
//! - Define the write-shape accepted by create/update and the read-shape
//!   returned by every operation.
//! - Own the fixed positional mapping from a stored row to a read-shape.
//!
//! # Invariants
//! - `UserId` is minted once by the service and never changes.
//! - Rows are always `(id, fullname, age, email, location)`; read-shapes are
//!   always `id, fullname, email, location, age`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity token of a stored user.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = String;

/// Raw stored row: `(id, fullname, age, email, location)`.
pub type UserRow = (
    UserId,
    Option<String>,
    Option<i64>,
    Option<String>,
    Option<String>,
);

/// Mints a fresh identity token.
pub fn new_user_id() -> UserId {
    Uuid::new_v4().to_string()
}

/// Mutable attributes of a user; carries no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWrite {
    pub fullname: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub location: Option<String>,
}

impl UserWrite {
    /// Borrows the attributes as storage column values.
    pub fn columns(&self) -> UserColumns<'_> {
        UserColumns {
            fullname: self.fullname.as_deref(),
            age: self.age,
            email: self.email.as_deref(),
            location: self.location.as_deref(),
        }
    }
}

/// Primitive column values bound by the record store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserColumns<'a> {
    pub fullname: Option<&'a str>,
    pub age: Option<i64>,
    pub email: Option<&'a str>,
    pub location: Option<&'a str>,
}

/// Identity plus attributes, as returned to callers.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRead {
    pub id: UserId,
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub age: Option<i64>,
}

impl UserRead {
    /// Builds a read-shape from submitted values, without touching storage.
    pub fn from_write(id: impl Into<UserId>, user: &UserWrite) -> Self {
        Self {
            id: id.into(),
            fullname: user.fullname.clone(),
            email: user.email.clone(),
            location: user.location.clone(),
            age: user.age,
        }
    }

    /// Maps a stored row positionally.
    pub fn from_row(row: UserRow) -> Self {
        let (id, fullname, age, email, location) = row;
        Self {
            id,
            fullname,
            email,
            location,
            age,
        }
    }

    /// Drops identity, keeping the four attributes.
    pub fn attributes(&self) -> UserWrite {
        UserWrite {
            fullname: self.fullname.clone(),
            age: self.age,
            email: self.email.clone(),
            location: self.location.clone(),
        }
    }
}
