//! User orchestration service.
//!
//! # Responsibility
//! - Provide the five user operations to inbound callers.
//! - Mint identity, re-check existence before mutations and shape rows
//!   into read-models.
//! - Turn data and connectivity failures into fixed envelope messages.
//!
//! # Invariants
//! - Add/update responses echo the submitted values; delete responses echo
//!   the pre-delete row. None of them re-read storage after the write.
//! - `delete_user`/`update_user` never call the mutating store operation for
//!   an unknown id.
//! - Only unclassified failures leave this layer as `Err`.
//! - Log events carry ids and counts, never attribute values.

use crate::model::response::Response;
use crate::model::user::{new_user_id, UserRead, UserWrite};
use crate::repo::user_repo::{FailureKind, RepoResult, UserRecordStore};
use log::{debug, error};

pub const USER_CREATED: &str = "user created";
pub const USER_DELETED: &str = "user deleted";
pub const USER_NOT_FOUND: &str = "user not found";
pub const USER_UPDATED: &str = "user updated";
pub const USER_DOES_NOT_EXIST: &str = "user does not exist";
pub const USER_FOUND: &str = "user found";
pub const USERS_FOUND: &str = "users found";
pub const NO_USERS_FOUND: &str = "no users found";
pub const DATA_ERROR_MESSAGE: &str = "an error occurred while processing user data";
pub const CONNECTIVITY_ERROR_MESSAGE: &str = "failed to connect to the database";

/// Result of a service call. `Err` only carries unclassified failures.
pub type UserResponse = RepoResult<Response<UserRead>>;

/// Use-case service for user CRUD over a record store.
pub struct UserService<S: UserRecordStore> {
    store: S,
}

impl<S: UserRecordStore> UserService<S> {
    /// Creates a service using the provided record store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a user under a freshly minted id.
    pub fn add_user(&self, user: &UserWrite) -> UserResponse {
        settle("user_add", self.try_add_user(user))
    }

    /// Deletes a user after confirming it exists.
    pub fn delete_user(&self, id: &str) -> UserResponse {
        settle("user_delete", self.try_delete_user(id))
    }

    /// Replaces a user's attributes after confirming it exists.
    pub fn update_user(&self, id: &str, user: &UserWrite) -> UserResponse {
        settle("user_update", self.try_update_user(id, user))
    }

    pub fn get_user_by_id(&self, id: &str) -> UserResponse {
        settle("user_get", self.try_get_user_by_id(id))
    }

    /// Lists every stored user in storage order.
    pub fn get_all_users(&self) -> UserResponse {
        settle("user_list", self.try_get_all_users())
    }

    fn try_add_user(&self, user: &UserWrite) -> UserResponse {
        let id = new_user_id();
        self.store.insert(&id, &user.columns())?;
        debug!("event=user_add module=service status=ok user_id={id}");
        Ok(Response::single(USER_CREATED, UserRead::from_write(id, user)))
    }

    fn try_delete_user(&self, id: &str) -> UserResponse {
        let Some(row) = self.store.fetch_by_id(id)? else {
            return Ok(Response::empty(USER_NOT_FOUND));
        };

        self.store.delete(id)?;
        debug!("event=user_delete module=service status=ok user_id={id}");
        Ok(Response::single(USER_DELETED, UserRead::from_row(row)))
    }

    fn try_update_user(&self, id: &str, user: &UserWrite) -> UserResponse {
        if self.store.fetch_by_id(id)?.is_none() {
            return Ok(Response::empty(USER_DOES_NOT_EXIST));
        }

        self.store.update(id, &user.columns())?;
        debug!("event=user_update module=service status=ok user_id={id}");
        Ok(Response::single(USER_UPDATED, UserRead::from_write(id, user)))
    }

    fn try_get_user_by_id(&self, id: &str) -> UserResponse {
        match self.store.fetch_by_id(id)? {
            Some(row) => Ok(Response::single(USER_FOUND, UserRead::from_row(row))),
            None => Ok(Response::empty(USER_DOES_NOT_EXIST)),
        }
    }

    fn try_get_all_users(&self) -> UserResponse {
        let rows = self.store.fetch_all()?;
        if rows.is_empty() {
            return Ok(Response::empty(NO_USERS_FOUND));
        }

        let users = rows.into_iter().map(UserRead::from_row).collect::<Vec<_>>();
        debug!(
            "event=user_list module=service status=ok count={}",
            users.len()
        );
        Ok(Response::new(USERS_FOUND, users))
    }
}

/// Converts classified failures into envelopes; unclassified ones propagate.
fn settle(event: &'static str, outcome: UserResponse) -> UserResponse {
    let err = match outcome {
        Ok(response) => return Ok(response),
        Err(err) => err,
    };

    match err.failure_kind() {
        Some(FailureKind::Data) => {
            error!("event={event} module=service status=error error_kind=data error={err}");
            Ok(Response::empty(DATA_ERROR_MESSAGE))
        }
        Some(FailureKind::Connectivity) => {
            error!(
                "event={event} module=service status=error error_kind=connectivity error={err}"
            );
            Ok(Response::empty(CONNECTIVITY_ERROR_MESSAGE))
        }
        None => Err(err),
    }
}
