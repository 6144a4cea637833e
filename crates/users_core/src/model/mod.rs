//! Domain model for users and the response envelope.
//!
//! # Responsibility
//! - Define the typed shapes exchanged with core callers.
//! - Keep storage rows and read-models distinct.

pub mod response;
pub mod user;
