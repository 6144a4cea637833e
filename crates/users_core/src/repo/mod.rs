//! Record store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the primitive-valued data access contract for users.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Record store APIs never return domain read-models, only raw rows.
//! - Storage failures carry enough detail to classify them.

pub mod user_repo;
