//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record store calls into use-case level APIs.
//! - Keep inbound layers decoupled from storage details.

pub mod user_service;
