//! Uniform response envelope returned by every service operation.

use serde::{Deserialize, Serialize};

/// `{message, data}` wrapper. Empty `data` means "not found" or "no data".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response<T> {
    pub message: String,
    pub data: Vec<T>,
}

impl<T> Response<T> {
    pub fn new(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// Envelope carrying no results.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(message, Vec::new())
    }

    /// Envelope carrying exactly one result.
    pub fn single(message: impl Into<String>, item: T) -> Self {
        Self::new(message, vec![item])
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
