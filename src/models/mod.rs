//! Data models for Librarian

pub mod address;
pub mod admin;
pub mod author;
pub mod book;
pub mod city;
pub mod customer;

use crate::error::AppError;

// Re-export commonly used types
pub use address::Address;
pub use admin::Admin;
pub use author::Author;
pub use book::{Book, BookKind};
pub use city::City;
pub use customer::{Customer, Jmbg};

/// A record addressed by a single string identity
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable type name, used in error messages and dump file names
    const NAME: &'static str;

    fn key(&self) -> &str;

    fn not_found(id: &str) -> AppError {
        AppError::NotFound(format!("{} {} not found", Self::NAME, id))
    }

    fn missing_reference(id: &str) -> AppError {
        AppError::MissingReference(format!("{} {} not found", Self::NAME, id))
    }
}

/// Reject a missing or whitespace-only required constructor argument
pub(crate) fn require(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(message.to_string()));
    }
    Ok(())
}
