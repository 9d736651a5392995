//! Error types for the storefront core.
//!
//! - [`StorageError`] - key-value backend failures
//! - [`FormError`] - rejected public form submissions
//! - [`AdminError`] - rejected admin edits
//! - [`AuthError`] - unreadable stored credentials
//! - [`StoreError`] - top-level wrapper used by the CLI
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from a [`crate::store::StorageBackend`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure (file backend).
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config could not be serialized.
    #[error("Storage JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend is not reachable (no window, storage disabled, quota).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Form Errors
// =============================================================================

/// Reasons a public form submission is rejected.
///
/// The `Display` text is what the user sees in the error toast.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Review submitted without clicking a star.
    #[error("Please click on the stars to rate.")]
    MissingRating,

    /// Rating outside 1..=5.
    #[error("Rating must be between 1 and 5, got {0}.")]
    RatingOutOfRange(u8),

    /// A required text field is blank.
    #[error("Please fill in all fields.")]
    MissingFields,

    /// Product is not part of the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Stored ids already reach `i64::MAX`; no larger id exists.
    #[error("No free id left for a new entry.")]
    IdsExhausted,
}

// =============================================================================
// Admin Errors
// =============================================================================

/// Reasons an admin edit is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// No request with this id.
    #[error("Request not found: {0}")]
    RequestNotFound(i64),

    /// New username or password is blank.
    #[error("Username and password must not be empty")]
    InvalidCredentials,
}

// =============================================================================
// Auth Errors
// =============================================================================

/// A stored credential string that looks salted but cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Malformed credential: {0}")]
    MalformedCredential(String),
}

// =============================================================================
// Top-level
// =============================================================================

/// Top-level error wrapping every lower-level error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Admin error: {0}")]
    Admin(#[from] AdminError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Unknown payment category name (CLI input).
    #[error("Unknown payment category: {0}")]
    UnknownCategory(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for form submissions.
pub type FormResult<T> = Result<T, FormError>;

/// Result type for admin edits.
pub type AdminResult<T> = Result<T, AdminError>;

/// Result type for top-level operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let form_err = FormError::MissingFields;
        let store_err: StoreError = form_err.into();
        assert!(store_err.to_string().contains("fill in all fields"));

        let admin_err = AdminError::RequestNotFound(42);
        let store_err: StoreError = admin_err.into();
        assert!(store_err.to_string().contains("42"));
    }

    #[test]
    fn test_form_error_messages_are_user_facing() {
        assert_eq!(
            FormError::MissingRating.to_string(),
            "Please click on the stars to rate."
        );
        assert!(FormError::RatingOutOfRange(9).to_string().contains('9'));
    }
}
