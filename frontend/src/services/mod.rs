//! Browser services.
//!
//! # Services
//!
//! - [`storage`] - `localStorage` backend and the "update and persist" step
//! - [`toast`] - transient notifications

pub mod storage;
pub mod toast;

pub use storage::*;
pub use toast::*;
