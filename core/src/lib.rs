//! # Storefront - config aggregate and purchase-link routing
//!
//! Everything the storefront UI persists lives in one JSON document, the
//! [`AppConfig`]. This crate owns that document and the logic around it;
//! the Leptos frontend and the `storefront` CLI are thin shells over it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────────────────┐
//! │ StorageBackend│◀───▶│ ConfigStore │◀───▶│ AppConfig (in memory)    │
//! │ localStorage │     │ load / save │     │ forms · admin · links    │
//! │ file · memory│     └─────────────┘     │ auth                     │
//! └──────────────┘                         └──────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Persisted data model
//! - [`catalog`] - Products, durations, payment methods
//! - [`defaults`] - Built-in configuration
//! - [`links`] - Override-table lookup
//! - [`auth`] - Admin credential check
//! - [`forms`] - Review and config-request submission
//! - [`admin`] - Admin edits
//! - [`reviews`] - Review summaries
//! - [`store`] - Load/save through a key-value backend
//! - [`settings`] - CLI settings

// Core modules
pub mod error;
pub mod models;

// Static data
pub mod catalog;
pub mod defaults;

// Logic
pub mod links;
pub mod auth;
pub mod forms;
pub mod admin;
pub mod reviews;

// Persistence
pub mod store;
pub mod settings;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    AdminError, AuthError, FormError, StorageError, StoreError, StoreResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    AdminAuth, AppConfig, ContactLinks, LinkOverride, ProductStyle, RequestConfig,
    RequestStatus, Review,
};

// =============================================================================
// Re-exports - Catalog & defaults
// =============================================================================

pub use catalog::{
    durations_for, PaymentMethodGroup, GRADIENT_PRESETS, PAYMENT_METHODS,
    PRODUCTS,
};
pub use defaults::default_config;

// =============================================================================
// Re-exports - Logic
// =============================================================================

pub use links::{
    available_categories, override_key, purchase_options, resolve_link, PaymentCategory,
    PaymentLink, PurchaseOption,
};
pub use auth::{authenticate, hash_password, simple_hash, Credential};
pub use forms::{submit_request, submit_review, RequestDraft, ReviewDraft};
pub use reviews::{recent_reviews, reviews_for, ReviewSummary};

// =============================================================================
// Re-exports - Persistence
// =============================================================================

pub use store::{ConfigStore, FileStorage, MemoryStorage, StorageBackend, STORAGE_KEY};
pub use settings::Settings;
