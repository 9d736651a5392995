//! Application configuration.
//!
//! Compile-time settings for the storefront UI. Store content (links,
//! reviews, overrides) is not here: it lives in the persisted
//! [`storefront::AppConfig`].

/// Store name shown in the header, footer and page title.
pub const STORE_NAME: &str = "Miuw Store";

/// How long a toast stays on screen (ms).
pub const TOAST_TIMEOUT_MS: u32 = 3_500;

/// Maximum toasts visible at once; the oldest is dropped first.
pub const MAX_TOASTS: usize = 4;

/// Reviews shown in the testimonials section.
pub const TESTIMONIALS_SHOWN: usize = 9;
