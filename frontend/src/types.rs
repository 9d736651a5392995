//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Toast Types** - transient user notifications
//! - **Modal Types** - which dialog is open

use std::fmt;

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }

    /// Font Awesome icon class.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "fa-circle-check",
            ToastKind::Error => "fa-circle-exclamation",
            ToastKind::Info => "fa-circle-info",
        }
    }
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

// =============================================================================
// Modal Types
// =============================================================================

/// The dialog currently open. Only one is shown at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    /// Purchase dialog for a product.
    Purchase(String),
    /// Accepted payment methods, grouped by category.
    PaymentMethods,
    RequestConfig,
    WriteReview,
    Login,
    AdminPanel,
    /// Style editor for a product (admin only).
    StyleEditor(String),
}

impl fmt::Display for ActiveModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveModal::Purchase(product) => write!(f, "purchase:{}", product),
            ActiveModal::PaymentMethods => write!(f, "payment-methods"),
            ActiveModal::RequestConfig => write!(f, "request-config"),
            ActiveModal::WriteReview => write!(f, "write-review"),
            ActiveModal::Login => write!(f, "login"),
            ActiveModal::AdminPanel => write!(f, "admin"),
            ActiveModal::StyleEditor(product) => write!(f, "style-editor:{}", product),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_display() {
        assert_eq!(ActiveModal::Purchase("Melonity".into()).to_string(), "purchase:Melonity");
        assert_eq!(ActiveModal::StyleEditor("Umbrella".into()).to_string(), "style-editor:Umbrella");
        assert_eq!(ActiveModal::AdminPanel.to_string(), "admin");
    }

    #[test]
    fn test_toast_styling() {
        assert_eq!(ToastKind::Error.css_class(), "toast-error");
        assert_eq!(ToastKind::Success.icon(), "fa-circle-check");
    }
}
