//! UI components for the storefront.
//!
//! # Layout Components
//! - [`Header`] - Navigation, contact links and the admin entry point
//! - [`Hero`] - Title and call-to-action buttons
//! - [`ProductList`] - Product cards
//! - [`Testimonials`] - Review summary and recent reviews
//! - [`Footer`] - Contact links
//! - [`ToastStack`] - Transient notifications
//!
//! # Dialogs
//! - [`Modal`] - Shared dialog frame
//! - [`PurchaseModal`] - Durations and payment links for one product
//! - [`PaymentMethodsModal`] - Accepted payment methods
//! - [`RequestConfigModal`] - Config request form
//! - [`ReviewModal`] - Review form
//! - [`LoginModal`] - Admin login
//! - [`AdminPanel`] - Admin edits
//! - [`StyleEditorModal`] - Per-product card styling

mod header;
mod hero;
mod product_list;
mod testimonials;
mod footer;
mod toasts;

mod modal;
mod purchase;
mod payment_methods;
mod request_form;
mod review_form;
mod login;
mod admin_panel;
mod style_editor;

pub use header::*;
pub use hero::*;
pub use product_list::*;
pub use testimonials::*;
pub use footer::*;
pub use toasts::*;

pub use modal::*;
pub use purchase::*;
pub use payment_methods::*;
pub use request_form::*;
pub use review_form::*;
pub use login::*;
pub use admin_panel::*;
pub use style_editor::*;
