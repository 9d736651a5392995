//! Storefront - Frontend Rust/Leptos Application
//!
//! A WebAssembly storefront: product cards, purchase links, reviews,
//! config requests and a browser-local admin panel. All store content is
//! one [`storefront::AppConfig`] kept in `localStorage`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (contacts, admin entry)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero                                                    │
//! │  ├── ProductList                                             │
//! │  ├── Testimonials                                            │
//! │  └── active modal (purchase, forms, login, admin)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer · ToastStack                                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Toast, ActiveModal)
//! - [`components`] - UI components
//! - [`services`] - Browser storage and notifications

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use storefront::AppConfig;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Notifications
    Toast, ToastKind,
    // Dialogs
    ActiveModal,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🛒 {} - Starting Leptos App", STORE_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=STORE_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (config, set_config) = create_signal::<AppConfig>(browser_store().load());
    let (is_admin, set_is_admin) = create_signal(false);
    let (modal, set_modal) = create_signal(None::<ActiveModal>);
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());

    create_effect(move |_| match modal.get() {
        Some(m) => log::debug!("Modal opened: {}", m),
        None => log::debug!("Modal closed"),
    });

    // Admin-only dialogs fall back to the login form when not logged in
    let active_modal = move || match modal.get() {
        None => ().into_view(),
        Some(ActiveModal::Purchase(product)) => view! {
            <PurchaseModal product=product config=config set_modal=set_modal/>
        }
        .into_view(),
        Some(ActiveModal::PaymentMethods) => view! {
            <PaymentMethodsModal set_modal=set_modal/>
        }
        .into_view(),
        Some(ActiveModal::RequestConfig) => view! {
            <RequestConfigModal
                config=config
                set_config=set_config
                set_modal=set_modal
                set_toasts=set_toasts
            />
        }
        .into_view(),
        Some(ActiveModal::WriteReview) => view! {
            <ReviewModal
                config=config
                set_config=set_config
                set_modal=set_modal
                set_toasts=set_toasts
            />
        }
        .into_view(),
        Some(ActiveModal::AdminPanel) if is_admin.get() => view! {
            <AdminPanel
                config=config
                set_config=set_config
                set_is_admin=set_is_admin
                set_modal=set_modal
                set_toasts=set_toasts
            />
        }
        .into_view(),
        Some(ActiveModal::StyleEditor(product)) if is_admin.get() => view! {
            <StyleEditorModal
                product=product
                config=config
                set_config=set_config
                set_modal=set_modal
                set_toasts=set_toasts
            />
        }
        .into_view(),
        Some(ActiveModal::Login | ActiveModal::AdminPanel | ActiveModal::StyleEditor(_)) => view! {
            <LoginModal
                config=config
                set_is_admin=set_is_admin
                set_modal=set_modal
                set_toasts=set_toasts
            />
        }
        .into_view(),
    };

    view! {
        <Header config=config is_admin=is_admin set_modal=set_modal/>

        <div class="container">
            <Hero set_modal=set_modal/>
            <ProductList config=config is_admin=is_admin set_modal=set_modal/>
            <Testimonials config=config set_modal=set_modal/>
        </div>

        {active_modal}

        <Footer config=config/>
        <ToastStack toasts=toasts set_toasts=set_toasts/>
    }
}
