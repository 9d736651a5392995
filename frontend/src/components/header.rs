use leptos::*;
use storefront::AppConfig;
use crate::{ActiveModal, STORE_NAME};

#[component]
pub fn Header(
    config: ReadSignal<AppConfig>,
    is_admin: ReadSignal<bool>,
    set_modal: WriteSignal<Option<ActiveModal>>,
) -> impl IntoView {
    // Logged-in admins go straight to the panel
    let on_admin_click = move |_| {
        if is_admin.get() {
            set_modal.set(Some(ActiveModal::AdminPanel));
        } else {
            set_modal.set(Some(ActiveModal::Login));
        }
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{STORE_NAME}</a>
            </div>
            <nav class="header-right">
                <button class="nav-link" on:click=move |_| set_modal.set(Some(ActiveModal::PaymentMethods))>
                    "Payment Methods"
                </button>
                <button class="nav-link" on:click=move |_| set_modal.set(Some(ActiveModal::RequestConfig))>
                    "Request Config"
                </button>
                <a
                    class="nav-link"
                    href=move || config.with(|c| c.whatsapp_url())
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <i class="fa-brands fa-whatsapp"></i> " Support"
                </a>
                <a
                    class="nav-link"
                    href=move || config.with(|c| c.discord_link.clone())
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <i class="fa-brands fa-discord"></i> " Discord"
                </a>
                <button
                    class="admin-trigger"
                    class:active=move || is_admin.get()
                    title="Admin"
                    on:click=on_admin_click
                >
                    <i class="fa-solid fa-user-shield"></i>
                </button>
            </nav>
        </header>
    }
}
