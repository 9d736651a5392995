//! Admin login dialog.
//!
//! Client-side gate for the admin panel only; see `storefront::auth`.

use leptos::*;
use storefront::{authenticate, AppConfig};
use crate::services::push_toast;
use crate::{ActiveModal, Modal, Toast, ToastKind};

#[component]
pub fn LoginModal(
    config: ReadSignal<AppConfig>,
    set_is_admin: WriteSignal<bool>,
    set_modal: WriteSignal<Option<ActiveModal>>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_login = move |_| {
        let accepted = config.with_untracked(|c| {
            authenticate(&c.admin_auth, &username.get_untracked(), &password.get_untracked())
        });

        if accepted {
            set_is_admin.set(true);
            set_password.set(String::new());
            set_modal.set(Some(ActiveModal::AdminPanel));
            push_toast(set_toasts, ToastKind::Success, "Welcome back, Admin!");
        } else {
            push_toast(set_toasts, ToastKind::Error, "Invalid credentials");
        }
    };

    view! {
        <Modal title="Admin Login" set_modal=set_modal size="modal-xs">
            <div class="form">
                <input
                    class="input"
                    placeholder="ID"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button class="btn btn-primary btn-block" on:click=on_login>"Login"</button>
            </div>
        </Modal>
    }
}
