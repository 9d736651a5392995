//! Toast stack pinned to the bottom-right corner.

use leptos::*;
use crate::services::dismiss_toast;
use crate::Toast;

#[component]
pub fn ToastStack(
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_class())>
                            <i class=format!("fa-solid {}", toast.kind.icon())></i>
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" on:click=move |_| dismiss_toast(set_toasts, id)>
                                <i class="fa-solid fa-xmark"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
