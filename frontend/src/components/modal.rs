//! Shared dialog frame: backdrop, title bar and close button.

use leptos::*;
use crate::ActiveModal;

#[component]
pub fn Modal(
    /// Dialog title
    #[prop(into)]
    title: String,
    /// Closing sets this to `None`
    set_modal: WriteSignal<Option<ActiveModal>>,
    /// Extra class for the card (width variants)
    #[prop(optional, into)]
    size: String,
    children: Children,
) -> impl IntoView {
    let close = move |_| set_modal.set(None);

    view! {
        <div class="modal-root">
            <div class="modal-backdrop" on:click=close></div>
            <div class=format!("modal-card {}", size)>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" on:click=close>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
