//! Config request form.

use leptos::*;
use storefront::{submit_request, AppConfig, RequestDraft, PRODUCTS};
use crate::services::{commit_config, push_toast};
use crate::{ActiveModal, Modal, Toast, ToastKind};

#[component]
pub fn RequestConfigModal(
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_modal: WriteSignal<Option<ActiveModal>>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let draft = create_rw_signal(RequestDraft::default());

    let on_submit = move |_| {
        let current = config.get_untracked();
        match submit_request(&current, &draft.get_untracked(), chrono::Utc::now()) {
            Ok(next) => {
                commit_config(set_config, next);
                set_modal.set(None);
                push_toast(set_toasts, ToastKind::Success, "Config Request Sent! We will contact you shortly.");
            }
            Err(e) => push_toast(set_toasts, ToastKind::Error, e.to_string()),
        }
    };

    view! {
        <Modal title="Request Config" set_modal=set_modal size="modal-sm">
            <div class="form">
                <select
                    class="input"
                    on:change=move |ev| draft.update(|d| d.product = event_target_value(&ev))
                >
                    {PRODUCTS
                        .iter()
                        .map(|p| {
                            let p = *p;
                            view! {
                                <option value=p prop:selected=move || draft.with(|d| d.product == p)>{p}</option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    class="input"
                    placeholder="Discord ID"
                    prop:value=move || draft.with(|d| d.discord.clone())
                    on:input=move |ev| draft.update(|d| d.discord = event_target_value(&ev))
                />
                <input
                    class="input"
                    placeholder="Order ID"
                    prop:value=move || draft.with(|d| d.order_id.clone())
                    on:input=move |ev| draft.update(|d| d.order_id = event_target_value(&ev))
                />
                <button class="btn btn-primary btn-block" on:click=on_submit>"Submit"</button>
            </div>
        </Modal>
    }
}
