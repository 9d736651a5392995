//! Accepted payment methods, one accordion section per category.

use leptos::*;
use storefront::PAYMENT_METHODS;
use crate::{ActiveModal, Modal};

#[component]
pub fn PaymentMethodsModal(set_modal: WriteSignal<Option<ActiveModal>>) -> impl IntoView {
    // Collapsed again whenever the dialog is reopened
    let (expanded, set_expanded) = create_signal(None::<&'static str>);

    view! {
        <Modal title="Payment Methods" set_modal=set_modal size="modal-lg">
            <div class="accordion">
                {PAYMENT_METHODS
                    .iter()
                    .map(|group| {
                        let category = group.category;
                        let is_expanded = move || expanded.get() == Some(category);
                        let toggle = move |_| {
                            if expanded.get() == Some(category) {
                                set_expanded.set(None);
                            } else {
                                set_expanded.set(Some(category));
                            }
                        };

                        view! {
                            <div class="accordion-item" class:expanded=is_expanded>
                                <button class="accordion-header" on:click=toggle>
                                    <i class=format!("fa-solid {}", group.icon)></i>
                                    <span>{category}</span>
                                    <i class="fa-solid fa-chevron-down accordion-chevron"></i>
                                </button>
                                <Show when=is_expanded fallback=|| ()>
                                    <div class="method-grid">
                                        {group
                                            .methods
                                            .iter()
                                            .map(|method| view! { <div class="method-chip">{*method}</div> })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="modal-note">"Supported payment methods may vary by region."</p>
        </Modal>
    }
}
