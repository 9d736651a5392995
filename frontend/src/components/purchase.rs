//! Purchase dialog: pick a duration, then a payment route.
//!
//! Links come from the override table. A missing link renders as a
//! disabled button rather than hiding the option.

use leptos::*;
use storefront::{purchase_options, AppConfig, PaymentLink};
use crate::{ActiveModal, Modal};

#[component]
pub fn PurchaseModal(
    product: String,
    config: ReadSignal<AppConfig>,
    set_modal: WriteSignal<Option<ActiveModal>>,
) -> impl IntoView {
    let options = {
        let product = product.clone();
        move || config.with(|c| purchase_options(c, &product))
    };

    let first_duration = options()
        .first()
        .map(|o| o.duration.clone())
        .unwrap_or_default();
    let (selected, set_selected) = create_signal(first_duration);

    let options_for_links = options.clone();
    let selected_links = move || {
        let duration = selected.get();
        options_for_links()
            .into_iter()
            .find(|o| o.duration == duration)
            .map(|o| o.links)
            .unwrap_or_default()
    };

    view! {
        <Modal title=format!("Buy {}", product) set_modal=set_modal size="modal-md">
            <p class="modal-label">"1. Choose duration"</p>
            <div class="duration-grid">
                {move || {
                    options()
                        .into_iter()
                        .map(|option| {
                            let duration = option.duration.clone();
                            let is_selected = {
                                let duration = duration.clone();
                                move || selected.get() == duration
                            };
                            let on_select = {
                                let duration = duration.clone();
                                move |_| set_selected.set(duration.clone())
                            };
                            view! {
                                <button
                                    class="duration-option"
                                    class:selected=is_selected
                                    class:unavailable=!option.is_purchasable()
                                    on:click=on_select
                                >
                                    {duration}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <p class="modal-label">"2. Choose payment"</p>
            <div class="payment-links">
                {move || {
                    selected_links()
                        .into_iter()
                        .map(|link| view! { <PaymentButton link=link/> })
                        .collect_view()
                }}
            </div>

            <p class="modal-note">
                "Purchases complete on a third-party checkout. Keys are delivered to the email you use there."
            </p>
        </Modal>
    }
}

#[component]
fn PaymentButton(link: PaymentLink) -> impl IntoView {
    let label = link.category.label();

    match link.url {
        Some(url) => view! {
            <a class="btn btn-primary payment-link" href=url target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
        .into_view(),
        None => view! {
            <button class="btn payment-link" disabled=true title="No purchase link configured">
                {label} " (unavailable)"
            </button>
        }
        .into_view(),
    }
}
