//! Hero section component

use leptos::*;
use crate::ActiveModal;

#[component]
pub fn Hero(set_modal: WriteSignal<Option<ActiveModal>>) -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Premium Tools, Delivered Instantly"</h1>
            <p class="subtitle">"Pick a product, choose how you pay, and get your key in minutes."</p>
            <div class="hero-actions">
                <button class="btn btn-primary" on:click=move |_| set_modal.set(Some(ActiveModal::PaymentMethods))>
                    "Payment Methods"
                </button>
                <button class="btn btn-secondary" on:click=move |_| set_modal.set(Some(ActiveModal::RequestConfig))>
                    "Request Config"
                </button>
            </div>
        </div>
    }
}
