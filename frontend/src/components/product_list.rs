//! Product cards with per-product style overrides.

use leptos::*;
use storefront::{durations_for, AppConfig, ProductStyle, PRODUCTS};
use crate::ActiveModal;

/// Gradient used when a product has no override.
const DEFAULT_GRADIENT: &str = "bg-gradient-to-r from-slate-700 to-slate-900";

#[component]
pub fn ProductList(
    config: ReadSignal<AppConfig>,
    is_admin: ReadSignal<bool>,
    set_modal: WriteSignal<Option<ActiveModal>>,
) -> impl IntoView {
    view! {
        <section class="products" id="products">
            <h2 class="section-title">"Products"</h2>
            <div class="product-grid">
                {PRODUCTS
                    .iter()
                    .map(|product| {
                        view! {
                            <ProductCard
                                product=*product
                                config=config
                                is_admin=is_admin
                                set_modal=set_modal
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(
    product: &'static str,
    config: ReadSignal<AppConfig>,
    is_admin: ReadSignal<bool>,
    set_modal: WriteSignal<Option<ActiveModal>>,
) -> impl IntoView {
    let style = move || {
        config.with(|c| c.style_for(product).cloned().unwrap_or_default())
    };

    let banner_class = move || {
        let gradient = style().gradient.unwrap_or_else(|| DEFAULT_GRADIENT.to_string());
        format!("product-banner {}", gradient)
    };

    let banner_style = move || match style().bg_url {
        Some(url) => format!("background-image: url('{}'); background-size: cover;", url),
        None => String::new(),
    };

    let durations = durations_for(product);
    let duration_hint = match (durations.first(), durations.last()) {
        (Some(first), Some(last)) => format!("{} options • {} to {}", durations.len(), first, last),
        _ => String::new(),
    };

    view! {
        <div class="product-card">
            <div class=banner_class style=banner_style>
                {move || match style() {
                    ProductStyle { icon_url: Some(url), .. } => {
                        view! { <img class="product-icon" src=url alt=product/> }.into_view()
                    }
                    _ => view! { <i class="fa-solid fa-gamepad product-icon"></i> }.into_view(),
                }}
            </div>
            <div class="product-info">
                <h3 class="product-name">{product}</h3>
                <p class="product-durations">{duration_hint}</p>
                <button
                    class="btn btn-primary"
                    on:click=move |_| set_modal.set(Some(ActiveModal::Purchase(product.to_string())))
                >
                    "Buy Now"
                </button>
                <Show when=move || is_admin.get() fallback=|| ()>
                    <button
                        class="btn btn-ghost"
                        on:click=move |_| set_modal.set(Some(ActiveModal::StyleEditor(product.to_string())))
                    >
                        <i class="fa-solid fa-palette"></i> " Edit Style"
                    </button>
                </Show>
            </div>
        </div>
    }
}
