//! Admin editor for a product card's background, icon and gradient.

use leptos::*;
use storefront::{admin, AppConfig, ProductStyle, GRADIENT_PRESETS};
use crate::services::{commit_config, push_toast};
use crate::{ActiveModal, Modal, Toast, ToastKind};

#[component]
pub fn StyleEditorModal(
    product: String,
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_modal: WriteSignal<Option<ActiveModal>>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let current = config.with_untracked(|c| c.style_for(&product).cloned().unwrap_or_default());
    let form = create_rw_signal(current);
    let product = store_value(product);

    let on_save = move |_| {
        let name = product.get_value();
        let next = config.with_untracked(|c| admin::set_product_style(c, &name, form.get_untracked()));
        commit_config(set_config, next);
        set_modal.set(None);
        push_toast(set_toasts, ToastKind::Success, format!("Style updated for {}", name));
    };

    let on_reset = move |_| {
        let name = product.get_value();
        let next = config.with_untracked(|c| admin::reset_product_style(c, &name));
        commit_config(set_config, next);
        set_modal.set(None);
        push_toast(set_toasts, ToastKind::Info, format!("Style reset for {}", name));
    };

    view! {
        <Modal title=format!("Edit Style: {}", product.get_value()) set_modal=set_modal size="modal-xs">
            <div class="form">
                <input
                    class="input"
                    placeholder="Background Image URL"
                    prop:value=text_field(form, |f| f.bg_url.as_deref())
                    on:input=move |ev| form.update(|f| f.bg_url = Some(event_target_value(&ev)))
                />
                <input
                    class="input"
                    placeholder="Icon URL"
                    prop:value=text_field(form, |f| f.icon_url.as_deref())
                    on:input=move |ev| form.update(|f| f.icon_url = Some(event_target_value(&ev)))
                />
                <select
                    class="input"
                    on:change=move |ev| form.update(|f| f.gradient = Some(event_target_value(&ev)))
                >
                    <option value="" prop:selected=move || form.with(|f| f.gradient.as_deref().unwrap_or_default().is_empty())>
                        "Default Gradient"
                    </option>
                    {GRADIENT_PRESETS
                        .iter()
                        .map(|(label, classes)| {
                            let classes = *classes;
                            view! {
                                <option
                                    value=classes
                                    prop:selected=move || form.with(|f| f.gradient.as_deref() == Some(classes))
                                >
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="btn btn-primary btn-block" on:click=on_save>"Save"</button>
                <button class="btn btn-danger btn-block" on:click=on_reset>"Reset to Default"</button>
            </div>
        </Modal>
    }
}

fn text_field(form: RwSignal<ProductStyle>, get: fn(&ProductStyle) -> Option<&str>) -> impl Fn() -> String {
    move || form.with(|f| get(f).unwrap_or_default().to_string())
}
