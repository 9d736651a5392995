//! Review form with a clickable star rating.

use leptos::*;
use storefront::{forms::MAX_RATING, submit_review, AppConfig, ReviewDraft, PRODUCTS};
use crate::services::{commit_config, push_toast};
use crate::{ActiveModal, Modal, Toast, ToastKind};

#[component]
pub fn ReviewModal(
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_modal: WriteSignal<Option<ActiveModal>>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let draft = create_rw_signal(ReviewDraft::default());
    let (hover, set_hover) = create_signal(0u8);

    // Hovered star wins over the chosen one while the pointer is on the row
    let shown_rating = move || {
        let h = hover.get();
        if h > 0 { h } else { draft.with(|d| d.rating) }
    };

    let on_submit = move |_| {
        let current = config.get_untracked();
        match submit_review(&current, &draft.get_untracked(), chrono::Utc::now()) {
            Ok(next) => {
                commit_config(set_config, next);
                set_modal.set(None);
                push_toast(set_toasts, ToastKind::Success, "Review submitted successfully!");
            }
            Err(e) => push_toast(set_toasts, ToastKind::Error, e.to_string()),
        }
    };

    view! {
        <Modal title="Write Review" set_modal=set_modal size="modal-sm">
            <div class="form">
                <input
                    class="input"
                    placeholder="Your Name (e.g. JohnDota)"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
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

                <div class="star-picker">
                    <span class="star-hint">"Click to rate:"</span>
                    <div class="stars" on:mouseleave=move |_| set_hover.set(0)>
                        {(1..=MAX_RATING)
                            .map(|star| {
                                view! {
                                    <button
                                        type="button"
                                        class="star"
                                        class:lit={move || shown_rating() >= star}
                                        on:click=move |_| draft.update(|d| d.rating = star)
                                        on:mouseenter=move |_| set_hover.set(star)
                                    >
                                        "★"
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <span class="star-label">
                        {move || match shown_rating() {
                            0 => String::new(),
                            n => format!("{} Stars", n),
                        }}
                    </span>
                </div>

                <textarea
                    class="input"
                    rows="3"
                    placeholder="Share your experience..."
                    prop:value=move || draft.with(|d| d.comment.clone())
                    on:input=move |ev| draft.update(|d| d.comment = event_target_value(&ev))
                ></textarea>

                <button class="btn btn-primary btn-block" on:click=on_submit>"Submit Review"</button>
            </div>
        </Modal>
    }
}
