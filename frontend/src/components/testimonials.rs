//! Customer reviews with the average rating.

use leptos::*;
use storefront::{recent_reviews, AppConfig, ReviewSummary};
use crate::{ActiveModal, TESTIMONIALS_SHOWN};

#[component]
pub fn Testimonials(
    config: ReadSignal<AppConfig>,
    set_modal: WriteSignal<Option<ActiveModal>>,
) -> impl IntoView {
    let summary = move || config.with(|c| ReviewSummary::from_reviews(&c.reviews));

    view! {
        <section class="testimonials" id="reviews">
            <div class="section-header">
                <h2 class="section-title">"Customer Reviews"</h2>
                <span class="rating-summary">
                    {move || {
                        let s = summary();
                        format!("★ {} from {} reviews", s.display_average(), s.count)
                    }}
                </span>
                <button class="btn btn-secondary" on:click=move |_| set_modal.set(Some(ActiveModal::WriteReview))>
                    "Write a Review"
                </button>
            </div>
            <div class="review-grid">
                <For
                    each=move || config.with(|c| recent_reviews(c, TESTIMONIALS_SHOWN))
                    key=|review| review.id
                    children=move |review| {
                        let date = review.created_at.get(..10).unwrap_or_default().to_string();
                        view! {
                            <div class="review-card">
                                <div class="review-stars">{"★".repeat(usize::from(review.rating))}</div>
                                <p class="review-comment">{review.comment}</p>
                                <div class="review-meta">
                                    <strong>{review.name}</strong>
                                    " • " {review.product} " • " {date}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
