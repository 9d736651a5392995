//! Footer component

use leptos::*;
use storefront::AppConfig;
use crate::STORE_NAME;

#[component]
pub fn Footer(config: ReadSignal<AppConfig>) -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2026 " {STORE_NAME}</div>
            <div class="footer-links">
                <a href=move || config.with(|c| c.discord_link.clone()) class="footer-link" target="_blank">
                    "Discord"
                </a>
                <a href=move || config.with(|c| c.youtube_link.clone()) class="footer-link" target="_blank">
                    "YouTube"
                </a>
                <a href=move || config.with(|c| c.facebook_link.clone()) class="footer-link" target="_blank">
                    "Facebook"
                </a>
            </div>
        </footer>
    }
}
