//! Admin panel: contact links, purchase links, requests, credentials and
//! the raw config document.
//!
//! Every save replaces the whole config through [`commit_config`].

use leptos::*;
use storefront::{
    admin, default_config, durations_for, override_key, AppConfig, LinkOverride,
    RequestStatus, PRODUCTS,
};
use crate::services::{browser_store, commit_config, push_toast};
use crate::{ActiveModal, Modal, Toast, ToastKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Contacts,
    Links,
    Requests,
    Security,
    Data,
}

impl AdminTab {
    const ALL: [AdminTab; 5] = [
        AdminTab::Contacts,
        AdminTab::Links,
        AdminTab::Requests,
        AdminTab::Security,
        AdminTab::Data,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Contacts => "Contacts",
            AdminTab::Links => "Purchase Links",
            AdminTab::Requests => "Requests",
            AdminTab::Security => "Security",
            AdminTab::Data => "Data",
        }
    }
}

#[component]
pub fn AdminPanel(
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_is_admin: WriteSignal<bool>,
    set_modal: WriteSignal<Option<ActiveModal>>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let (tab, set_tab) = create_signal(AdminTab::Contacts);

    let on_logout = move |_| {
        set_is_admin.set(false);
        set_modal.set(None);
        push_toast(set_toasts, ToastKind::Info, "Logged out");
    };

    view! {
        <Modal title="Admin Panel" set_modal=set_modal size="modal-xl">
            <div class="admin-tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="admin-tab"
                                class:active=move || tab.get() == t
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button class="admin-tab logout" on:click=on_logout>
                    <i class="fa-solid fa-right-from-bracket"></i> " Logout"
                </button>
            </div>

            <div class="admin-content">
                {move || match tab.get() {
                    AdminTab::Contacts => view! {
                        <ContactsTab config=config set_config=set_config set_toasts=set_toasts/>
                    }
                    .into_view(),
                    AdminTab::Links => view! {
                        <LinksTab config=config set_config=set_config set_toasts=set_toasts/>
                    }
                    .into_view(),
                    AdminTab::Requests => view! {
                        <RequestsTab config=config set_config=set_config set_toasts=set_toasts/>
                    }
                    .into_view(),
                    AdminTab::Security => view! {
                        <SecurityTab config=config set_config=set_config set_toasts=set_toasts/>
                    }
                    .into_view(),
                    AdminTab::Data => view! {
                        <DataTab config=config set_config=set_config set_toasts=set_toasts/>
                    }
                    .into_view(),
                }}
            </div>
        </Modal>
    }
}

// =============================================================================
// Contacts
// =============================================================================

#[component]
fn ContactsTab(
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let form = create_rw_signal(config.with_untracked(|c| c.contact_links()));

    let on_save = move |_| {
        let next = config.with_untracked(|c| admin::set_contact_links(c, form.get_untracked()));
        commit_config(set_config, next);
        push_toast(set_toasts, ToastKind::Success, "Contact links saved");
    };

    view! {
        <div class="form">
            <LabeledInput
                label="WhatsApp number"
                value=Signal::derive(move || form.with(|f| f.whatsapp_number.clone()))
                on_input=move |v: String| form.update(|f| f.whatsapp_number = v)
            />
            <LabeledInput
                label="Discord invite"
                value=Signal::derive(move || form.with(|f| f.discord_link.clone()))
                on_input=move |v: String| form.update(|f| f.discord_link = v)
            />
            <LabeledInput
                label="YouTube"
                value=Signal::derive(move || form.with(|f| f.youtube_link.clone()))
                on_input=move |v: String| form.update(|f| f.youtube_link = v)
            />
            <LabeledInput
                label="Facebook"
                value=Signal::derive(move || form.with(|f| f.facebook_link.clone()))
                on_input=move |v: String| form.update(|f| f.facebook_link = v)
            />
            <button class="btn btn-primary" on:click=on_save>"Save Contacts"</button>
        </div>
    }
}

// =============================================================================
// Purchase links
// =============================================================================

#[component]
fn LinksTab(
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let (product, set_product) = create_signal(PRODUCTS[0].to_string());
    let (duration, set_duration) =
        create_signal(durations_for(PRODUCTS[0]).first().copied().unwrap_or_default().to_string());
    let form = create_rw_signal(LinkOverride::default());

    // Keep the duration valid for the chosen product
    create_effect(move |_| {
        let durations = durations_for(&product.get());
        if !durations.contains(&duration.get_untracked().as_str()) {
            set_duration.set(durations.first().copied().unwrap_or_default().to_string());
        }
    });

    // Load the stored override whenever the key changes
    create_effect(move |_| {
        let key = override_key(&product.get(), &duration.get());
        let current = config.with_untracked(|c| c.overrides.get(&key).cloned().unwrap_or_default());
        form.set(current);
    });

    let on_save = move |_| {
        let (p, d) = (product.get_untracked(), duration.get_untracked());
        let next = config.with_untracked(|c| admin::set_link_override(c, &p, &d, form.get_untracked()));
        commit_config(set_config, next);
        push_toast(set_toasts, ToastKind::Success, format!("Links saved for {} / {}", p, d));
    };

    let on_clear = move |_| {
        let (p, d) = (product.get_untracked(), duration.get_untracked());
        let next = config.with_untracked(|c| admin::remove_link_override(c, &p, &d));
        commit_config(set_config, next);
        form.set(LinkOverride::default());
        push_toast(set_toasts, ToastKind::Info, format!("Links cleared for {} / {}", p, d));
    };

    view! {
        <div class="form">
            <div class="form-row">
                <select class="input" on:change=move |ev| set_product.set(event_target_value(&ev))>
                    {PRODUCTS
                        .iter()
                        .map(|p| {
                            let p = *p;
                            view! { <option value=p prop:selected=move || product.get() == p>{p}</option> }
                        })
                        .collect_view()}
                </select>
                <select class="input" on:change=move |ev| set_duration.set(event_target_value(&ev))>
                    {move || {
                        durations_for(&product.get())
                            .iter()
                            .map(|d| {
                                let d = *d;
                                view! { <option value=d prop:selected=move || duration.get() == d>{d}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <LinkField label="Crypto" form=form get=|l| &l.crypto set=|l, v| l.crypto = v/>
            <LinkField label="Fiat (generic)" form=form get=|l| &l.fiat set=|l, v| l.fiat = v/>
            <LinkField label="Fiat (worldwide)" form=form get=|l| &l.fiat_world set=|l, v| l.fiat_world = v/>
            <LinkField label="Fiat (regional)" form=form get=|l| &l.fiat_region set=|l, v| l.fiat_region = v/>
            <p class="form-hint">"Regional links fall back to the generic fiat link when left empty."</p>
            <div class="form-row">
                <button class="btn btn-primary" on:click=on_save>"Save Links"</button>
                <button class="btn btn-danger" on:click=on_clear>"Clear"</button>
            </div>
        </div>
    }
}

#[component]
fn LinkField(
    label: &'static str,
    form: RwSignal<LinkOverride>,
    get: fn(&LinkOverride) -> &Option<String>,
    set: fn(&mut LinkOverride, Option<String>),
) -> impl IntoView {
    view! {
        <LabeledInput
            label=label
            value=Signal::derive(move || form.with(|l| get(l).clone().unwrap_or_default()))
            on_input=move |v: String| {
                let value = if v.trim().is_empty() { None } else { Some(v) };
                form.update(|l| set(l, value));
            }
        />
    }
}

// =============================================================================
// Requests
// =============================================================================

#[component]
fn RequestsTab(
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let apply = move |result: Result<AppConfig, storefront::AdminError>, message: String| match result {
        Ok(next) => {
            commit_config(set_config, next);
            push_toast(set_toasts, ToastKind::Success, message);
        }
        Err(e) => push_toast(set_toasts, ToastKind::Error, e.to_string()),
    };

    view! {
        <Show
            when=move || config.with(|c| !c.requests.is_empty())
            fallback=|| view! { <p class="empty">"No config requests yet."</p> }
        >
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Discord"</th>
                        <th>"Order ID"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || config.with(|c| c.requests.clone())
                        key=|r| (r.id, r.status)
                        children=move |request| {
                            let id = request.id;
                            let pending = request.status == RequestStatus::Pending;
                            view! {
                                <tr>
                                    <td>{request.product}</td>
                                    <td>{request.discord}</td>
                                    <td>{request.order_id}</td>
                                    <td class=format!("status-{}", request.status.as_str())>
                                        {request.status.as_str()}
                                    </td>
                                    <td class="actions">
                                        <Show when=move || pending fallback=|| ()>
                                            <button
                                                class="btn btn-small"
                                                on:click=move |_| apply(
                                                    config.with_untracked(|c| {
                                                        admin::set_request_status(c, id, RequestStatus::Completed)
                                                    }),
                                                    format!("Request {} completed", id),
                                                )
                                            >
                                                "Complete"
                                            </button>
                                        </Show>
                                        <button
                                            class="btn btn-small btn-danger"
                                            on:click=move |_| apply(
                                                config.with_untracked(|c| admin::remove_request(c, id)),
                                                format!("Request {} removed", id),
                                            )
                                        >
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}

// =============================================================================
// Security
// =============================================================================

#[component]
fn SecurityTab(
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let (username, set_username) = create_signal(config.with_untracked(|c| c.admin_auth.username.clone()));
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());

    let on_save = move |_| {
        if password.get_untracked() != confirm.get_untracked() {
            push_toast(set_toasts, ToastKind::Error, "Passwords do not match");
            return;
        }

        let result = config.with_untracked(|c| {
            admin::change_credentials(c, &username.get_untracked(), &password.get_untracked())
        });
        match result {
            Ok(next) => {
                commit_config(set_config, next);
                set_password.set(String::new());
                set_confirm.set(String::new());
                push_toast(set_toasts, ToastKind::Success, "Admin credentials updated");
            }
            Err(e) => push_toast(set_toasts, ToastKind::Error, e.to_string()),
        }
    };

    view! {
        <div class="form">
            <p class="form-hint">
                "This login only hides the admin panel in this browser. "
                "Anyone who can read the stored config can bypass it."
            </p>
            <LabeledInput
                label="Username"
                value=Signal::derive(move || username.get())
                on_input=move |v: String| set_username.set(v)
            />
            <LabeledInput
                label="New password"
                input_type="password"
                value=Signal::derive(move || password.get())
                on_input=move |v: String| set_password.set(v)
            />
            <LabeledInput
                label="Confirm password"
                input_type="password"
                value=Signal::derive(move || confirm.get())
                on_input=move |v: String| set_confirm.set(v)
            />
            <button class="btn btn-primary" on:click=on_save>"Update Credentials"</button>
        </div>
    }
}

// =============================================================================
// Raw document
// =============================================================================

#[component]
fn DataTab(
    config: ReadSignal<AppConfig>,
    set_config: WriteSignal<AppConfig>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    let export = move || {
        config.with_untracked(|c| serde_json::to_string_pretty(c).unwrap_or_default())
    };
    let (raw, set_raw) = create_signal(export());

    let on_import = move |_| match serde_json::from_str::<AppConfig>(&raw.get_untracked()) {
        Ok(next) => {
            commit_config(set_config, next);
            push_toast(set_toasts, ToastKind::Success, "Config imported");
        }
        Err(e) => push_toast(set_toasts, ToastKind::Error, format!("Invalid config JSON: {}", e)),
    };

    let on_reset = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Reset the whole store config to defaults?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        if let Err(e) = browser_store().reset() {
            log::error!("Failed to clear stored config: {}", e);
        }
        set_config.set(default_config());
        set_raw.set(export());
        push_toast(set_toasts, ToastKind::Info, "Config reset to defaults");
    };

    view! {
        <div class="form">
            <textarea
                class="input code"
                rows="16"
                prop:value=move || raw.get()
                on:input=move |ev| set_raw.set(event_target_value(&ev))
            ></textarea>
            <div class="form-row">
                <button class="btn btn-secondary" on:click=move |_| set_raw.set(export())>"Refresh"</button>
                <button class="btn btn-primary" on:click=on_import>"Import"</button>
                <button class="btn btn-danger" on:click=on_reset>"Reset to Defaults"</button>
            </div>
        </div>
    }
}

// =============================================================================
// Shared
// =============================================================================

#[component]
fn LabeledInput(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                class="input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </label>
    }
}
