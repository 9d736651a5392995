//! Transient notifications shown in the corner of the page.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Toast, ToastKind, MAX_TOASTS, TOAST_TIMEOUT_MS};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Show a toast and schedule its removal.
pub fn push_toast(set_toasts: WriteSignal<Vec<Toast>>, kind: ToastKind, message: impl Into<String>) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    let message = message.into();

    match kind {
        ToastKind::Error => log::warn!("{}", message),
        _ => log::info!("{}", message),
    }

    set_toasts.update(|toasts| {
        toasts.push(Toast { id, kind, message });
        if toasts.len() > MAX_TOASTS {
            toasts.remove(0);
        }
    });

    Timeout::new(TOAST_TIMEOUT_MS, move || dismiss_toast(set_toasts, id)).forget();
}

pub fn dismiss_toast(set_toasts: WriteSignal<Vec<Toast>>, id: u64) {
    set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
}
