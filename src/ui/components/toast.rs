use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);
const TOAST_LIMIT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn theme(self) -> &'static str {
        match self {
            ToastKind::Info => "border-sky-500/40 bg-sky-500/10 text-sky-100",
            ToastKind::Success => "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
            ToastKind::Warning => "border-amber-500/40 bg-amber-500/10 text-amber-100",
            ToastKind::Error => "border-rose-500/40 bg-rose-500/10 text-rose-100",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

/// Appends a toast, evicting the oldest once the stack is full.
pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let entry = ToastMessage {
        id: generate_id("toast"),
        kind,
        text: message.into(),
    };
    toasts.with_mut(|entries| {
        if entries.len() >= TOAST_LIMIT {
            entries.remove(0);
        }
        entries.push(entry);
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for entry in entries {
                    ToastCard { entry, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(entry: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toasts_for_timer = toasts.clone();
    let toast_id = entry.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts_for_timer.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {}",
        entry.kind.theme()
    );
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{entry.kind.icon()}" }
            p { class: "text-sm font-medium", "{entry.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = entry.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}
