use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, MileValuation},
    ui::components::{
        field::Field,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    util::version::{check_for_update, version_label, APP_NAME, APP_REPO_URL},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.valuation);
    let mut low_input = use_signal(|| format!("{:.3}", initial.low));
    let mut high_input = use_signal(|| format!("{:.3}", initial.high));
    let mut update_status = use_signal(|| None::<String>);

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            match parse_valuation(low_input(), high_input()) {
                Ok(valuation) => {
                    state.with_mut(|st| st.valuation = valuation);
                    persist_user_state(&state);
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        "Updated mile valuation.",
                    );
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = MileValuation::default();
            low_input.set(format!("{:.3}", defaults.low));
            high_input.set(format!("{:.3}", defaults.high));
            state.with_mut(|st| st.valuation = defaults);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Restored the default mile valuation.",
            );
        }
    };

    let on_check_update = {
        let toasts = toasts.clone();
        move |_| {
            let toasts = toasts.clone();
            update_status.set(Some("Checking...".to_string()));
            spawn(async move {
                match check_for_update().await {
                    Ok(info) => update_status.set(Some(info.to_string())),
                    Err(err) => {
                        update_status.set(None);
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Update check failed: {err}"),
                        );
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Mile Valuation" }
                p { class: "mt-2 text-sm text-slate-400", "Every calculator converts miles to dollars with this range. Values are dollars per mile, so 0.012 means 1.2 cents." }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    Field {
                        label: "Low estimate ($/mile)",
                        value: low_input(),
                        oninput: move |evt: FormEvent| low_input.set(evt.value()),
                    }
                    Field {
                        label: "High estimate ($/mile)",
                        value: high_input(),
                        oninput: move |evt: FormEvent| high_input.set(evt.value()),
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400", onclick: on_apply, "Apply" }
                    button { class: "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800", onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-center text-slate-400",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p { class: "mt-3 text-sm", "{APP_NAME} {version_label()}" }
                p { class: "mt-1 text-xs text-slate-500",
                    a {
                        href: APP_REPO_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        class: "hover:text-slate-200",
                        "{APP_REPO_URL}"
                    }
                }
                button {
                    class: "mt-4 rounded-lg border border-indigo-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-indigo-200 hover:bg-indigo-500/10",
                    onclick: on_check_update,
                    "Check for Updates"
                }
                if let Some(status) = update_status() {
                    p { class: "mt-3 text-sm text-slate-300", "{status}" }
                }
            }
        }
    }
}

fn parse_valuation(low: String, high: String) -> Result<MileValuation, String> {
    let low: f64 = low
        .trim()
        .parse()
        .map_err(|_| "Low estimate must be numeric")?;
    let high: f64 = high
        .trim()
        .parse()
        .map_err(|_| "High estimate must be numeric")?;

    let valuation = MileValuation { low, high };
    if !valuation.is_valid() {
        return Err("Valuation must be positive with low ≤ high".to_string());
    }
    Ok(valuation)
}
