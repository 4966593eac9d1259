use dioxus::prelude::*;

use crate::{
    domain::{evaluate_upgrade, AppState, CabinClass, UpgradeEvaluation, UpgradeOffer, UpgradeRules},
    ui::components::{
        field::Field,
        help_callout::HelpCallout,
        result_table::ResultTable,
        toast::{push_toast, ToastKind, ToastMessage},
        verdict_badge::VerdictBadge,
    },
    util::parse::parse_amount,
};

#[component]
pub fn UpgradePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut miles_input = use_signal(String::new);
    let mut copay_input = use_signal(String::new);
    let mut cash_only_input = use_signal(String::new);
    let mut full_fare_input = use_signal(String::new);
    let mut hours_input = use_signal(String::new);
    let mut from_cabin = use_signal(|| CabinClass::Economy);
    let mut to_cabin = use_signal(|| CabinClass::Business);
    let mut result = use_signal(|| None::<UpgradeEvaluation>);

    let on_evaluate = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let offer = UpgradeOffer {
                miles: parse_amount(&miles_input()),
                cash_copay: parse_amount(&copay_input()),
                cash_only_upgrade: parse_amount(&cash_only_input()),
                full_fare_cost: parse_amount(&full_fare_input()),
                flight_hours: parse_amount(&hours_input()),
                from_cabin: from_cabin(),
                to_cabin: to_cabin(),
            };
            let valuation = state.with(|st| st.valuation);
            match evaluate_upgrade(&offer, &valuation, &UpgradeRules::default()) {
                Ok(evaluation) => result.set(Some(evaluation)),
                Err(err) => {
                    result.set(None);
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Cabin Upgrade Offer" }
                p { class: "mt-2 text-sm text-slate-400", "Compare miles-plus-copay against a straight cash upgrade and against just buying the higher fare." }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    CabinSelect {
                        label: "From cabin",
                        selected: from_cabin(),
                        onselect: move |cabin| from_cabin.set(cabin),
                    }
                    CabinSelect {
                        label: "To cabin",
                        selected: to_cabin(),
                        onselect: move |cabin| to_cabin.set(cabin),
                    }
                    Field {
                        label: "Miles required",
                        value: miles_input(),
                        placeholder: "e.g. 30,000",
                        oninput: move |evt: FormEvent| miles_input.set(evt.value()),
                    }
                    Field {
                        label: "Cash copay ($)",
                        value: copay_input(),
                        placeholder: "e.g. 250",
                        oninput: move |evt: FormEvent| copay_input.set(evt.value()),
                    }
                    Field {
                        label: "Cash-only upgrade price ($)",
                        value: cash_only_input(),
                        placeholder: "e.g. 800",
                        oninput: move |evt: FormEvent| cash_only_input.set(evt.value()),
                    }
                    Field {
                        label: "Full fare in target cabin ($)",
                        value: full_fare_input(),
                        placeholder: "leave 0 if unknown",
                        oninput: move |evt: FormEvent| full_fare_input.set(evt.value()),
                    }
                    Field {
                        label: "Flight time (hours)",
                        value: hours_input(),
                        placeholder: "e.g. 10.5",
                        oninput: move |evt: FormEvent| hours_input.set(evt.value()),
                    }
                }
                button {
                    class: "mt-4 rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400",
                    onclick: on_evaluate,
                    "Evaluate"
                }
                HelpCallout {
                    text: "The comparison weights the cabin jump (a bigger jump is worth more per dollar) and the flight length (longer flights make comfort count). If the full fare is unknown the tool estimates one from the cash-only price so the comparison still works.",
                }
            }

            if let Some(evaluation) = result() {
                section {
                    class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                    div { class: "flex items-center justify-between",
                        h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Result" }
                        VerdictBadge { verdict: evaluation.verdict }
                    }
                    p { class: "mt-3 text-sm text-slate-300", "{evaluation.summary}" }
                    div { class: "mt-4",
                        ResultTable { rows: evaluation.lines() }
                    }
                    if let Some(warning) = evaluation.warning {
                        p { class: "mt-3 rounded-lg border border-amber-500/40 bg-amber-500/10 px-4 py-2 text-xs text-amber-100", "⚠️ {warning}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CabinSelect(
    label: &'static str,
    selected: CabinClass,
    onselect: EventHandler<CabinClass>,
) -> Element {
    rsx! {
        div {
            label { class: "block text-xs font-semibold uppercase text-slate-500", "{label}" }
            select {
                class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                value: selected.label(),
                onchange: move |evt| {
                    if let Some(cabin) = CabinClass::from_label(&evt.value()) {
                        onselect.call(cabin);
                    }
                },
                for cabin in CabinClass::ALL {
                    option {
                        value: cabin.label(),
                        selected: cabin == selected,
                        "{cabin.label()}"
                    }
                }
            }
        }
    }
}
