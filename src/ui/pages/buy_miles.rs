use dioxus::prelude::*;

use crate::{
    domain::{evaluate_miles_purchase, AppState, MilesPurchaseEvaluation, MilesPurchaseOffer},
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
pub fn BuyMilesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut miles_input = use_signal(String::new);
    let mut bonus_input = use_signal(String::new);
    let mut price_input = use_signal(String::new);
    let mut result = use_signal(|| None::<MilesPurchaseEvaluation>);

    let on_evaluate = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let offer = MilesPurchaseOffer {
                miles: parse_amount(&miles_input()),
                bonus_miles: parse_amount(&bonus_input()),
                cash_price: parse_amount(&price_input()),
            };
            let valuation = state.with(|st| st.valuation);
            match evaluate_miles_purchase(&offer, &valuation) {
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
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Buy Miles Promotion" }
                p { class: "mt-2 text-sm text-slate-400", "Check whether a buy-miles sale (including any bonus miles) beats your valuation of a mile." }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    Field {
                        label: "Base miles",
                        value: miles_input(),
                        placeholder: "e.g. 50,000",
                        oninput: move |evt: FormEvent| miles_input.set(evt.value()),
                    }
                    Field {
                        label: "Bonus miles",
                        value: bonus_input(),
                        placeholder: "e.g. 25,000",
                        oninput: move |evt: FormEvent| bonus_input.set(evt.value()),
                    }
                    Field {
                        label: "Price ($)",
                        value: price_input(),
                        placeholder: "e.g. 1,250",
                        oninput: move |evt: FormEvent| price_input.set(evt.value()),
                    }
                }
                button {
                    class: "mt-4 rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400",
                    onclick: on_evaluate,
                    "Evaluate"
                }
                HelpCallout {
                    text: "Bonus miles count toward the total, so a 100% bonus halves the effective price per mile. Buying is only interesting when the cents-per-mile cost lands below what you reliably get back when redeeming.",
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
                    if let Some(advice) = evaluation.advice {
                        p { class: "mt-3 rounded-lg border border-sky-500/40 bg-sky-500/10 px-4 py-2 text-xs text-sky-100", "{advice}" }
                    }
                }
            }
        }
    }
}
