use dioxus::prelude::*;

use crate::{
    domain::{evaluate_ticket, AppState, TicketEvaluation, TicketOptions},
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
pub fn TicketPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut miles_price_input = use_signal(String::new);
    let mut cash_price_input = use_signal(String::new);
    let mut mixed_miles_input = use_signal(String::new);
    let mut mixed_cash_input = use_signal(String::new);
    let mut result = use_signal(|| None::<TicketEvaluation>);

    let on_evaluate = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let options = TicketOptions {
                miles_only_price: parse_amount(&miles_price_input()),
                cash_price: parse_amount(&cash_price_input()),
                mixed_miles: parse_amount(&mixed_miles_input()),
                mixed_cash: parse_amount(&mixed_cash_input()),
            };
            let valuation = state.with(|st| st.valuation);
            match evaluate_ticket(&options, &valuation) {
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
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Cash vs Miles Ticket" }
                p { class: "mt-2 text-sm text-slate-400", "Enter the booking options shown at checkout. Leave the mixed fields at 0 if no money-and-miles option exists." }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    Field {
                        label: "Miles-only price (miles)",
                        value: miles_price_input(),
                        placeholder: "e.g. 35,000",
                        oninput: move |evt: FormEvent| miles_price_input.set(evt.value()),
                    }
                    Field {
                        label: "Cash price ($)",
                        value: cash_price_input(),
                        placeholder: "e.g. 520",
                        oninput: move |evt: FormEvent| cash_price_input.set(evt.value()),
                    }
                    Field {
                        label: "Mixed option miles",
                        value: mixed_miles_input(),
                        placeholder: "e.g. 20,000",
                        oninput: move |evt: FormEvent| mixed_miles_input.set(evt.value()),
                    }
                    Field {
                        label: "Mixed option cash ($)",
                        value: mixed_cash_input(),
                        placeholder: "e.g. 150",
                        oninput: move |evt: FormEvent| mixed_cash_input.set(evt.value()),
                    }
                }
                button {
                    class: "mt-4 rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400",
                    onclick: on_evaluate,
                    "Compare"
                }
                HelpCallout {
                    text: "Each option is converted to an equivalent dollar cost using your valuation range, then the cheapest wins. The cents-per-mile figures show what each redemption actually buys you; anything above your valuation ceiling means cash is the better spend.",
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
