use dioxus::prelude::*;

use crate::{
    domain::{evaluate_accelerator, AcceleratorEvaluation, AcceleratorOffer, AppState},
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
pub fn AcceleratorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut miles_input = use_signal(String::new);
    let mut pqp_input = use_signal(String::new);
    let mut cost_input = use_signal(String::new);
    let mut result = use_signal(|| None::<AcceleratorEvaluation>);

    let on_evaluate = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let offer = AcceleratorOffer {
                miles: parse_amount(&miles_input()),
                pqp: parse_amount(&pqp_input()),
                cost: parse_amount(&cost_input()),
            };
            let valuation = state.with(|st| st.valuation);
            match evaluate_accelerator(&offer, &valuation) {
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
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Award Accelerator Offer" }
                p { class: "mt-2 text-sm text-slate-400", "Paste the numbers from the accelerator email to see whether the bundle beats buying miles outright." }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    Field {
                        label: "Miles offered",
                        value: miles_input(),
                        placeholder: "e.g. 25,000",
                        oninput: move |evt: FormEvent| miles_input.set(evt.value()),
                    }
                    Field {
                        label: "PQP included (0 if none)",
                        value: pqp_input(),
                        placeholder: "e.g. 500",
                        oninput: move |evt: FormEvent| pqp_input.set(evt.value()),
                    }
                    Field {
                        label: "Offer cost ($)",
                        value: cost_input(),
                        placeholder: "e.g. 450",
                        oninput: move |evt: FormEvent| cost_input.set(evt.value()),
                    }
                }
                button {
                    class: "mt-4 rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400",
                    onclick: on_evaluate,
                    "Evaluate"
                }
                HelpCallout {
                    text: "Accelerators bundle redeemable miles with Premier qualifying points (PQP). The miles are valued at your configured cents-per-mile range; any PQP in the bundle is priced by what each point effectively costs after the miles are credited.",
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
                    if let Some(insight) = evaluation.insight {
                        p { class: "mt-3 rounded-lg border border-amber-500/40 bg-amber-500/10 px-4 py-2 text-xs text-amber-100", "{insight}" }
                    }
                }
            }
        }
    }
}
