use dioxus::prelude::*;

use crate::{
    domain::{status_progress, EliteProgress, StatusProgress, DEFAULT_TIERS},
    ui::components::{
        field::Field, help_callout::HelpCallout, kpi_card::KpiCard, result_table::ResultTable,
    },
    util::parse::parse_amount,
};

#[component]
pub fn StatusPage() -> Element {
    let mut pqp_input = use_signal(String::new);
    let mut pqf_input = use_signal(String::new);
    let mut purchase_input = use_signal(String::new);
    let mut result = use_signal(|| None::<StatusProgress>);

    let on_calculate = move |_| {
        let progress = EliteProgress {
            current_pqp: parse_amount(&pqp_input()),
            current_pqf: parse_amount(&pqf_input()),
            purchase_pqp: parse_amount(&purchase_input()),
        };
        result.set(Some(status_progress(&DEFAULT_TIERS, &progress)));
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Elite Status Progress" }
                p { class: "mt-2 text-sm text-slate-400", "Enter your year-to-date qualifying points and flights. Optionally add the PQP from a purchase you are considering." }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    Field {
                        label: "Current PQP",
                        value: pqp_input(),
                        placeholder: "e.g. 3,500",
                        oninput: move |evt: FormEvent| pqp_input.set(evt.value()),
                    }
                    Field {
                        label: "Current PQF",
                        value: pqf_input(),
                        placeholder: "e.g. 18",
                        oninput: move |evt: FormEvent| pqf_input.set(evt.value()),
                    }
                    Field {
                        label: "PQP from planned purchase",
                        value: purchase_input(),
                        placeholder: "0 if none",
                        oninput: move |evt: FormEvent| purchase_input.set(evt.value()),
                    }
                }
                button {
                    class: "mt-4 rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400",
                    onclick: on_calculate,
                    "Calculate"
                }
                HelpCallout {
                    text: "A tier requires both its PQP and PQF thresholds. The progress bar tracks PQP toward the next tier; a purchase only helps if PQP is what you are short on, since bought points never add qualifying flights.",
                }
            }

            if let Some(progress) = result() {
                section {
                    class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                    h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Where You Stand" }
                    div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                        KpiCard {
                            title: "Current tier".to_string(),
                            value: progress.current_tier.name.to_string(),
                            description: None,
                        }
                        KpiCard {
                            title: "Next tier".to_string(),
                            value: progress
                                .next_tier
                                .map(|tier| tier.name.to_string())
                                .unwrap_or_else(|| "—".to_string()),
                            description: if progress.at_max_level() {
                                Some("Top tier reached".to_string())
                            } else {
                                None
                            },
                        }
                        KpiCard {
                            title: "Progress".to_string(),
                            value: format!("{:.1}%", progress.progress_pct),
                            description: None,
                        }
                    }
                    div { class: "mt-4 progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {progress.progress_pct}%;",
                        }
                    }
                    div { class: "mt-4",
                        ResultTable { rows: progress.lines() }
                    }
                    if !progress.at_max_level() && parse_amount(&purchase_input()) > 0.0 {
                        if progress.will_purchase_help {
                            p { class: "mt-3 rounded-lg border border-emerald-500/40 bg-emerald-500/10 px-4 py-2 text-xs text-emerald-100",
                                "That purchase would take you to {progress.pqp_after_purchase:.0} PQP."
                            }
                        } else {
                            p { class: "mt-3 rounded-lg border border-amber-500/40 bg-amber-500/10 px-4 py-2 text-xs text-amber-100",
                                "Buying PQP won't close the gap here; you still need qualifying flights."
                            }
                        }
                    }
                }
            }
        }
    }
}
