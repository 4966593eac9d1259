use dioxus::prelude::*;

use crate::{
    domain::{format_currency, miles_value, AppState},
    infra::award_search::{parse_travel_date, AwardQuote, AwardSearchClient},
    ui::components::{
        field::Field,
        help_callout::HelpCallout,
        kpi_card::KpiCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

#[component]
pub fn AwardSearchPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut origin_input = use_signal(String::new);
    let mut destination_input = use_signal(String::new);
    let mut date_input = use_signal(String::new);
    let mut searching = use_signal(|| false);
    let mut quote = use_signal(|| None::<AwardQuote>);

    let on_search = {
        let toasts = toasts.clone();
        move |_| {
            let origin = origin_input().trim().to_uppercase();
            let destination = destination_input().trim().to_uppercase();
            if origin.is_empty() || destination.is_empty() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Origin and destination are required.",
                );
                return;
            }
            let date = match parse_travel_date(&date_input()) {
                Ok(date) => date,
                Err(err) => {
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                    return;
                }
            };

            let toasts = toasts.clone();
            searching.set(true);
            quote.set(None);
            spawn(async move {
                match AwardSearchClient::new() {
                    Ok(client) => match client.get_award_quote(&origin, &destination, date).await {
                        Ok(found) => quote.set(Some(found)),
                        Err(err) => {
                            push_toast(
                                toasts.clone(),
                                ToastKind::Warning,
                                format!("Award lookup failed: {err}"),
                            );
                        }
                    },
                    Err(err) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Failed to initialise award search client: {err}"),
                        );
                    }
                }
                searching.set(false);
            });
        }
    };

    let valuation = state.with(|st| st.valuation);

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Award Availability" }
                p { class: "mt-2 text-sm text-slate-400", "Look up the lowest award level on a route and see what that redemption is worth at your valuation." }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    Field {
                        label: "Origin (airport code)",
                        value: origin_input(),
                        placeholder: "e.g. SFO",
                        oninput: move |evt: FormEvent| origin_input.set(evt.value()),
                    }
                    Field {
                        label: "Destination (airport code)",
                        value: destination_input(),
                        placeholder: "e.g. NRT",
                        oninput: move |evt: FormEvent| destination_input.set(evt.value()),
                    }
                    Field {
                        label: "Travel date (YYYY-MM-DD)",
                        value: date_input(),
                        placeholder: "e.g. 2026-10-04",
                        oninput: move |evt: FormEvent| date_input.set(evt.value()),
                    }
                }
                button {
                    class: "mt-4 rounded-lg bg-indigo-500 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-white hover:bg-indigo-400",
                    disabled: searching(),
                    onclick: on_search,
                    if searching() { "Searching..." } else { "Search" }
                }
                HelpCallout {
                    text: "The search returns the cheapest saver-level award on the date. Cents per mile is the cash fare divided by the miles required; compare it against your valuation range to decide whether to redeem or pay cash.",
                }
            }

            if let Some(found) = quote() {
                section {
                    class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                    h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500",
                        "{found.origin} → {found.destination}"
                    }
                    div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                        KpiCard {
                            title: "Miles required".to_string(),
                            value: format!("{:.0}", found.miles_required),
                            description: Some({
                                let worth = miles_value(found.miles_required, &valuation);
                                format!(
                                    "worth {} – {}",
                                    format_currency(worth.low),
                                    format_currency(worth.high)
                                )
                            }),
                        }
                        KpiCard {
                            title: "Cash fare".to_string(),
                            value: format_currency(found.cash_price),
                            description: None,
                        }
                        KpiCard {
                            title: "Cents per mile".to_string(),
                            value: if found.miles_required > 0.0 {
                                format!("{:.2}¢", found.cash_price / found.miles_required * 100.0)
                            } else {
                                "—".to_string()
                            },
                            description: Some(format!(
                                "your range: {:.2}¢ – {:.2}¢",
                                valuation.low * 100.0,
                                valuation.high * 100.0
                            )),
                        }
                    }
                }
            }
        }
    }
}
