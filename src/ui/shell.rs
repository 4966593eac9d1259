use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::AppState;
use crate::util::assets;
use crate::util::version::APP_NAME;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let show_help = state.with(|s| s.show_help);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let mut state_mut = state;

    let help_class = if show_help {
        "rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-3 py-1.5 text-sm font-semibold text-indigo-300"
    } else {
        "rounded-lg border border-slate-700 px-3 py-1.5 text-sm text-slate-400 transition hover:border-slate-600 hover:text-slate-200"
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-5xl flex-wrap items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        img { class: "h-8 w-auto", src: assets::logo_data_uri(), alt: "logo" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "is this deal actually worth it?" }
                        }
                    }
                    nav { class: "flex flex-wrap gap-2 text-sm justify-end",
                        NavButton { active: matches!(current_route, Route::Accelerator {}), onclick: move |_| { nav.push(Route::Accelerator {}); }, label: "🚀 Accelerator" }
                        NavButton { active: matches!(current_route, Route::Upgrade {}), onclick: move |_| { nav.push(Route::Upgrade {}); }, label: "💺 Upgrade" }
                        NavButton { active: matches!(current_route, Route::Ticket {}), onclick: move |_| { nav.push(Route::Ticket {}); }, label: "🎫 Ticket" }
                        NavButton { active: matches!(current_route, Route::BuyMiles {}), onclick: move |_| { nav.push(Route::BuyMiles {}); }, label: "💰 Buy Miles" }
                        NavButton { active: matches!(current_route, Route::Status {}), onclick: move |_| { nav.push(Route::Status {}); }, label: "🏆 Status" }
                        NavButton { active: matches!(current_route, Route::AwardSearch {}), onclick: move |_| { nav.push(Route::AwardSearch {}); }, label: "🔎 Awards" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                        button {
                            class: "{help_class}",
                            title: "Toggle explanations under each result",
                            onclick: move |_| {
                                state_mut.with_mut(|s| s.show_help = !s.show_help);
                                persist_user_state(&state_mut);
                            },
                            "💡 Help"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-5xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
    } else {
        "rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
