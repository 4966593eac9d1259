use dioxus::prelude::*;

use crate::domain::AppState;

/// Explanatory footnote shown under a form when the user has help enabled.
#[component]
pub fn HelpCallout(text: &'static str) -> Element {
    let state = use_context::<Signal<AppState>>();
    if !state.with(|s| s.show_help) {
        return rsx! { Fragment {} };
    }

    rsx! {
        p {
            class: "mt-3 rounded-lg border border-sky-500/40 bg-sky-500/10 px-4 py-2 text-xs text-sky-100",
            "{text}"
        }
    }
}
