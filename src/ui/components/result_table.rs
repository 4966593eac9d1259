use dioxus::prelude::*;

/// Renders the label/value breakdown every evaluator exposes via `lines()`.
#[component]
pub fn ResultTable(rows: Vec<(&'static str, String)>) -> Element {
    rsx! {
        ul {
            class: "divide-y divide-slate-800 rounded-lg border border-slate-800 bg-slate-900/60 text-sm",
            for (label, value) in rows {
                li { class: "flex items-center justify-between px-4 py-2",
                    span { class: "text-slate-400", "{label}" }
                    span { class: "text-right font-medium text-slate-100", "{value}" }
                }
            }
        }
    }
}
