use dioxus::prelude::*;

use crate::domain::Verdict;

/// Pill-shaped badge colouring the overall call on a deal.
#[component]
pub fn VerdictBadge(verdict: Verdict) -> Element {
    let (theme, icon) = match verdict {
        Verdict::Excellent => ("border-emerald-500/40 bg-emerald-500/10 text-emerald-300", "✅"),
        Verdict::Decent => ("border-amber-500/40 bg-amber-500/10 text-amber-300", "🤔"),
        Verdict::NotWorthIt => ("border-rose-500/40 bg-rose-500/10 text-rose-300", "❌"),
        Verdict::Informational => ("border-sky-500/40 bg-sky-500/10 text-sky-300", "ℹ️"),
    };

    rsx! {
        span {
            class: "inline-flex items-center gap-2 rounded-full border px-3 py-0.5 text-sm font-semibold {theme}",
            span { "{icon}" }
            "{verdict.label()}"
        }
    }
}
