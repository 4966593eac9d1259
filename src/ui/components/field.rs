use dioxus::prelude::*;

/// Labelled text input used by every calculator form.
#[component]
pub fn Field(
    label: &'static str,
    value: String,
    oninput: EventHandler<FormEvent>,
    placeholder: Option<&'static str>,
) -> Element {
    rsx! {
        div {
            label { class: "block text-xs font-semibold uppercase text-slate-500", "{label}" }
            input {
                class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                value: value,
                placeholder: placeholder.unwrap_or(""),
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
