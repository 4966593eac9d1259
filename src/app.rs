use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{
            AcceleratorPage, AwardSearchPage, BuyMilesPage, SettingsPage, StatusPage, TicketPage,
            UpgradePage,
        },
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_settings, save_settings},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/accelerator")]
    Accelerator {},
    #[route("/upgrade")]
    Upgrade {},
    #[route("/ticket")]
    Ticket {},
    #[route("/buy-miles")]
    BuyMiles {},
    #[route("/status")]
    Status {},
    #[route("/award-search")]
    AwardSearch {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_settings() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_settings(&snapshot) {
        println!("Failed to persist user settings: {err}");
    }
}

#[component]
pub fn Accelerator() -> Element {
    rsx! { Shell { AcceleratorPage {} } }
}

#[component]
pub fn Upgrade() -> Element {
    rsx! { Shell { UpgradePage {} } }
}

#[component]
pub fn Ticket() -> Element {
    rsx! { Shell { TicketPage {} } }
}

#[component]
pub fn BuyMiles() -> Element {
    rsx! { Shell { BuyMilesPage {} } }
}

#[component]
pub fn Status() -> Element {
    rsx! { Shell { StatusPage {} } }
}

#[component]
pub fn AwardSearch() -> Element {
    rsx! { Shell { AwardSearchPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
