use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{ArtistsPage, DashboardPage, HomePage, OnboardPage},
        shell::Shell,
    },
    util::assets,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/artists")]
    Artists {},
    #[route("/onboard")]
    Onboard {},
    #[route("/dashboard")]
    Dashboard {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::seeded);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Script { src: TAILWIND_CDN }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Artists() -> Element {
    rsx! { Shell { ArtistsPage {} } }
}

#[component]
pub fn Onboard() -> Element {
    rsx! { Shell { OnboardPage {} } }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}
