use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-gray-50 text-gray-900",
            header {
                class: "sticky top-0 z-40 border-b border-gray-200 bg-white/95 backdrop-blur",
                div { class: "mx-auto flex h-16 max-w-7xl items-center justify-between px-4 sm:px-6 lg:px-8",
                    button {
                        class: "flex items-center gap-2",
                        onclick: move |_| { nav.push(Route::Home {}); },
                        div { class: "flex h-8 w-8 items-center justify-center rounded-lg brand-gradient",
                            span { class: "text-base text-white", "♪" }
                        }
                        span { class: "brand-gradient-text text-xl font-bold", "{APP_NAME}" }
                    }
                    nav { class: "flex items-center gap-1 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Home {}),
                            onclick: move |_| { nav.push(Route::Home {}); },
                            label: "Home",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Artists {}),
                            onclick: move |_| { nav.push(Route::Artists {}); },
                            label: "Browse Artists",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Onboard {}),
                            onclick: move |_| { nav.push(Route::Onboard {}); },
                            label: "Join as Artist",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Dashboard {}),
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            label: "Dashboard",
                        }
                    }
                }
            }
            main {
                {children}
            }
            Footer {}
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "rounded-lg px-3 py-2 font-semibold text-purple-700"
    } else {
        "rounded-lg px-3 py-2 text-gray-600 transition hover:bg-gray-100 hover:text-purple-600"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

#[component]
fn Footer() -> Element {
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        footer { class: "bg-gray-900 text-white",
            div { class: "mx-auto max-w-7xl px-4 py-12 sm:px-6 lg:px-8",
                div { class: "grid grid-cols-1 gap-8 md:grid-cols-4",
                    div { class: "space-y-4",
                        div { class: "flex items-center gap-2",
                            div { class: "flex h-8 w-8 items-center justify-center rounded-lg brand-gradient",
                                span { class: "text-base text-white", "♪" }
                            }
                            span { class: "text-xl font-bold", "{APP_NAME}" }
                        }
                        p { class: "text-sm text-gray-400",
                            "Connecting amazing performers with unforgettable events across India."
                        }
                    }
                    div { class: "space-y-3",
                        h3 { class: "text-lg font-semibold", "Quick Links" }
                        FooterLink { label: "Home", onclick: move |_| { nav.push(Route::Home {}); } }
                        FooterLink { label: "Browse Artists", onclick: move |_| { nav.push(Route::Artists {}); } }
                        FooterLink { label: "Join as Artist", onclick: move |_| { nav.push(Route::Onboard {}); } }
                        FooterLink { label: "Dashboard", onclick: move |_| { nav.push(Route::Dashboard {}); } }
                    }
                    div { class: "space-y-3",
                        h3 { class: "text-lg font-semibold", "Categories" }
                        div { class: "space-y-2 text-sm text-gray-400",
                            div { "Singers & Musicians" }
                            div { "Dancers & Choreographers" }
                            div { "DJs & Sound Artists" }
                            div { "Speakers & Comedians" }
                            div { "Magicians & Entertainers" }
                        }
                    }
                    div { class: "space-y-3",
                        h3 { class: "text-lg font-semibold", "Contact" }
                        div { class: "space-y-2 text-sm text-gray-400",
                            div { "✉️ hello@stageline.in" }
                            div { "📞 +91 98765 43210" }
                            div { "📍 Mumbai, India" }
                        }
                    }
                }
                div { class: "mt-10 border-t border-gray-800 pt-6 text-center text-xs text-gray-500",
                    "{APP_NAME} {version} — demo build, all data is illustrative."
                }
            }
        }
    }
}

#[component]
fn FooterLink(label: &'static str, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "block text-sm text-gray-400 transition-colors hover:text-white",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
