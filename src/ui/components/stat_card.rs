use dioxus::prelude::*;

use crate::ui::theme;

/// Dashboard statistic tile: an icon chip, a label, and the computed value.
#[component]
pub fn StatCard(icon: &'static str, icon_bg: &'static str, title: String, value: String) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-4 p-6 {theme::PANEL}",
            div {
                class: "flex h-12 w-12 items-center justify-center rounded-lg {icon_bg}",
                span { class: "text-xl", "{icon}" }
            }
            div {
                p { class: "text-sm font-medium text-gray-600", "{title}" }
                p { class: "text-2xl font-bold text-gray-900", "{value}" }
            }
        }
    }
}
