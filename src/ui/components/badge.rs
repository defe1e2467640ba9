use dioxus::prelude::*;

use crate::domain::BookingStatus;
use crate::ui::theme;

#[component]
pub fn CategoryBadge(label: String) -> Element {
    rsx! {
        span { class: "{theme::PILL}", "{label}" }
    }
}

#[component]
pub fn FeaturedBadge() -> Element {
    rsx! {
        span { class: "{theme::PILL_BRAND}", "★ Featured" }
    }
}

#[component]
pub fn StatusBadge(status: BookingStatus) -> Element {
    let class = match status {
        BookingStatus::Pending => {
            "inline-flex items-center rounded-full border border-amber-500 px-2 py-0.5 text-xs font-medium text-amber-600"
        }
        BookingStatus::Accepted => {
            "inline-flex items-center rounded-full bg-emerald-600 px-2 py-0.5 text-xs font-medium text-white"
        }
        BookingStatus::Rejected => {
            "inline-flex items-center rounded-full bg-rose-600 px-2 py-0.5 text-xs font-medium text-white"
        }
    };

    rsx! {
        span { class: "{class}", "{status.label()}" }
    }
}
