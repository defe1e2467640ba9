use dioxus::prelude::*;

use crate::ui::components::badge::{CategoryBadge, FeaturedBadge};
use crate::ui::theme;

const FALLBACK_THUMB: &str =
    "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=40&h=40&fit=crop";

#[derive(Clone, PartialEq)]
pub struct RosterRow {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
    pub location: String,
    pub price_range: String,
    pub languages_label: String,
    pub featured: bool,
}

#[component]
pub fn RosterTable(rows: Vec<RosterRow>) -> Element {
    let is_empty = rows.is_empty();

    rsx! {
        div {
            class: "overflow-x-auto {theme::PANEL}",
            table {
                class: "min-w-full",
                thead {
                    class: "{theme::TABLE_HEADER}",
                    tr {
                        th { class: "px-4 py-3", "Name" }
                        th { class: "px-4 py-3", "Categories" }
                        th { class: "px-4 py-3", "Location" }
                        th { class: "px-4 py-3", "Price Range" }
                        th { class: "px-4 py-3", "Languages" }
                        th { class: "px-4 py-3", "Status" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_BODY}",
                    for row in rows {
                        RosterRowView { row }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-gray-500",
                                colspan: "6",
                                "No artists under management."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RosterRowView(row: RosterRow) -> Element {
    let thumb = row
        .image_url
        .clone()
        .unwrap_or_else(|| FALLBACK_THUMB.to_string());

    rsx! {
        tr {
            class: "transition-colors hover:bg-gray-50",
            td { class: "px-4 py-3",
                div { class: "flex items-center gap-3",
                    img {
                        class: "h-10 w-10 rounded-full object-cover",
                        src: "{thumb}",
                        alt: "{row.name}",
                    }
                    span { class: "font-medium text-gray-900", "{row.name}" }
                }
            }
            td { class: "px-4 py-3",
                div { class: "flex flex-wrap gap-1",
                    for category in row.categories.iter() {
                        CategoryBadge { label: category.clone() }
                    }
                }
            }
            td { class: "px-4 py-3", "{row.location}" }
            td { class: "px-4 py-3 font-semibold", "{row.price_range}" }
            td { class: "px-4 py-3", "{row.languages_label}" }
            td { class: "px-4 py-3",
                if row.featured {
                    FeaturedBadge {}
                } else {
                    span {
                        class: "inline-flex items-center rounded-full border border-gray-300 px-2 py-0.5 text-xs font-medium text-gray-600",
                        "Active"
                    }
                }
            }
        }
    }
}
