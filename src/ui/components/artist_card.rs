use dioxus::prelude::*;

use crate::domain::Artist;
use crate::ui::components::badge::{CategoryBadge, FeaturedBadge};
use crate::ui::theme;

const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=400&h=300&fit=crop";

#[component]
pub fn ArtistCard(artist: Artist, on_quote_request: EventHandler<String>) -> Element {
    let image = artist
        .image_url
        .clone()
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());
    let languages = languages_summary(&artist.languages);
    let quote_id = artist.id.clone();

    rsx! {
        div {
            class: "card-lift overflow-hidden {theme::PANEL}",
            div { class: "relative h-48 overflow-hidden",
                img {
                    class: "h-full w-full object-cover",
                    src: "{image}",
                    alt: "{artist.name}",
                }
                if artist.featured {
                    div { class: "absolute left-3 top-3", FeaturedBadge {} }
                }
            }
            div { class: "p-6",
                div { class: "mb-3 flex items-start justify-between gap-2",
                    h3 { class: "text-lg font-semibold text-gray-900", "{artist.name}" }
                    span { class: "whitespace-nowrap text-sm font-medium text-purple-600", "{artist.price_range}" }
                }
                div { class: "mb-3 flex flex-wrap gap-2",
                    for category in artist.categories.iter() {
                        CategoryBadge { label: category.clone() }
                    }
                }
                p { class: "line-clamp-2 mb-4 text-sm text-gray-600", "{artist.bio}" }
                p { class: "mb-4 text-sm text-gray-500", "📍 {artist.location}" }
                div { class: "mb-4",
                    p { class: "text-xs text-gray-500", "Languages:" }
                    p { class: "text-sm text-gray-700", "{languages}" }
                }
                button {
                    class: "w-full {theme::BTN_PRIMARY}",
                    onclick: move |_| on_quote_request.call(quote_id.clone()),
                    "Ask for Quote"
                }
            }
        }
    }
}

fn languages_summary(languages: &[String]) -> String {
    let shown = languages
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if languages.len() > 3 {
        format!("{shown} +{} more", languages.len() - 3)
    } else {
        shown
    }
}
