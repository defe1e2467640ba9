use dioxus::prelude::*;

use crate::{
    domain::{
        dispatch, filter_artists, region_options, AppState, BookingCommand, FilterCriteria,
        CATEGORIES, PRICE_RANGES,
    },
    ui::{
        components::{
            artist_card::ArtistCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn ArtistsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| None::<String>);
    let mut price_range = use_signal(|| None::<String>);
    let mut region = use_signal(|| None::<String>);

    let artists = state.with(|st| st.artists.clone());
    let regions = region_options(&artists);

    let criteria = FilterCriteria {
        search: search(),
        category: category(),
        price_range: price_range(),
        region: region(),
    };
    let has_active_filters = !criteria.is_empty();
    let matches = filter_artists(&artists, &criteria);
    let result_heading = match matches.len() {
        1 => "1 Artist Found".to_string(),
        n => format!("{n} Artists Found"),
    };

    let mut clear_filters = move || {
        search.set(String::new());
        category.set(None);
        price_range.set(None);
        region.set(None);
    };

    let on_quote_request = {
        let toasts = toasts.clone();
        move |artist_id: String| {
            let receipt = dispatch(BookingCommand::RequestQuote { artist_id });
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("Quote request sent (ref {}).", &receipt.reference[..8]),
            );
        }
    };

    rsx! {
        section { class: "{theme::PAGE_HERO}",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                h1 { class: "mb-4 text-4xl font-bold", "Browse Artists" }
                p { class: "text-xl text-purple-100", "Discover talented performers for your next event" }
            }
        }

        div { class: "{theme::PAGE_BODY}",
            // Search + filter panel
            div { class: "mb-8 p-6 {theme::PANEL}",
                div { class: "mb-6",
                    input {
                        class: "{theme::INPUT} h-12 text-lg",
                        placeholder: "Search by artist name, category, or keywords...",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                }
                div { class: "mb-6 grid grid-cols-1 gap-4 md:grid-cols-4",
                    select {
                        class: "{theme::SELECT}",
                        value: category().unwrap_or_default(),
                        onchange: move |evt| category.set(non_empty(evt.value())),
                        option { value: "", "All Categories" }
                        for name in CATEGORIES.iter() {
                            option { value: "{name}", "{name}" }
                        }
                    }
                    select {
                        class: "{theme::SELECT}",
                        value: price_range().unwrap_or_default(),
                        onchange: move |evt| price_range.set(non_empty(evt.value())),
                        option { value: "", "Any Price" }
                        for range in PRICE_RANGES.iter() {
                            option { value: "{range}", "{range}" }
                        }
                    }
                    select {
                        class: "{theme::SELECT}",
                        value: region().unwrap_or_default(),
                        onchange: move |evt| region.set(non_empty(evt.value())),
                        option { value: "", "All Locations" }
                        for name in regions {
                            option { value: "{name}", "{name}" }
                        }
                    }
                    if has_active_filters {
                        button {
                            class: "{theme::BTN_OUTLINE}",
                            onclick: move |_| clear_filters(),
                            "✕ Clear Filters"
                        }
                    }
                }
                if has_active_filters {
                    div { class: "flex flex-wrap gap-2",
                        if !criteria.search.trim().is_empty() {
                            FilterChip {
                                label: format!("Search: \"{}\"", criteria.search.trim()),
                                on_clear: move |_| search.set(String::new()),
                            }
                        }
                        if let Some(ref value) = criteria.category {
                            FilterChip {
                                label: format!("Category: {value}"),
                                on_clear: move |_| category.set(None),
                            }
                        }
                        if let Some(ref value) = criteria.price_range {
                            FilterChip {
                                label: format!("Price: {value}"),
                                on_clear: move |_| price_range.set(None),
                            }
                        }
                        if let Some(ref value) = criteria.region {
                            FilterChip {
                                label: format!("Location: {value}"),
                                on_clear: move |_| region.set(None),
                            }
                        }
                    }
                }
            }

            // Results header
            div { class: "mb-6",
                h2 { class: "text-2xl font-bold text-gray-900", "{result_heading}" }
                p { class: "text-gray-600",
                    if has_active_filters { "Filtered results" } else { "Showing all available artists" }
                }
            }

            if matches.is_empty() {
                div { class: "py-16 text-center",
                    div { class: "mx-auto mb-6 flex h-24 w-24 items-center justify-center rounded-full bg-gray-100",
                        span { class: "text-4xl", "🔎" }
                    }
                    h3 { class: "mb-2 text-xl font-semibold text-gray-900", "No artists found" }
                    p { class: "mb-6 text-gray-600", "Try adjusting your search criteria or clearing the filters" }
                    button {
                        class: "{theme::BTN_OUTLINE}",
                        onclick: move |_| clear_filters(),
                        "Clear All Filters"
                    }
                }
            } else {
                div { class: "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3",
                    for artist in matches {
                        ArtistCard {
                            artist,
                            on_quote_request: on_quote_request.clone(),
                        }
                    }
                }
            }
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[component]
fn FilterChip(label: String, on_clear: EventHandler<()>) -> Element {
    rsx! {
        span {
            class: "{theme::PILL} gap-1",
            "{label}"
            button {
                class: "ml-1 text-gray-500 hover:text-rose-500",
                onclick: move |_| on_clear.call(()),
                "✕"
            }
        }
    }
}
