use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{dispatch, AppState, BookingCommand},
    ui::{
        components::{
            artist_card::ArtistCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

struct CategoryTile {
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    count: &'static str,
    gradient: &'static str,
}

static CATEGORY_TILES: [CategoryTile; 4] = [
    CategoryTile {
        name: "Singers",
        icon: "🎤",
        description: "Vocal artists for every occasion",
        count: "250+ Artists",
        gradient: "from-pink-500 to-rose-500",
    },
    CategoryTile {
        name: "Dancers",
        icon: "💃",
        description: "Professional dance performances",
        count: "180+ Artists",
        gradient: "from-purple-500 to-violet-500",
    },
    CategoryTile {
        name: "DJs",
        icon: "🎧",
        description: "Electronic music specialists",
        count: "150+ Artists",
        gradient: "from-blue-500 to-cyan-500",
    },
    CategoryTile {
        name: "Musicians",
        icon: "🎸",
        description: "Instrumental & band performances",
        count: "200+ Artists",
        gradient: "from-green-500 to-emerald-500",
    },
];

static HOW_IT_WORKS: [(&str, &str, &str, &str); 3] = [
    (
        "01",
        "🔍",
        "Browse & Filter",
        "Search through our curated list of verified artists. Filter by category, location, and budget to find your perfect match.",
    ),
    (
        "02",
        "📅",
        "Request Quote",
        "Connect directly with artists and request customized quotes for your event. Share your requirements and get personalized proposals.",
    ),
    (
        "03",
        "⭐",
        "Book & Enjoy",
        "Finalize the booking, coordinate the details, and enjoy an amazing performance that makes your event truly memorable.",
    ),
];

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let featured: Vec<_> = state.with(|st| {
        st.artists
            .iter()
            .filter(|artist| artist.featured)
            .cloned()
            .collect()
    });

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
        // Hero
        section { class: "brand-gradient text-white",
            div { class: "mx-auto max-w-7xl px-4 py-20 text-center sm:px-6 lg:px-8 lg:py-28",
                h1 { class: "mb-6 text-4xl font-bold leading-tight lg:text-6xl",
                    "Book Amazing"
                    span { class: "block text-yellow-300", "Performing Artists" }
                }
                p { class: "mx-auto mb-8 max-w-3xl text-xl text-purple-100 lg:text-2xl",
                    "Connect with talented singers, dancers, DJs, and performers across India. Make your events unforgettable with verified artists."
                }
                div { class: "mb-12 flex flex-col justify-center gap-4 sm:flex-row",
                    button {
                        class: "{theme::BTN_LIGHT_ON_DARK}",
                        onclick: move |_| { nav.push(Route::Artists {}); },
                        "🔍 Browse Artists"
                    }
                    button {
                        class: "{theme::BTN_GHOST_ON_DARK}",
                        onclick: move |_| { nav.push(Route::Onboard {}); },
                        "🎭 Join as Artist"
                    }
                }
                div { class: "mx-auto grid max-w-2xl grid-cols-3 gap-8",
                    HeroStat { value: "500+", label: "Verified Artists" }
                    HeroStat { value: "1000+", label: "Events Booked" }
                    HeroStat { value: "50+", label: "Cities Covered" }
                }
            }
        }

        // Category tiles
        section { class: "py-16 lg:py-20",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                div { class: "mb-12 text-center",
                    h2 { class: "mb-4 text-3xl font-bold text-gray-900 lg:text-4xl", "Explore Artist Categories" }
                    p { class: "mx-auto max-w-2xl text-xl text-gray-600",
                        "Find the perfect performer for your event from our diverse range of talented artists"
                    }
                }
                div { class: "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4",
                    for tile in CATEGORY_TILES.iter() {
                        button {
                            class: "card-lift p-6 text-center {theme::PANEL}",
                            onclick: move |_| { nav.push(Route::Artists {}); },
                            div {
                                class: "mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-2xl bg-gradient-to-r {tile.gradient}",
                                span { class: "text-3xl", "{tile.icon}" }
                            }
                            h3 { class: "mb-2 text-xl font-semibold text-gray-900", "{tile.name}" }
                            p { class: "mb-3 text-gray-600", "{tile.description}" }
                            span { class: "{theme::PILL}", "{tile.count}" }
                        }
                    }
                }
            }
        }

        // Featured artists
        section { class: "bg-white py-16 lg:py-20",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                div { class: "mb-12 text-center",
                    span { class: "{theme::PILL_BRAND}", "★ Featured" }
                    h2 { class: "mb-4 mt-4 text-3xl font-bold text-gray-900 lg:text-4xl", "Top Performing Artists" }
                    p { class: "mx-auto max-w-2xl text-xl text-gray-600",
                        "Handpicked artists with exceptional reviews and proven track records"
                    }
                }
                div { class: "mb-12 grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3",
                    for artist in featured {
                        ArtistCard {
                            artist,
                            on_quote_request: on_quote_request.clone(),
                        }
                    }
                }
                div { class: "text-center",
                    button {
                        class: "{theme::BTN_PRIMARY}",
                        onclick: move |_| { nav.push(Route::Artists {}); },
                        "View All Artists"
                    }
                }
            }
        }

        // How it works
        section { class: "bg-gray-50 py-16 lg:py-20",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                div { class: "mb-12 text-center",
                    h2 { class: "mb-4 text-3xl font-bold text-gray-900 lg:text-4xl", "How Stageline Works" }
                    p { class: "mx-auto max-w-2xl text-xl text-gray-600",
                        "Book your perfect artist in just three simple steps"
                    }
                }
                div { class: "grid grid-cols-1 gap-8 md:grid-cols-3",
                    for (step, icon, title, description) in HOW_IT_WORKS.iter() {
                        div { class: "text-center",
                            div { class: "relative mx-auto mb-8 w-fit",
                                div { class: "flex h-20 w-20 items-center justify-center rounded-full brand-gradient",
                                    span { class: "text-3xl", "{icon}" }
                                }
                                div { class: "absolute -right-2 -top-2 flex h-8 w-8 items-center justify-center rounded-full border-4 border-purple-200 bg-white",
                                    span { class: "text-xs font-bold text-purple-600", "{step}" }
                                }
                            }
                            h3 { class: "mb-4 text-xl font-semibold text-gray-900", "{title}" }
                            p { class: "text-gray-600", "{description}" }
                        }
                    }
                }
            }
        }

        // Call to action
        section { class: "brand-gradient py-16 text-white lg:py-20",
            div { class: "mx-auto max-w-4xl px-4 text-center sm:px-6 lg:px-8",
                h2 { class: "mb-6 text-3xl font-bold lg:text-4xl", "Ready to Make Your Event Unforgettable?" }
                p { class: "mb-8 text-xl text-purple-100",
                    "Join thousands of satisfied event planners who trust Stageline for their entertainment needs."
                }
                div { class: "flex flex-col justify-center gap-4 sm:flex-row",
                    button {
                        class: "{theme::BTN_LIGHT_ON_DARK}",
                        onclick: move |_| { nav.push(Route::Artists {}); },
                        "Start Browsing Artists"
                    }
                    button {
                        class: "{theme::BTN_GHOST_ON_DARK}",
                        onclick: move |_| { nav.push(Route::Onboard {}); },
                        "Register as Artist"
                    }
                }
            }
        }
    }
}

#[component]
fn HeroStat(value: &'static str, label: &'static str) -> Element {
    rsx! {
        div { class: "text-center",
            div { class: "mb-2 text-3xl font-bold", "{value}" }
            div { class: "text-purple-200", "{label}" }
        }
    }
}
