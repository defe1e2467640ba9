use dioxus::prelude::*;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

use crate::{
    domain::{
        aggregate_bookings, dispatch, format_inr, AppState, BookingCommand, BookingStatus,
    },
    ui::{
        components::{
            booking_table::{BookingRow, BookingTable},
            roster_table::{RosterRow, RosterTable},
            stat_card::StatCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

#[derive(Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Bookings,
    Roster,
}

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut tab = use_signal(|| DashboardTab::Bookings);

    let (artists, requests) = state.with(|st| (st.artists.clone(), st.booking_requests.clone()));
    let stats = aggregate_bookings(&requests);
    let revenue = format!("₹{}", format_inr(stats.accepted_revenue));

    let booking_rows: Vec<BookingRow> = requests
        .iter()
        .map(|request| BookingRow {
            id: request.id.clone(),
            artist_name: request.artist_name.clone(),
            event_type: request.event_type.clone(),
            event_date_label: format_event_date(&request.event_date),
            location: request.location.clone(),
            budget: request.budget.clone(),
            status: request.status,
        })
        .collect();

    let roster_rows: Vec<RosterRow> = artists
        .iter()
        .map(|artist| RosterRow {
            id: artist.id.clone(),
            name: artist.name.clone(),
            image_url: artist.image_url.clone(),
            categories: artist.categories.clone(),
            location: artist.location.clone(),
            price_range: artist.price_range.clone(),
            languages_label: languages_summary(&artist.languages),
            featured: artist.featured,
        })
        .collect();

    // The dataset is immutable; the command is logged and acknowledged, the
    // table itself does not change.
    let on_status_update = {
        let toasts = toasts.clone();
        move |(request_id, status): (String, BookingStatus)| {
            let receipt = dispatch(BookingCommand::UpdateStatus {
                request_id: request_id.clone(),
                status,
            });
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                format!(
                    "Request {request_id} marked {} (demo only, ref {}).",
                    status.label().to_lowercase(),
                    &receipt.reference[..8]
                ),
            );
        }
    };

    rsx! {
        section { class: "{theme::PAGE_HERO}",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                h1 { class: "mb-4 text-4xl font-bold", "Manager Dashboard" }
                p { class: "text-xl text-purple-100", "Manage your artists and track booking requests" }
            }
        }

        div { class: "{theme::PAGE_BODY}",
            div { class: "mb-8 grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4",
                StatCard {
                    icon: "👥",
                    icon_bg: "bg-blue-100",
                    title: "Total Artists".to_string(),
                    value: artists.len().to_string(),
                }
                StatCard {
                    icon: "📅",
                    icon_bg: "bg-green-100",
                    title: "Total Bookings".to_string(),
                    value: stats.total_requests.to_string(),
                }
                StatCard {
                    icon: "💬",
                    icon_bg: "bg-yellow-100",
                    title: "Pending Requests".to_string(),
                    value: stats.pending_requests.to_string(),
                }
                StatCard {
                    icon: "💰",
                    icon_bg: "bg-purple-100",
                    title: "Monthly Revenue".to_string(),
                    value: revenue,
                }
            }

            div { class: "mb-6 grid grid-cols-2 gap-1 rounded-lg bg-gray-100 p-1",
                TabButton {
                    active: tab() == DashboardTab::Bookings,
                    onclick: move |_| tab.set(DashboardTab::Bookings),
                    label: "Booking Requests",
                }
                TabButton {
                    active: tab() == DashboardTab::Roster,
                    onclick: move |_| tab.set(DashboardTab::Roster),
                    label: "Managed Artists",
                }
            }

            match tab() {
                DashboardTab::Bookings => rsx! {
                    div {
                        div { class: "mb-4",
                            h2 { class: "text-lg font-semibold text-gray-900", "Recent Booking Requests" }
                            p { class: "text-sm text-gray-500", "Manage incoming booking requests for your artists" }
                        }
                        BookingTable { rows: booking_rows, on_status_update }
                    }
                },
                DashboardTab::Roster => rsx! {
                    div {
                        div { class: "mb-4",
                            h2 { class: "text-lg font-semibold text-gray-900", "Managed Artists" }
                            p { class: "text-sm text-gray-500", "Overview of all artists under your management" }
                        }
                        RosterTable { rows: roster_rows }
                    }
                },
            }
        }
    }
}

#[component]
fn TabButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "rounded-md bg-white px-4 py-2 text-sm font-semibold text-gray-900 shadow-sm"
    } else {
        "rounded-md px-4 py-2 text-sm text-gray-600 transition hover:text-gray-900"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

/// "2024-07-15" -> "Jul 15, 2024"; anything unparsable is shown as-is.
fn format_event_date(value: &str) -> String {
    match Date::parse(value, ISO_DATE) {
        Ok(date) => date
            .format(DISPLAY_DATE)
            .unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}

fn languages_summary(languages: &[String]) -> String {
    let shown = languages
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if languages.len() > 2 {
        format!("{shown} +{}", languages.len() - 2)
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_dates_render_human_readable() {
        assert_eq!(format_event_date("2024-07-15"), "Jul 15, 2024");
        assert_eq!(format_event_date("2024-08-05"), "Aug 5, 2024");
    }

    #[test]
    fn unparsable_dates_pass_through() {
        assert_eq!(format_event_date("soon"), "soon");
    }

    #[test]
    fn languages_collapse_beyond_two() {
        let languages = vec![
            "Hindi".to_string(),
            "English".to_string(),
            "Marathi".to_string(),
        ];
        assert_eq!(languages_summary(&languages), "Hindi, English +1");
    }
}
