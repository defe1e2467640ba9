use dioxus::prelude::*;

use crate::domain::BookingStatus;
use crate::ui::components::badge::StatusBadge;
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct BookingRow {
    pub id: String,
    pub artist_name: String,
    pub event_type: String,
    pub event_date_label: String,
    pub location: String,
    pub budget: String,
    pub status: BookingStatus,
}

#[component]
pub fn BookingTable(
    rows: Vec<BookingRow>,
    on_status_update: EventHandler<(String, BookingStatus)>,
) -> Element {
    let is_empty = rows.is_empty();

    rsx! {
        div {
            class: "overflow-x-auto {theme::PANEL}",
            table {
                class: "min-w-full",
                thead {
                    class: "{theme::TABLE_HEADER}",
                    tr {
                        th { class: "px-4 py-3", "Artist" }
                        th { class: "px-4 py-3", "Event Type" }
                        th { class: "px-4 py-3", "Date" }
                        th { class: "px-4 py-3", "Location" }
                        th { class: "px-4 py-3", "Budget" }
                        th { class: "px-4 py-3", "Status" }
                        th { class: "px-4 py-3", "Actions" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_BODY}",
                    for row in rows {
                        BookingRowView { row, on_status_update: on_status_update.clone() }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-gray-500",
                                colspan: "7",
                                "No booking requests yet."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BookingRowViewProps {
    row: BookingRow,
    on_status_update: EventHandler<(String, BookingStatus)>,
}

#[component]
fn BookingRowView(props: BookingRowViewProps) -> Element {
    let row = props.row;
    let accept_id = row.id.clone();
    let reject_id = row.id.clone();
    let on_accept = props.on_status_update.clone();
    let on_reject = props.on_status_update.clone();

    rsx! {
        tr {
            class: "transition-colors hover:bg-gray-50",
            td { class: "px-4 py-3 font-medium text-gray-900", "{row.artist_name}" }
            td { class: "px-4 py-3", "{row.event_type}" }
            td { class: "px-4 py-3", "{row.event_date_label}" }
            td { class: "px-4 py-3", "{row.location}" }
            td { class: "px-4 py-3 font-semibold", "{row.budget}" }
            td { class: "px-4 py-3", StatusBadge { status: row.status } }
            td { class: "px-4 py-3",
                if row.status == BookingStatus::Pending {
                    div { class: "flex gap-2",
                        button {
                            class: "rounded-md bg-emerald-600 px-3 py-1 text-xs font-semibold text-white hover:bg-emerald-700",
                            onclick: move |_| on_accept.call((accept_id.clone(), BookingStatus::Accepted)),
                            "Accept"
                        }
                        button {
                            class: "rounded-md bg-rose-600 px-3 py-1 text-xs font-semibold text-white hover:bg-rose-700",
                            onclick: move |_| on_reject.call((reject_id.clone(), BookingStatus::Rejected)),
                            "Reject"
                        }
                    }
                } else {
                    button {
                        class: "rounded-md border border-gray-300 px-3 py-1 text-xs font-semibold text-gray-600 hover:bg-gray-100",
                        "View"
                    }
                }
            }
        }
    }
}
