use super::entities::{Artist, BookingRequest};
use super::seed::{seed_artists, seed_booking_requests};

/// Process-lifetime snapshot of the dataset, shared through a context signal.
///
/// Both lists are filled once at startup and never written again; quote
/// requests and status updates go through `domain::actions` and leave the
/// data untouched. Pages keep their own transient filter/form state in local
/// signals and hand immutable snapshots to the pure domain functions.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub artists: Vec<Artist>,
    pub booking_requests: Vec<BookingRequest>,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            artists: seed_artists(),
            booking_requests: seed_booking_requests(),
        }
    }
}
