use serde::{Deserialize, Serialize};

/// A performer listed in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    /// At least one entry, drawn from [`CATEGORIES`].
    pub categories: Vec<String>,
    pub bio: String,
    /// Label drawn from [`PRICE_RANGES`].
    pub price_range: String,
    /// Formatted as "City, Region".
    pub location: String,
    pub languages: Vec<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Artist {
    /// Returns the region token used for the location filter dropdown:
    /// the segment after the comma when present, the whole string otherwise.
    /// "Mumbai, Maharashtra" -> "Maharashtra", "Remote" -> "Remote".
    pub fn region(&self) -> &str {
        let mut segments = self.location.split(',');
        let first = segments.next().map(str::trim).unwrap_or("");
        match segments.next().map(str::trim) {
            Some(second) if !second.is_empty() => second,
            _ => first,
        }
    }
}

/// An incoming booking request as shown on the manager dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: String,
    /// References an [`Artist::id`]; not enforced against the catalog.
    pub artist_id: String,
    pub artist_name: String,
    /// ISO calendar date, e.g. "2024-07-15".
    pub event_date: String,
    pub event_type: String,
    pub location: String,
    /// Currency-formatted string, e.g. "₹40,000".
    pub budget: String,
    pub status: BookingStatus,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Accepted => "Accepted",
            BookingStatus::Rejected => "Rejected",
        }
    }
}

pub const CATEGORIES: [&str; 7] = [
    "Singers",
    "Dancers",
    "Speakers",
    "DJs",
    "Musicians",
    "Comedians",
    "Magicians",
];

pub const LANGUAGES: [&str; 10] = [
    "English",
    "Hindi",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Bengali",
    "Marathi",
    "Gujarati",
    "Punjabi",
];

pub const PRICE_RANGES: [&str; 5] = [
    "Under ₹10,000",
    "₹10,000 - ₹25,000",
    "₹25,000 - ₹50,000",
    "₹50,000 - ₹1,00,000",
    "Above ₹1,00,000",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn artist_at(location: &str) -> Artist {
        Artist {
            id: "a-1".to_string(),
            name: "Test".to_string(),
            categories: vec!["Singers".to_string()],
            bio: String::new(),
            price_range: PRICE_RANGES[0].to_string(),
            location: location.to_string(),
            languages: vec!["English".to_string()],
            image_url: None,
            featured: false,
        }
    }

    #[test]
    fn region_uses_segment_after_comma() {
        assert_eq!(artist_at("Mumbai, Maharashtra").region(), "Maharashtra");
        assert_eq!(artist_at("Delhi, NCR").region(), "NCR");
    }

    #[test]
    fn region_falls_back_to_whole_string_without_comma() {
        assert_eq!(artist_at("Remote").region(), "Remote");
    }

    #[test]
    fn region_ignores_empty_second_segment() {
        assert_eq!(artist_at("Chennai, ").region(), "Chennai");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Accepted).unwrap();
        assert_eq!(json, "\"accepted\"");
    }
}
