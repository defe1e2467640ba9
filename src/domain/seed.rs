//! Compiled-in dataset. There is no backend; both lists are built once at
//! startup and never mutated afterwards.

use super::entities::{Artist, BookingRequest, BookingStatus};

pub fn seed_artists() -> Vec<Artist> {
    vec![
        Artist {
            id: "1".to_string(),
            name: "Priya Sharma".to_string(),
            categories: vec!["Singers".to_string(), "Musicians".to_string()],
            bio: "Classical and Bollywood vocalist with 10+ years of experience. Perfect for weddings and cultural events.".to_string(),
            price_range: "₹25,000 - ₹50,000".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            languages: vec!["Hindi".to_string(), "English".to_string(), "Marathi".to_string()],
            image_url: Some("https://images.unsplash.com/photo-1494790108755-2616c96da99d?w=400&h=400&fit=crop&crop=face".to_string()),
            featured: true,
        },
        Artist {
            id: "2".to_string(),
            name: "DJ Arjun".to_string(),
            categories: vec!["DJs".to_string()],
            bio: "Professional DJ specializing in Bollywood, EDM, and Punjabi beats. 500+ successful events.".to_string(),
            price_range: "₹50,000 - ₹1,00,000".to_string(),
            location: "Delhi, NCR".to_string(),
            languages: vec!["Hindi".to_string(), "English".to_string(), "Punjabi".to_string()],
            image_url: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face".to_string()),
            featured: true,
        },
        Artist {
            id: "3".to_string(),
            name: "Kavya Dance Troupe".to_string(),
            categories: vec!["Dancers".to_string()],
            bio: "Contemporary and classical dance performances. Award-winning choreography team.".to_string(),
            price_range: "₹10,000 - ₹25,000".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            languages: vec!["English".to_string(), "Kannada".to_string(), "Tamil".to_string()],
            image_url: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face".to_string()),
            featured: false,
        },
        Artist {
            id: "4".to_string(),
            name: "Rohit Kumar".to_string(),
            categories: vec!["Comedians".to_string(), "Speakers".to_string()],
            bio: "Stand-up comedian and motivational speaker. Corporate events specialist.".to_string(),
            price_range: "₹25,000 - ₹50,000".to_string(),
            location: "Pune, Maharashtra".to_string(),
            languages: vec!["Hindi".to_string(), "English".to_string(), "Marathi".to_string()],
            image_url: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face".to_string()),
            featured: false,
        },
        Artist {
            id: "5".to_string(),
            name: "Sitar Strings".to_string(),
            categories: vec!["Musicians".to_string()],
            bio: "Traditional Indian classical music ensemble featuring sitar, tabla, and harmonium.".to_string(),
            price_range: "₹10,000 - ₹25,000".to_string(),
            location: "Jaipur, Rajasthan".to_string(),
            languages: vec!["Hindi".to_string(), "English".to_string()],
            image_url: Some("https://images.unsplash.com/photo-1566492031773-4f4e44671d66?w=400&h=400&fit=crop&crop=face".to_string()),
            featured: false,
        },
        Artist {
            id: "6".to_string(),
            name: "Magic Mike".to_string(),
            categories: vec!["Magicians".to_string()],
            bio: "Professional magician and illusionist. Perfect for birthday parties and corporate events.".to_string(),
            price_range: "Under ₹10,000".to_string(),
            location: "Chennai, Tamil Nadu".to_string(),
            languages: vec!["English".to_string(), "Tamil".to_string(), "Telugu".to_string()],
            image_url: Some("https://images.unsplash.com/photo-1560250097-0b93528c311a?w=400&h=400&fit=crop&crop=face".to_string()),
            featured: false,
        },
    ]
}

pub fn seed_booking_requests() -> Vec<BookingRequest> {
    vec![
        BookingRequest {
            id: "1".to_string(),
            artist_id: "1".to_string(),
            artist_name: "Priya Sharma".to_string(),
            event_date: "2024-07-15".to_string(),
            event_type: "Wedding".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            budget: "₹40,000".to_string(),
            status: BookingStatus::Pending,
            created_at: "2024-06-20".to_string(),
        },
        BookingRequest {
            id: "2".to_string(),
            artist_id: "2".to_string(),
            artist_name: "DJ Arjun".to_string(),
            event_date: "2024-07-22".to_string(),
            event_type: "Corporate Event".to_string(),
            location: "Delhi, NCR".to_string(),
            budget: "₹75,000".to_string(),
            status: BookingStatus::Accepted,
            created_at: "2024-06-18".to_string(),
        },
        BookingRequest {
            id: "3".to_string(),
            artist_id: "3".to_string(),
            artist_name: "Kavya Dance Troupe".to_string(),
            event_date: "2024-07-10".to_string(),
            event_type: "Cultural Program".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            budget: "₹20,000".to_string(),
            status: BookingStatus::Rejected,
            created_at: "2024-06-15".to_string(),
        },
        BookingRequest {
            id: "4".to_string(),
            artist_id: "4".to_string(),
            artist_name: "Rohit Kumar".to_string(),
            event_date: "2024-08-05".to_string(),
            event_type: "Birthday Party".to_string(),
            location: "Pune, Maharashtra".to_string(),
            budget: "₹35,000".to_string(),
            status: BookingStatus::Pending,
            created_at: "2024-06-22".to_string(),
        },
        BookingRequest {
            id: "5".to_string(),
            artist_id: "1".to_string(),
            artist_name: "Priya Sharma".to_string(),
            event_date: "2024-08-12".to_string(),
            event_type: "Anniversary".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            budget: "₹45,000".to_string(),
            status: BookingStatus::Accepted,
            created_at: "2024-06-19".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::entities::{CATEGORIES, PRICE_RANGES};

    #[test]
    fn artist_ids_are_unique() {
        let artists = seed_artists();
        let ids: HashSet<_> = artists.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), artists.len());
    }

    #[test]
    fn artists_use_controlled_vocabularies() {
        for artist in seed_artists() {
            assert!(!artist.categories.is_empty(), "{} has no category", artist.name);
            for category in &artist.categories {
                assert!(
                    CATEGORIES.contains(&category.as_str()),
                    "unknown category {category:?} on {}",
                    artist.name
                );
            }
            assert!(
                PRICE_RANGES.contains(&artist.price_range.as_str()),
                "unknown price range {:?} on {}",
                artist.price_range,
                artist.name
            );
        }
    }

    #[test]
    fn booking_requests_reference_seeded_artists() {
        let artist_ids: HashSet<_> = seed_artists().into_iter().map(|a| a.id).collect();
        for request in seed_booking_requests() {
            assert!(artist_ids.contains(&request.artist_id));
        }
    }
}
