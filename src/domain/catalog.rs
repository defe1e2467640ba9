//! Catalog filtering for the browse page.

use super::entities::Artist;

/// The set of filters a visitor currently has active. Empty strings and
/// `None` mean "match everything" for that criterion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Option<String>,
    pub price_range: Option<String>,
    pub region: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_none()
            && self.price_range.is_none()
            && self.region.is_none()
    }

    fn matches(&self, artist: &Artist) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty() {
            let in_name = artist.name.to_lowercase().contains(&query);
            let in_bio = artist.bio.to_lowercase().contains(&query);
            let in_categories = artist
                .categories
                .iter()
                .any(|cat| cat.to_lowercase().contains(&query));
            if !in_name && !in_bio && !in_categories {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if !artist.categories.iter().any(|cat| cat == category) {
                return false;
            }
        }
        if let Some(ref range) = self.price_range {
            if &artist.price_range != range {
                return false;
            }
        }
        if let Some(ref region) = self.region {
            // Substring match: a "Delhi" filter also catches "Delhi, NCR".
            if !artist.location.contains(region.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Returns the artists matching all active criteria, preserving input order.
pub fn filter_artists(artists: &[Artist], criteria: &FilterCriteria) -> Vec<Artist> {
    artists
        .iter()
        .filter(|artist| criteria.matches(artist))
        .cloned()
        .collect()
}

/// Distinct region tokens across the catalog, sorted ascending. Feeds the
/// location dropdown and is recomputed from the list on demand.
pub fn region_options(artists: &[Artist]) -> Vec<String> {
    let mut regions: Vec<String> = artists
        .iter()
        .map(|artist| artist.region().to_string())
        .filter(|region| !region.is_empty())
        .collect();
    regions.sort();
    regions.dedup();
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_artists;

    fn criteria() -> FilterCriteria {
        FilterCriteria::default()
    }

    #[test]
    fn empty_criteria_returns_input_unchanged() {
        let artists = seed_artists();
        let result = filter_artists(&artists, &criteria());
        assert_eq!(result, artists);
    }

    #[test]
    fn search_matches_name_any_case() {
        let artists = seed_artists();
        let result = filter_artists(
            &artists,
            &FilterCriteria {
                search: "pRiYa".to_string(),
                ..criteria()
            },
        );
        assert!(result.iter().any(|a| a.name == "Priya Sharma"));
    }

    #[test]
    fn search_matches_bio_and_category_text() {
        let artists = seed_artists();
        let by_bio = filter_artists(
            &artists,
            &FilterCriteria {
                search: "illusionist".to_string(),
                ..criteria()
            },
        );
        assert_eq!(by_bio.len(), 1);
        assert_eq!(by_bio[0].name, "Magic Mike");

        let by_category = filter_artists(
            &artists,
            &FilterCriteria {
                search: "dancer".to_string(),
                ..criteria()
            },
        );
        assert!(by_category.iter().any(|a| a.name == "Kavya Dance Troupe"));
    }

    #[test]
    fn whitespace_search_is_inactive() {
        let artists = seed_artists();
        let result = filter_artists(
            &artists,
            &FilterCriteria {
                search: "   ".to_string(),
                ..criteria()
            },
        );
        assert_eq!(result.len(), artists.len());
    }

    #[test]
    fn category_filter_requires_exact_membership() {
        let artists = seed_artists();
        let result = filter_artists(
            &artists,
            &FilterCriteria {
                category: Some("DJs".to_string()),
                ..criteria()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "DJ Arjun");
    }

    #[test]
    fn region_filter_matches_by_substring() {
        let artists = seed_artists();
        let result = filter_artists(
            &artists,
            &FilterCriteria {
                region: Some("Delhi".to_string()),
                ..criteria()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].location, "Delhi, NCR");
    }

    #[test]
    fn combined_criteria_must_all_match() {
        let artists = seed_artists();
        let result = filter_artists(
            &artists,
            &FilterCriteria {
                search: "classical".to_string(),
                region: Some("Maharashtra".to_string()),
                ..criteria()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Priya Sharma");
    }

    #[test]
    fn result_is_order_preserving_subsequence() {
        let artists = seed_artists();
        let result = filter_artists(
            &artists,
            &FilterCriteria {
                price_range: Some("₹25,000 - ₹50,000".to_string()),
                ..criteria()
            },
        );
        let positions: Vec<_> = result
            .iter()
            .map(|a| artists.iter().position(|b| b.id == a.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filtering_twice_yields_identical_results() {
        let artists = seed_artists();
        let crit = FilterCriteria {
            search: "event".to_string(),
            category: Some("Comedians".to_string()),
            ..criteria()
        };
        assert_eq!(
            filter_artists(&artists, &crit),
            filter_artists(&artists, &crit)
        );
    }

    #[test]
    fn region_options_are_sorted_and_deduplicated() {
        let artists = seed_artists();
        let regions = region_options(&artists);
        // Priya Sharma and Rohit Kumar share Maharashtra.
        assert_eq!(
            regions,
            vec!["Karnataka", "Maharashtra", "NCR", "Rajasthan", "Tamil Nadu"]
        );
    }
}
