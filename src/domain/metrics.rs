//! Dashboard aggregates over the booking list.

use super::entities::{BookingRequest, BookingStatus};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total_requests: usize,
    pub pending_requests: usize,
    /// Sum of accepted budgets, in whole rupees.
    pub accepted_revenue: u64,
}

/// Single pass over the booking list. Pending and rejected budgets never
/// contribute to revenue.
pub fn aggregate_bookings(requests: &[BookingRequest]) -> BookingStats {
    let mut stats = BookingStats {
        total_requests: requests.len(),
        ..BookingStats::default()
    };
    for request in requests {
        match request.status {
            BookingStatus::Pending => stats.pending_requests += 1,
            BookingStatus::Accepted => stats.accepted_revenue += parse_amount(&request.budget),
            BookingStatus::Rejected => {}
        }
    }
    stats
}

/// Reads a currency-formatted budget ("₹40,000") as a whole-rupee amount by
/// keeping only the ASCII digits. A string with no digits counts as zero
/// rather than an error; the seed data never carries fractional amounts.
pub fn parse_amount(budget: &str) -> u64 {
    let digits: String = budget.chars().filter(|ch| ch.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Renders a whole-rupee amount with Indian digit grouping, matching the
/// notation used by the price-range labels: 115000 -> "1,15,000".
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_booking_requests;

    fn request(status: BookingStatus, budget: &str) -> BookingRequest {
        BookingRequest {
            id: "r-1".to_string(),
            artist_id: "1".to_string(),
            artist_name: "Test".to_string(),
            event_date: "2024-07-15".to_string(),
            event_type: "Wedding".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            budget: budget.to_string(),
            status,
            created_at: "2024-06-20".to_string(),
        }
    }

    #[test]
    fn empty_list_aggregates_to_zero() {
        assert_eq!(aggregate_bookings(&[]), BookingStats::default());
    }

    #[test]
    fn counts_and_revenue_from_mixed_statuses() {
        let requests = vec![
            request(BookingStatus::Accepted, "₹40,000"),
            request(BookingStatus::Accepted, "₹75,000"),
            request(BookingStatus::Pending, "₹35,000"),
        ];
        let stats = aggregate_bookings(&requests);
        assert_eq!(stats.total_requests, 3);
        assert_eq!(stats.pending_requests, 1);
        assert_eq!(stats.accepted_revenue, 115_000);
    }

    #[test]
    fn revenue_ignores_non_accepted_budgets() {
        let mut requests = vec![
            request(BookingStatus::Accepted, "₹40,000"),
            request(BookingStatus::Pending, "₹35,000"),
            request(BookingStatus::Rejected, "₹20,000"),
        ];
        let before = aggregate_bookings(&requests).accepted_revenue;
        requests[1].budget = "₹9,99,999".to_string();
        requests[2].budget = "₹9,99,999".to_string();
        assert_eq!(aggregate_bookings(&requests).accepted_revenue, before);
    }

    #[test]
    fn digitless_budget_counts_as_zero() {
        let requests = vec![
            request(BookingStatus::Accepted, "TBD"),
            request(BookingStatus::Accepted, "₹75,000"),
        ];
        assert_eq!(aggregate_bookings(&requests).accepted_revenue, 75_000);
    }

    #[test]
    fn parse_amount_strips_symbol_and_separators() {
        assert_eq!(parse_amount("₹1,00,000"), 100_000);
        assert_eq!(parse_amount("₹40,000"), 40_000);
        assert_eq!(parse_amount(""), 0);
    }

    #[test]
    fn format_inr_uses_indian_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(1_000), "1,000");
        assert_eq!(format_inr(115_000), "1,15,000");
        assert_eq!(format_inr(10_000_000), "1,00,00,000");
    }

    #[test]
    fn seed_bookings_match_expected_totals() {
        let stats = aggregate_bookings(&seed_booking_requests());
        assert_eq!(stats.total_requests, 5);
        assert_eq!(stats.pending_requests, 2);
        assert_eq!(stats.accepted_revenue, 120_000);
    }
}
