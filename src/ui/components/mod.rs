pub mod artist_card;
pub mod badge;
pub mod booking_table;
pub mod roster_table;
pub mod stat_card;
pub mod toast;
