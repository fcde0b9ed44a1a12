pub mod add_review;
pub mod detail;
pub mod listing;
pub mod login;
