//! Server-side HTML for the dashboard pages.

pub mod layout;
pub mod pages;

pub use layout::{escape, page};
pub use pages::{dashboard_page, players_page, teams_page};
