//! UI Components
//!
//! Leptos components for the chore page.

mod chore_card;
mod create_chore_form;
mod error_banner;

pub use chore_card::{chore_card_key, ChoreCard};
pub use create_chore_form::CreateChoreForm;
pub use error_banner::ErrorBanner;
