//! Application pages
//!
//! - Home (`/`)
//! - Deck (`/deck`)
//! - Terms and Privacy (`/terms`, `/privacy`)
//! - 404 fallback

mod deck;
mod home;
mod legal;
mod not_found;

pub use deck::DeckPage;
pub use home::HomePage;
pub use legal::{PrivacyPage, TermsPage};
pub use not_found::NotFoundPage;
