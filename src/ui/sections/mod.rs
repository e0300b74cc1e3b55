//! Home page sections
//!
//! Each section is one component whose copy defaults to the matching
//! content object in `core::content`.

pub mod collaboration;
pub mod feature_tabs;
pub mod final_cta;
pub mod footer;
pub mod heading;
pub mod hero;
pub mod meet_nobot;
pub mod pro;
pub mod templates;

pub use collaboration::Collaboration;
pub use feature_tabs::FeatureTabs;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use heading::{PillarCard, SectionHeading};
pub use hero::{Hero, Logo};
pub use meet_nobot::MeetNobot;
pub use pro::Pro;
pub use templates::Templates;
