//! Common reusable UI components

pub mod button;
pub mod tabs;

pub use button::{ButtonSize, ButtonVariant, CtaLink, is_external};
pub use tabs::{TabPanel, Tabs};
