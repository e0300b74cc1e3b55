//! Outbound navigation targets

/// Web app: sign up / log in
pub const APP: &str = "https://app.nodalapp.com/";
/// Upgrade flow lives on the profile page of the app
pub const GO_PRO: &str = "https://app.nodalapp.com/profile";
pub const EMAIL: &str = "mailto:hello@nodalapp.com";
pub const X: &str = "https://x.com/nodal_app";
pub const INSTAGRAM: &str = "https://www.instagram.com/nodal_app/";
pub const AUTHOR: &str = "https://jacknycz.me";

/// In-page anchor of the pricing block
pub const PRICING_ANCHOR: &str = "#pricing";
