use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name without .svg)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icons used by the site chrome. Content icons are named in `core::content`.
pub mod icons {
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const CARET_LEFT: &str = "caret-left";
    pub const CARET_RIGHT: &str = "caret-right";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const CHECK: &str = "check";
    pub const CHAT: &str = "chat-circle";
}
