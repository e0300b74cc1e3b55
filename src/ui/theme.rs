//! Theme context module for managing dark/light/automatic theme
//!
//! Provides:
//! - ThemeMode enum (Auto, Dark, Light)
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence
//!
//! The `dark` class on `<html>` is owned by a single effect created in
//! [`provide_theme_context`]; components only read [`ThemeContext::is_dark`].

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

const STORAGE_KEY: &str = "nodal-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a persisted value; anything unknown means `Auto`
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }

    /// Explicit mode to switch to from the current effective theme
    pub fn toggled(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Whether the current effective theme is dark (considering auto mode)
    pub is_dark: Memo<bool>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        persist_theme(mode);
    }

    /// Flip between dark and light, leaving auto mode
    pub fn toggle(&self) {
        self.set_mode(ThemeMode::toggled(self.is_dark.get_untracked()));
    }
}

fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, mode.as_str());
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (mode, STORAGE_KEY);
    }
}

/// Load theme from localStorage
fn load_persisted_theme() -> ThemeMode {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                return ThemeMode::parse(&value);
            }
        }
    }
    ThemeMode::Auto
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(load_persisted_theme());
    let system_prefers_dark = RwSignal::new(detect_system_prefers_dark());

    let is_dark = Memo::new(move |_| match mode.get() {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::Auto => system_prefers_dark.get(),
    });

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
    };

    // Listen for system theme changes
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                    move |e: web_sys::MediaQueryListEvent| {
                        system_prefers_dark.set(e.matches());
                    },
                );

                let _ = media_query
                    .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

                crate::ui::observer::hold_until_cleanup((media_query, handler));
            }
        }
    }

    // Apply the dark class to <html> initially and on changes
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let dark = is_dark.get();
            if let Some(html) = document().document_element() {
                let class_list = html.class_list();
                if dark {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_known_modes() {
        for mode in [ThemeMode::Auto, ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::parse(mode.as_str()), mode);
        }
        assert_eq!(ThemeMode::parse("sepia"), ThemeMode::Auto);
    }

    #[test]
    fn test_toggle_leaves_auto_mode() {
        assert_eq!(ThemeMode::toggled(true), ThemeMode::Light);
        assert_eq!(ThemeMode::toggled(false), ThemeMode::Dark);
    }
}
