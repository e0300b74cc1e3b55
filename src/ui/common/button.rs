use leptos::prelude::*;

use crate::core::content::CallToAction;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled brand button
    Primary,
    /// Outlined button
    Secondary,
    /// Text-only link
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-base btn-primary",
            ButtonVariant::Secondary => "btn-base btn-secondary",
            ButtonVariant::Ghost => "btn-base btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Whether a link leaves the site
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("mailto:")
}

fn link_classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    [variant.class(), size.class(), class]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Call-to-action link, rendered as a button, with its caption underneath
#[component]
pub fn CtaLink(
    cta: CallToAction,
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Additional CSS classes for the link
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let external = is_external(cta.href) && !cta.href.starts_with("mailto:");

    view! {
        <div class="inline-flex flex-col items-center gap-2">
            <a
                href=cta.href
                class=link_classes(variant, size, class)
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
            >
                {cta.label}
            </a>
            {cta.note.map(|note| view! {
                <span class="text-xs text-zinc-500 dark:text-zinc-400">{note}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external() {
        assert!(is_external("https://app.nodalapp.com/"));
        assert!(is_external("mailto:hello@nodalapp.com"));
        assert!(!is_external("#pricing"));
        assert!(!is_external("/terms"));
    }

    #[test]
    fn test_link_classes_skip_empty_parts() {
        assert_eq!(
            link_classes(ButtonVariant::Primary, ButtonSize::Medium, ""),
            "btn-base btn-primary"
        );
        assert_eq!(
            link_classes(ButtonVariant::Ghost, ButtonSize::Large, "mt-4"),
            "btn-base btn-ghost btn-lg mt-4"
        );
    }
}
