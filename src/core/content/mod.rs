//! Typed copy for every section of the site
//!
//! Sections are single parameterized components; what differs between pages
//! lives here as plain data.

mod deck;
mod home;
mod legal;
pub mod links;

pub use deck::{DECK_SLIDES, DeckSlide, SlideHighlight, SlideImage, SlideLayout, SlidePlan, slide_counter};
pub use home::*;
pub use legal::{LegalDoc, PRIVACY, TERMS};

use serde::Serialize;

/// Button or link with an optional caption underneath
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub note: Option<&'static str>,
}

/// Heading block at the top of a section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionIntro {
    pub heading: &'static str,
    pub subheading: &'static str,
}

/// Card with an icon, a title and one or two lines of copy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// Brand accent used by template cards and deck plans
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Primary,
    Secondary,
    Tertiary,
}

impl Accent {
    pub fn bg_class(self) -> &'static str {
        match self {
            Accent::Primary => "bg-primary-500",
            Accent::Secondary => "bg-secondary-500",
            Accent::Tertiary => "bg-tertiary-500",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Primary => "text-primary-600 dark:text-primary-400",
            Accent::Secondary => "text-secondary-600 dark:text-secondary-400",
            Accent::Tertiary => "text-tertiary-600 dark:text-tertiary-400",
        }
    }

    pub fn border_class(self) -> &'static str {
        match self {
            Accent::Primary => "border-primary-200 dark:border-primary-800 hover:border-primary-400",
            Accent::Secondary => {
                "border-secondary-200 dark:border-secondary-800 hover:border-secondary-400"
            }
            Accent::Tertiary => {
                "border-tertiary-200 dark:border-tertiary-800 hover:border-tertiary-400"
            }
        }
    }
}

/// Pricing tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_has_ten_slides() {
        assert_eq!(DECK_SLIDES.len(), 10);
    }

    #[test]
    fn test_templates_have_unique_ids() {
        let mut ids: Vec<_> = TEMPLATES.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn test_every_template_lists_features() {
        for template in TEMPLATES {
            assert!(template.features.len() >= 2, "{} has too few features", template.id);
        }
    }

    #[test]
    fn test_content_serializes() {
        let json = serde_json::to_value(HOME_HERO).expect("hero serializes");
        assert_eq!(json["primary_cta"]["href"], links::APP);

        let plans = serde_json::to_value(PRICING_PLANS).expect("plans serialize");
        assert_eq!(plans.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_outbound_ctas_point_at_app_origin() {
        assert!(HOME_HERO.primary_cta.href.starts_with(links::APP));
        assert_eq!(PRO.cta.href, links::GO_PRO);
    }
}
