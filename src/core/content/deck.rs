//! Slides of the `/deck` page
//!
//! Text fields accept inline Markdown (`**bold**`), rendered by the deck page.

use serde::Serialize;

use super::Accent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SlideLayout {
    /// Single centered column
    Centered,
    /// Single left-aligned column
    Column,
    /// Two columns; `media_first` puts the image/highlights on the left
    Split { media_first: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SlideImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Icon + short statement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SlideHighlight {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SlidePlan {
    pub name: &'static str,
    pub accent: Accent,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeckSlide {
    pub kicker: Option<&'static str>,
    /// Heading lines, rendered with line breaks between them
    pub heading: &'static [&'static str],
    pub body: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub highlights: &'static [SlideHighlight],
    pub plans: &'static [SlidePlan],
    pub closing: Option<&'static str>,
    pub image: Option<SlideImage>,
    pub show_logo: bool,
    pub layout: SlideLayout,
}

impl DeckSlide {
    const EMPTY: DeckSlide = DeckSlide {
        kicker: None,
        heading: &[],
        body: &[],
        bullets: &[],
        highlights: &[],
        plans: &[],
        closing: None,
        image: None,
        show_logo: false,
        layout: SlideLayout::Column,
    };
}

pub const DECK_SLIDES: &[DeckSlide] = &[
    DeckSlide {
        body: &["a visual thinking platform for turning ideas into shareable stories"],
        show_logo: true,
        layout: SlideLayout::Centered,
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        kicker: Some("problem"),
        heading: &["ideas are easy to have, hard to explain"],
        body: &[
            "People lose time trying to explain ideas that live in notes,",
            "docs, and decks.",
            "Context gets scattered.",
            "Good thinking gets misunderstood or never shared at all.",
        ],
        closing: Some(
            "ideas don't fail because they're bad - they fail because they're hard to communicate",
        ),
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        kicker: Some("insight"),
        heading: &["the tools weren't built for how ideas actually evolve"],
        body: &[
            "Most tools stop at creation.",
            "Very few help people make sense of what they're thinking.",
        ],
        highlights: &[
            SlideHighlight {
                icon: "files",
                text: "Docs are **linear**",
            },
            SlideHighlight {
                icon: "presentation",
                text: "Whiteboards are **chaotic**",
            },
            SlideHighlight {
                icon: "robot",
                text: "AI tools generate **content** - not understanding",
            },
        ],
        layout: SlideLayout::Split { media_first: true },
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        kicker: Some("solution"),
        heading: &["thinking is non-linear. explaining shouldn't be."],
        body: &[
            "nodal lets people explore ideas freely - then turn that thinking into a clear story when they are ready.",
        ],
        closing: Some("from a collection of thoughts to clear communication - **in one place**"),
        image: Some(SlideImage {
            src: "/deck/solution-image.png",
            alt: "Laptop illustration showing nodal interface",
        }),
        layout: SlideLayout::Split { media_first: false },
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        kicker: Some("product"),
        heading: &["how nodal creates clarity"],
        body: &[
            "A creator connects scattered **nodes** (docs, media, links) into a visual **board**, then uses **Story Mode** to explain the idea clearly without rebuilding it as a deck.",
        ],
        bullets: &[
            "create **boards** to explore ideas",
            "add **nodes** to create context",
            "use **AI** to expand or summarize thinking",
            "turn boards into stories with **Story Mode**",
            "keep work private or share when ready",
        ],
        image: Some(SlideImage {
            src: "/deck/product-image.png",
            alt: "Editing a node on a board",
        }),
        layout: SlideLayout::Split { media_first: true },
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        kicker: Some("competitive landscape"),
        body: &[
            "thinking → understanding → storytelling",
            "Most tools focus on one step.",
            "nodal connects the full flow.",
        ],
        image: Some(SlideImage {
            src: "/deck/competitive-landscape-image.png",
            alt: "Competitive landscape 2x2 matrix diagram",
        }),
        layout: SlideLayout::Split { media_first: false },
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        kicker: Some("business model"),
        heading: &["designed to grow with usage"],
        body: &[
            "nodal follows a freemium model.",
            "the product is designed around:",
        ],
        bullets: &["individual use first", "future expansion into team plans"],
        plans: &[
            SlidePlan {
                name: "Free",
                accent: Accent::Secondary,
                items: &["core boards & nodes", "personal use"],
            },
            SlidePlan {
                name: "Pro",
                accent: Accent::Tertiary,
                items: &["collaboration", "advanced features", "more AI usage"],
            },
        ],
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        kicker: Some("who it's for"),
        heading: &["built for people who think in ideas, not documents"],
        bullets: &[
            "creators and writers",
            "founders and builders",
            "educators and students",
            "teams working through complex ideas",
        ],
        closing: Some(
            "nodal is for anyone who needs to explore complexity and explain ideas clearly",
        ),
        layout: SlideLayout::Centered,
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        kicker: Some("why now"),
        heading: &["AI accelerates ideas -", "understanding is still human"],
        body: &[
            "LLMs make generating ideas instant - but making sense of them still takes thought.",
            "As tools speed up creation, clarity and communication have become the bottleneck.",
        ],
        closing: Some("**nodal** exists for the part in between."),
        ..DeckSlide::EMPTY
    },
    DeckSlide {
        heading: &["ideas matter most when", "they're understood"],
        body: &[
            "nodal helps ideas move from a collection of thoughts to a clear communication - in one place.",
        ],
        closing: Some("go idea."),
        show_logo: true,
        layout: SlideLayout::Centered,
        ..DeckSlide::EMPTY
    },
];

/// Counter shown in the corner of the deck, 1-based
pub fn slide_counter(current: usize) -> String {
    format!("{} / {}", current.clamp(1, DECK_SLIDES.len()), DECK_SLIDES.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_counter_is_clamped() {
        assert_eq!(slide_counter(1), "1 / 10");
        assert_eq!(slide_counter(10), "10 / 10");
        assert_eq!(slide_counter(0), "1 / 10");
        assert_eq!(slide_counter(42), "10 / 10");
    }

    #[test]
    fn test_split_slides_have_media() {
        for slide in DECK_SLIDES {
            if matches!(slide.layout, SlideLayout::Split { .. }) {
                assert!(slide.image.is_some() || !slide.highlights.is_empty());
            }
        }
    }
}
