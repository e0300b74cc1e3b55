//! Copy for the home page sections

use serde::Serialize;

use super::links;
use super::{Accent, CallToAction, Pillar, PricingPlan, SectionIntro};
use crate::core::breakpoints::Responsive;
use crate::core::drag::{InitialPlacement, Position};

// ============================================================================
// Hero
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    /// Phrases cycled by the typewriter next to the logo. A single phrase
    /// is shown statically.
    pub tagline_phrases: &'static [&'static str],
    pub headline: &'static str,
    pub paragraphs: &'static [&'static str],
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
}

pub const HOME_HERO: HeroContent = HeroContent {
    tagline_phrases: &[
        "for ideas.",
        "a visual thinking tool.",
        "boards & nodes.",
        "your creative partner.",
        "for sharing ideas.",
    ],
    headline: "nodal is a place to put your ideas down on a board and organize them how you see fit. it’s flexible.",
    paragraphs: &[
        "seriously flexible. jot down ideas, drop in files, quickly save summarized links and more to get that idea down while it makes sense. tasks, videos, images, documents, and more. all in one place.",
        "drag and drop - for ideas.",
    ],
    primary_cta: CallToAction {
        label: "Try Nodal (it's free)",
        href: links::APP,
        note: Some("like you don't need a credit card"),
    },
    secondary_cta: CallToAction {
        label: "Checkout the Fancy Stuff",
        href: links::PRICING_ANCHOR,
        note: Some("if you're feeling $9.99 kinda ambitious"),
    },
};

/// What a demo node carries below its title
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeMedia {
    Text(&'static str),
    Image {
        src: &'static str,
        caption: &'static str,
        meta: &'static str,
    },
    Video {
        src: &'static str,
        caption: &'static str,
        meta: &'static str,
    },
}

/// Decorative node on the hero board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardNode {
    pub id: &'static str,
    pub title: Option<&'static str>,
    pub media: NodeMedia,
    pub footnote: Option<&'static str>,
    pub placement: InitialPlacement,
}

/// Demo nodes scattered over the hero. On narrow screens they stack below
/// the copy instead of covering it.
pub fn board_nodes() -> [BoardNode; 4] {
    [
        BoardNode {
            id: "welcome",
            title: Some("hey! welcome to the board"),
            media: NodeMedia::Text(
                "I'm a node! well, like a little sample node - real nodes do all kinds of cool stuff.",
            ),
            footnote: Some("PS TRY TO DRAG US!"),
            placement: InitialPlacement::CenteredX {
                y: Responsive::fixed(24.0),
            },
        },
        BoardNode {
            id: "todo",
            title: Some("A kinder to-do list"),
            media: NodeMedia::Text(
                "Plan like you’re human. Fewer tasks, more momentum. Add one thing you can finish now.",
            ),
            footnote: None,
            placement: InitialPlacement::Responsive(
                Responsive::fixed(Position::new(16.0, 560.0))
                    .md(Position::new(420.0, 380.0))
                    .lg(Position::new(700.0, 320.0)),
            ),
        },
        BoardNode {
            id: "image",
            title: None,
            media: NodeMedia::Image {
                src: "/nodal.png",
                caption: "Images? Of course.jpg",
                meta: "420 KB • image/png",
            },
            footnote: None,
            placement: InitialPlacement::Responsive(
                Responsive::fixed(Position::new(40.0, 720.0))
                    .md(Position::new(480.0, 60.0))
                    .lg(Position::new(940.0, 60.0)),
            ),
        },
        BoardNode {
            id: "video",
            title: None,
            media: NodeMedia::Video {
                src: "/media/nodal-test.mp4",
                caption: "nodes can hold all kinds of stuff - like this video",
                meta: "https://youtu.be/just-an-example",
            },
            footnote: None,
            placement: InitialPlacement::Responsive(
                Responsive::fixed(Position::new(24.0, 960.0))
                    .md(Position::new(300.0, 520.0))
                    .lg(Position::new(600.0, 460.0)),
            ),
        },
    ]
}

// ============================================================================
// Feature tabs
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureTab {
    pub title: &'static str,
    pub description: &'static str,
    pub video: &'static str,
}

pub const FEATURE_TABS_INTRO: SectionIntro = SectionIntro {
    heading: "everything in its place",
    subheading: "Find, create, and organize without friction. Switch the tabs to preview.",
};

pub const FEATURE_TABS: &[FeatureTab] = &[
    FeatureTab {
        title: "Search everything",
        description: "Does your search zoom? Our search zooms. Search all your docs, notes, tasks, in one place.",
        video: "/media/search-and-zoom.mp4",
    },
    FeatureTab {
        title: "Right-click superpowers",
        description: "We made creating as simple as a click - just the right one.",
        video: "/media/right-click-superpowers.mp4",
    },
    FeatureTab {
        title: "Write with confidence",
        description: "Load your board up with everything your next project could possibly need.",
        video: "/media/write-with-confidence.mp4",
    },
];

// ============================================================================
// Meet Nobot
// ============================================================================

pub const NOBOT_INTRO: SectionIntro = SectionIntro {
    heading: "meet nobot",
    subheading: "we didn't just bolt-on a chatbot - Nobot is one with the board.",
};

pub const NOBOT_PILLARS: &[Pillar] = &[
    Pillar {
        icon: "nobot",
        title: "board-aware intelligence",
        lines: &[
            "Nobot understands your board’s structure, your goals, and your content. He connects dots across your nodes, analyzes attached docs, and thinks in context - not isolation.",
        ],
    },
    Pillar {
        icon: "database",
        title: "node generation",
        lines: &[
            "Turn ideas into structure instantly. Ask Nobot to “make nodes,” and it’ll generate organized thoughts, lists, or outlines that fit your board - not random AI spaghetti.",
        ],
    },
    Pillar {
        icon: "share-network",
        title: "thinking with a teammate",
        lines: &[
            "AI that feels like a teammate. Bounce ideas, get fresh takes, ask quick questions, and expand your thinking - all without breaking flow.",
        ],
    },
];

// ============================================================================
// Templates carousel
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub features: &'static [&'static str],
}

pub const TEMPLATES_INTRO: SectionIntro = SectionIntro {
    heading: "templates & starters",
    subheading: "Jump in with a head start. Nodal comes with pre‑made boards so you can focus on ideas, not setup.",
};

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "vacation",
        title: "Vacation to Greece",
        subtitle: "✈️ Travel Planning",
        description: "Itinerary, must‑see spots, and packing list ready to customize.",
        icon: "plane",
        accent: Accent::Primary,
        features: &[
            "Pre-planned itinerary",
            "Budget tracker",
            "Packing checklist",
            "Local recommendations",
        ],
    },
    Template {
        id: "research",
        title: "My Research Paper",
        subtitle: "📚 Academic Structure",
        description: "Sections outlined with sources placeholder nodes.",
        icon: "book-open",
        accent: Accent::Secondary,
        features: &[
            "Chapter outlines",
            "Citation management",
            "Research timeline",
            "Source organization",
        ],
    },
    Template {
        id: "fantasy",
        title: "Fantasy Football Draft",
        subtitle: "🏈 Sports Strategy",
        description: "Player tiers, strategy notes, and live update space.",
        icon: "trophy",
        accent: Accent::Tertiary,
        features: &["Player rankings", "Draft strategy", "Team analysis", "Trade tracker"],
    },
    Template {
        id: "brainstorm",
        title: "Brainstorm Board",
        subtitle: "🧠 Free Thinking",
        description: "Empty but structured for free‑flow thinking.",
        icon: "lightbulb",
        accent: Accent::Primary,
        features: &[
            "Idea clusters",
            "Mind mapping zones",
            "Priority matrix",
            "Action items",
        ],
    },
    Template {
        id: "launch",
        title: "Product Launch",
        subtitle: "🚀 Go-to-Market",
        description: "Milestones, messaging, and owners mapped out on one board.",
        icon: "rocket",
        accent: Accent::Secondary,
        features: &["Launch checklist", "Audience map", "Messaging drafts", "Retro notes"],
    },
    Template {
        id: "story",
        title: "Story Outline",
        subtitle: "✍️ Creative Writing",
        description: "Characters, beats, and scenes you can rearrange freely.",
        icon: "pen",
        accent: Accent::Tertiary,
        features: &["Character sheets", "Plot beats", "Scene cards", "World notes"],
    },
];

// ============================================================================
// Collaboration demo
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CollaborationContent {
    pub intro: SectionIntro,
    pub points: &'static [&'static str],
    pub comment: &'static str,
}

pub const COLLABORATION: CollaborationContent = CollaborationContent {
    intro: SectionIntro {
        heading: "collaborate in real time",
        subheading: "Because great ideas rarely happen alone.",
    },
    points: &[
        "Share your board with a friend, a teammate, or your fantasy football league.",
        "See live cursors, comment on nodes, and lock in updates with real‑time syncing.",
        "Private by default. Share only what you want, with who you want.",
    ],
    comment: "love this direction - let's add the budget node here",
};

// ============================================================================
// Pro + pricing
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProContent {
    pub kicker: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub tagline: &'static str,
    pub cta: CallToAction,
    pub pillars: &'static [Pillar],
    pub quote: &'static str,
    pub quote_author: &'static str,
    pub quote_footnote: &'static str,
}

pub const PRO: ProContent = ProContent {
    kicker: "Nodal Pro",
    heading: "the mind map, upgraded",
    body: "Invite your friends, share your boards, and co-edit live. Faster AI, more power, resources and tools for thinkers who don’t stop at “idea.”",
    tagline: "It's Nodal with your friends and your files.",
    cta: CallToAction {
        label: "Go Pro Now",
        href: links::GO_PRO,
        note: None,
    },
    pillars: &[
        Pillar {
            icon: "nobot",
            title: "Smarter AI",
            lines: &[
                "The latest models, custom personality sliders, and per-board memory. More options, more integrations.",
                "Think deeper.",
            ],
        },
        Pillar {
            icon: "database",
            title: "More Power",
            lines: &[
                "Unlimited boards, 100k AI tokens per month, 10gb of storage. More storage, more power.",
                "Think bigger.",
            ],
        },
        Pillar {
            icon: "share-network",
            title: "Real Collaboration",
            lines: &[
                "Invite teammates, share boards, and co-edit live. Assign tasks and keep everyone in the loop.",
                "Think together.",
            ],
        },
    ],
    quote: "“It looks so cool! I have no idea how to use it, but it looks cool.”",
    quote_author: "- Literally my mom",
    quote_footnote: "Guaranteed to make you look cool. Do it for science.",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingContent {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub footnote: &'static str,
    pub side_heading: &'static str,
    pub side_body: &'static str,
    pub side_cta: CallToAction,
}

pub const PRICING: PricingContent = PricingContent {
    heading: "Go Pro. Collaboration and More Tools.",
    subheading: "Start free, upgrade when you’re ready.",
    footnote: "Your data stays yours. No ads. No nonsense.",
    side_heading: "Ready to go Pro?",
    side_body: "Smoother rendering. Deeper AI. Collaboration that clicks.",
    side_cta: CallToAction {
        label: "Go Pro",
        href: links::GO_PRO,
        note: None,
    },
};

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Free",
        price: "$0",
        features: &["Unlimited boards (fair use)", "GPT-3.5", "Solo workspace"],
        highlighted: false,
    },
    PricingPlan {
        name: "Pro",
        price: "$9.99/mo",
        features: &[
            "Latest AI models",
            "Collaboration (invite teammates, share boards, co-edit live)",
            "100k AI tokens per month",
            "10gb of storage",
            "Custom API key integration",
            "Token usage transparency and refill bundles",
        ],
        highlighted: true,
    },
];

// ============================================================================
// Final CTA + footer
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FinalCtaContent {
    pub heading: &'static str,
    pub highlight: &'static str,
    pub body: &'static str,
    pub cta: CallToAction,
    /// Delay between the confetti burst and leaving for the app
    pub redirect_after_ms: u64,
}

pub const FINAL_CTA: FinalCtaContent = FinalCtaContent {
    heading: "if you made it this far...",
    highlight: "click the button",
    body: "or don't, it is free though - and most people think it's nifty at the very least.",
    cta: CallToAction {
        label: "start a board",
        href: links::APP,
        note: Some("the button makes confetti too"),
    },
    redirect_after_ms: 1500,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const FOOTER_SOCIAL: &[SocialLink] = &[
    SocialLink {
        label: "Email",
        icon: "envelope",
        href: links::EMAIL,
    },
    SocialLink {
        label: "X",
        icon: "x-logo",
        href: links::X,
    },
    SocialLink {
        label: "Instagram",
        icon: "instagram-logo",
        href: links::INSTAGRAM,
    },
];

pub const FOOTER_LEGAL: &[(&str, &str)] = &[
    ("Contact", links::EMAIL),
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
];

pub const FOOTER_TAGLINE: &str = "go idea.";
pub const FOOTER_MOTTO: &str = "“AI in service of ideas.” ✦ “Smarter tools, not louder ones.”";
