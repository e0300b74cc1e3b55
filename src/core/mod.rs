//! Platform-independent state and content for the Nodal marketing site
//!
//! Everything in here is plain Rust with no DOM access, so the widget logic
//! (carousel looping, node dragging, timed effects) is testable without a browser.

pub mod breakpoints;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod confetti;
pub mod content;
pub mod drag;
pub mod presence;
pub mod sequence;
pub mod typewriter;
#[cfg(test)]
mod tests;

pub use breakpoints::{Breakpoint, Responsive};
pub use carousel::{CarouselPhase, DisplayedSlide, DragOutcome, LoopingCarousel};
pub use drag::{Bounds, DragState, InitialPlacement, Position};
pub use sequence::Step;
pub use typewriter::Typewriter;
