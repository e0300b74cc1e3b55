//! Browser-facing layer
//!
//! Components here render the content in `core` and drive its state
//! machines from DOM events. Anything that touches the DOM directly is
//! gated behind `#[cfg(not(feature = "ssr"))]`.

pub mod carousel;
pub mod common;
pub mod confetti;
pub mod draggable;
pub mod icon;
pub mod markdown;
#[cfg(not(feature = "ssr"))]
pub mod observer;
pub mod pages;
pub mod presence;
pub mod reveal;
pub mod scheduler;
pub mod sections;
pub mod theme;
pub mod typewriter;

pub use carousel::Carousel;
pub use draggable::{DraggableBoard, DraggableNode};
pub use icon::{Icon, icons};
pub use reveal::Reveal;
pub use scheduler::Scheduler;
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
pub use typewriter::TypewriterText;
