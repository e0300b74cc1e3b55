//! Responsive breakpoint tables
//!
//! Mirrors the Tailwind breakpoints used by the stylesheet so that values
//! resolved in Rust line up with `md:` / `lg:` / `xl:` classes.

use derive_more::Display;
use serde::Serialize;

/// Named viewport breakpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[display("base")]
    Base,
    #[display("md")]
    Md,
    #[display("lg")]
    Lg,
    #[display("xl")]
    Xl,
}

impl Breakpoint {
    /// All breakpoints, smallest first
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Base,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Minimum viewport width (px) at which this breakpoint applies
    pub fn min_width(self) -> f64 {
        match self {
            Breakpoint::Base => 0.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 1024.0,
            Breakpoint::Xl => 1280.0,
        }
    }

    /// Largest breakpoint active at the given viewport width
    pub fn for_width(width: f64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Base)
    }
}

/// Read-only table mapping breakpoints to values
///
/// Only `base` is required. Resolution picks the largest defined breakpoint
/// that does not exceed the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Responsive<T> {
    pub base: T,
    pub md: Option<T>,
    pub lg: Option<T>,
    pub xl: Option<T>,
}

impl<T: Copy> Responsive<T> {
    /// Table with a single value for every width
    pub const fn fixed(base: T) -> Self {
        Self {
            base,
            md: None,
            lg: None,
            xl: None,
        }
    }

    pub fn md(mut self, value: T) -> Self {
        self.md = Some(value);
        self
    }

    pub fn lg(mut self, value: T) -> Self {
        self.lg = Some(value);
        self
    }

    pub fn xl(mut self, value: T) -> Self {
        self.xl = Some(value);
        self
    }

    /// Value defined exactly at a breakpoint, if any
    pub fn get(&self, bp: Breakpoint) -> Option<T> {
        match bp {
            Breakpoint::Base => Some(self.base),
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Resolve the table against a viewport width
    pub fn resolve(&self, width: f64) -> T {
        let active = Breakpoint::for_width(width);
        Breakpoint::ALL
            .into_iter()
            .rev()
            .filter(|bp| *bp <= active)
            .find_map(|bp| self.get(bp))
            .unwrap_or(self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_for_width() {
        assert_eq!(Breakpoint::for_width(0.0), Breakpoint::Base);
        assert_eq!(Breakpoint::for_width(767.9), Breakpoint::Base);
        assert_eq!(Breakpoint::for_width(768.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1023.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1024.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1920.0), Breakpoint::Xl);
    }

    #[test]
    fn test_breakpoint_display() {
        assert_eq!(Breakpoint::Base.to_string(), "base");
        assert_eq!(Breakpoint::Xl.to_string(), "xl");
    }

    #[test]
    fn test_resolve_falls_back_to_smaller_breakpoint() {
        let table = Responsive::fixed(10).lg(30);

        assert_eq!(table.resolve(320.0), 10);
        // md is not defined, falls back to base
        assert_eq!(table.resolve(800.0), 10);
        assert_eq!(table.resolve(1100.0), 30);
        // xl is not defined, falls back to lg
        assert_eq!(table.resolve(1600.0), 30);
    }

    #[test]
    fn test_resolve_every_breakpoint() {
        let table = Responsive::fixed(1).md(2).lg(3).xl(4);

        assert_eq!(table.resolve(100.0), 1);
        assert_eq!(table.resolve(900.0), 2);
        assert_eq!(table.resolve(1200.0), 3);
        assert_eq!(table.resolve(1300.0), 4);
    }
}
