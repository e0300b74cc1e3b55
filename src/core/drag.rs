//! Pointer-driven positioning of decorative board nodes
//!
//! A [`DragState`] starts at a responsive initial placement and follows the
//! pointer while captured. The first real move flips a one-way latch after
//! which layout changes no longer reposition the node.

use derive_more::{Add, Sub};
use serde::Serialize;

use super::breakpoints::Responsive;

/// Offset in CSS pixels relative to the parent's content box
#[derive(Clone, Copy, Debug, Default, PartialEq, Add, Sub, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `transform` value for this position
    pub fn to_transform(self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Parent and node sizes used for clamping
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub parent_width: f64,
    pub parent_height: f64,
    pub node_width: f64,
    pub node_height: f64,
}

impl Bounds {
    /// Largest allowed offset on each axis. A node bigger than its parent
    /// gets a span of zero.
    pub fn max(&self) -> Position {
        Position {
            x: (self.parent_width - self.node_width).max(0.0),
            y: (self.parent_height - self.node_height).max(0.0),
        }
    }

    /// Constrain a position to `[0, parent - node]` on both axes
    pub fn clamp(&self, pos: Position) -> Position {
        let max = self.max();
        Position {
            x: pos.x.clamp(0.0, max.x),
            y: pos.y.clamp(0.0, max.y),
        }
    }
}

/// Where a node sits before the user has touched it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialPlacement {
    /// Same position at every width
    Fixed(Position),
    /// Position chosen per breakpoint
    Responsive(Responsive<Position>),
    /// Horizontally centered in the parent, y chosen per breakpoint
    CenteredX { y: Responsive<f64> },
}

impl InitialPlacement {
    /// Resolve against the current viewport and measured sizes
    pub fn resolve(&self, viewport_width: f64, parent_width: f64, node_width: f64) -> Position {
        match self {
            InitialPlacement::Fixed(pos) => *pos,
            InitialPlacement::Responsive(table) => table.resolve(viewport_width),
            InitialPlacement::CenteredX { y } => Position {
                x: ((parent_width - node_width) / 2.0).max(0.0),
                y: y.resolve(viewport_width),
            },
        }
    }
}

/// Drag state of a single node
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    placement: InitialPlacement,
    position: Position,
    /// Cursor minus node origin, recorded on pointer down
    grab_offset: Option<Position>,
    has_user_moved: bool,
}

impl DragState {
    /// Create a node at its base-breakpoint placement. Call
    /// [`DragState::reposition`] once real measurements are available.
    pub fn new(placement: InitialPlacement) -> Self {
        let position = placement.resolve(0.0, 0.0, 0.0);
        Self {
            placement,
            position,
            grab_offset: None,
            has_user_moved: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    pub fn has_user_moved(&self) -> bool {
        self.has_user_moved
    }

    /// Start a drag at the given cursor position
    pub fn pointer_down(&mut self, cursor: Position) {
        self.grab_offset = Some(cursor - self.position);
    }

    /// Follow the cursor. Returns `false` when no drag is in progress.
    pub fn pointer_move(&mut self, cursor: Position, bounds: Option<Bounds>) -> bool {
        let Some(offset) = self.grab_offset else {
            return false;
        };

        let next = cursor - offset;
        self.position = match bounds {
            Some(bounds) => bounds.clamp(next),
            None => next,
        };
        self.has_user_moved = true;
        true
    }

    /// End the drag (pointer up or cancel). The node stays where it is.
    pub fn pointer_up(&mut self) {
        self.grab_offset = None;
    }

    /// Recompute the responsive placement after a resize.
    ///
    /// Returns `true` if the position changed. Once the user has moved the
    /// node this never does anything again.
    pub fn reposition(&mut self, viewport_width: f64, parent_width: f64, node_width: f64) -> bool {
        if self.has_user_moved {
            return false;
        }

        let next = self
            .placement
            .resolve(viewport_width, parent_width, node_width);
        let changed = next != self.position;
        self.position = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds {
            parent_width: 1000.0,
            parent_height: 600.0,
            node_width: 260.0,
            node_height: 120.0,
        }
    }

    #[test]
    fn test_drag_follows_cursor_minus_grab_offset() {
        let mut node = DragState::new(InitialPlacement::Fixed(Position::new(100.0, 50.0)));

        node.pointer_down(Position::new(110.0, 70.0));
        assert!(node.is_dragging());

        assert!(node.pointer_move(Position::new(210.0, 170.0), None));
        assert_eq!(node.position(), Position::new(200.0, 150.0));

        node.pointer_up();
        assert!(!node.is_dragging());
        assert_eq!(node.position(), Position::new(200.0, 150.0));
    }

    #[test]
    fn test_move_without_pointer_down_is_ignored() {
        let mut node = DragState::new(InitialPlacement::Fixed(Position::new(10.0, 10.0)));

        assert!(!node.pointer_move(Position::new(500.0, 500.0), None));
        assert_eq!(node.position(), Position::new(10.0, 10.0));
        assert!(!node.has_user_moved());
    }

    #[test]
    fn test_clamping_keeps_node_inside_parent() {
        let mut node = DragState::new(InitialPlacement::Fixed(Position::new(0.0, 0.0)));
        node.pointer_down(Position::new(0.0, 0.0));

        node.pointer_move(Position::new(5000.0, -300.0), Some(bounds()));
        assert_eq!(node.position(), Position::new(740.0, 0.0));

        node.pointer_move(Position::new(-20.0, 9000.0), Some(bounds()));
        assert_eq!(node.position(), Position::new(0.0, 480.0));
    }

    #[test]
    fn test_clamping_with_node_larger_than_parent() {
        let tiny = Bounds {
            parent_width: 100.0,
            parent_height: 50.0,
            node_width: 260.0,
            node_height: 120.0,
        };

        assert_eq!(tiny.clamp(Position::new(40.0, 40.0)), Position::new(0.0, 0.0));
    }

    #[test]
    fn test_centered_placement() {
        let placement = InitialPlacement::CenteredX {
            y: Responsive::fixed(24.0).md(48.0),
        };

        assert_eq!(
            placement.resolve(1200.0, 1000.0, 260.0),
            Position::new(370.0, 48.0)
        );
        // never negative when the node is wider than the parent
        assert_eq!(placement.resolve(300.0, 200.0, 260.0), Position::new(0.0, 24.0));
    }

    #[test]
    fn test_reposition_until_latched() {
        let table = Responsive::fixed(Position::new(20.0, 300.0)).lg(Position::new(700.0, 320.0));
        let mut node = DragState::new(InitialPlacement::Responsive(table));
        assert_eq!(node.position(), Position::new(20.0, 300.0));

        assert!(node.reposition(1280.0, 1200.0, 260.0));
        assert_eq!(node.position(), Position::new(700.0, 320.0));
        assert!(!node.reposition(1280.0, 1200.0, 260.0));

        node.pointer_down(Position::new(710.0, 330.0));
        node.pointer_move(Position::new(760.0, 330.0), None);
        node.pointer_up();
        assert!(node.has_user_moved());

        assert!(!node.reposition(375.0, 375.0, 260.0));
        assert_eq!(node.position(), Position::new(750.0, 320.0));
    }

    #[test]
    fn test_transform_string() {
        assert_eq!(
            Position::new(12.5, -4.0).to_transform(),
            "translate(12.5px, -4px)"
        );
    }
}
