//! Looping carousel state machine
//!
//! The track shows `[tail clones] + [real slides] + [head clones]`. Moving past
//! either end animates into a clone block, and once the animation finishes the
//! index silently jumps by `N` to the identical real slide. The UI only has to
//! translate the track by [`LoopingCarousel::translate_offset`] and toggle the
//! CSS transition according to [`LoopingCarousel::transition_enabled`].

use serde::Serialize;

/// Viewport width (px) from which three slides are visible
pub const LG_MIN_WIDTH: f64 = 1024.0;
/// Viewport width (px) from which two slides are visible
pub const MD_MIN_WIDTH: f64 = 768.0;
/// Fraction of a slide step a drag must travel to commit
pub const DRAG_COMMIT_RATIO: f64 = 0.25;
/// Pointer travel (px) below which a press still counts as a click
pub const DRAG_SLOP_PX: f64 = 6.0;

/// Carousel command bound to a keyboard key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Prev,
}

/// Map a `KeyboardEvent::key` value to a carousel command
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowRight" => Some(KeyAction::Next),
        "ArrowLeft" => Some(KeyAction::Prev),
        _ => None,
    }
}

/// Number of slides visible at once for a viewport width
pub fn items_per_view_for_width(width: f64) -> usize {
    if width >= LG_MIN_WIDTH {
        3
    } else if width >= MD_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Width of one slide inside a viewport of `viewport_width`
pub fn slide_width(viewport_width: f64, gap: f64, items_per_view: usize) -> f64 {
    let per_view = items_per_view.max(1) as f64;
    ((viewport_width - gap * (per_view - 1.0)) / per_view).max(0.0)
}

/// Distance the track moves for one slide (`slide_width + gap`)
pub fn slide_step(viewport_width: f64, gap: f64, items_per_view: usize) -> f64 {
    slide_width(viewport_width, gap, items_per_view) + gap
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum CarouselPhase {
    /// Resting on a slide
    Settled,
    /// Track follows the pointer
    Dragging { start_x: f64, live_offset: f64 },
    /// Animating towards `target`, waiting for `transition_end`
    Snapping { target: usize },
}

/// What a released drag resolved to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DragOutcome {
    Next,
    Prev,
    SnapBack,
}

/// One entry of the rendered track
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayedSlide {
    /// Unique key, distinct between a clone and the slide it copies
    pub key: String,
    /// Index into the real slides whose content this entry shows
    pub real_index: usize,
    pub is_clone: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoopingCarousel {
    real_count: usize,
    items_per_view: usize,
    clones_count: usize,
    current_index: usize,
    phase: CarouselPhase,
    transition_enabled: bool,
}

impl LoopingCarousel {
    pub fn new(real_count: usize, items_per_view: usize) -> Self {
        let items_per_view = items_per_view.max(1);
        let clones_count = items_per_view.min(real_count);
        Self {
            real_count,
            items_per_view,
            clones_count,
            current_index: clones_count,
            phase: CarouselPhase::Settled,
            transition_enabled: true,
        }
    }

    pub fn real_count(&self) -> usize {
        self.real_count
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn clones_count(&self) -> usize {
        self.clones_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging { .. })
    }

    /// Length of the rendered track, clones included
    pub fn displayed_len(&self) -> usize {
        self.real_count + 2 * self.clones_count
    }

    /// Real slide shown at a track position
    pub fn real_index_at(&self, displayed: usize) -> usize {
        if self.real_count == 0 {
            return 0;
        }
        (displayed + self.real_count - self.clones_count % self.real_count) % self.real_count
    }

    /// Rendered track: tail clones, real slides, head clones
    pub fn displayed_slides(&self) -> Vec<DisplayedSlide> {
        let n = self.real_count;
        let c = self.clones_count;

        let tail = (0..c).map(|i| DisplayedSlide {
            key: format!("clone-tail-{i}"),
            real_index: n - c + i,
            is_clone: true,
        });
        let real = (0..n).map(|i| DisplayedSlide {
            key: format!("slide-{i}"),
            real_index: i,
            is_clone: false,
        });
        let head = (0..c).map(|j| DisplayedSlide {
            key: format!("clone-head-{j}"),
            real_index: j,
            is_clone: true,
        });

        tail.chain(real).chain(head).collect()
    }

    /// Zero-based real slide currently in front
    pub fn real_position(&self) -> usize {
        if self.real_count == 0 {
            return 0;
        }
        self.real_index_at(self.current_index)
    }

    /// `(k + 1, N)` for the slide in front
    pub fn progress(&self) -> (usize, usize) {
        if self.real_count == 0 {
            return (0, 0);
        }
        (self.real_position() + 1, self.real_count)
    }

    pub fn progress_label(&self) -> String {
        let (current, total) = self.progress();
        format!("{current} / {total}")
    }

    /// Track translation (px) for the resting index
    pub fn translate_offset(&self, step_px: f64) -> f64 {
        -(self.current_index as f64) * step_px
    }

    /// Track translation (px) to render right now, following the pointer
    /// while dragging
    pub fn live_offset(&self, step_px: f64) -> f64 {
        match self.phase {
            CarouselPhase::Dragging { live_offset, .. } => live_offset,
            _ => self.translate_offset(step_px),
        }
    }

    /// Advance one slide. Returns `false` if nothing moved.
    pub fn next(&mut self) -> bool {
        if self.real_count == 0 || self.is_dragging() {
            return false;
        }
        if self.current_index + 1 >= self.displayed_len() {
            return false;
        }
        self.current_index += 1;
        self.start_snap();
        true
    }

    /// Go back one slide. Returns `false` if nothing moved.
    pub fn prev(&mut self) -> bool {
        if self.real_count == 0 || self.is_dragging() {
            return false;
        }
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.start_snap();
        true
    }

    fn start_snap(&mut self) {
        self.transition_enabled = true;
        self.phase = CarouselPhase::Snapping {
            target: self.current_index,
        };
    }

    /// Called when the track's CSS transition ends.
    ///
    /// Jumps out of a clone block to the identical real slide. Returns `true`
    /// when a jump happened; the transition is then disabled until
    /// [`LoopingCarousel::reenable_transition`] runs on the next frame.
    pub fn transition_end(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.phase = CarouselPhase::Settled;
        self.normalize()
    }

    /// Move the index out of a clone block onto the identical real slide.
    /// Returns `true` when it moved; the transition is disabled so the jump
    /// is not animated.
    fn normalize(&mut self) -> bool {
        let n = self.real_count;
        let c = self.clones_count;
        if n == 0 {
            return false;
        }

        let corrected = if self.current_index >= n + c {
            self.current_index - n
        } else if self.current_index < c {
            self.current_index + n
        } else {
            return false;
        };

        self.current_index = corrected;
        self.transition_enabled = false;
        true
    }

    /// Turn the transition back on after a silent jump
    pub fn reenable_transition(&mut self) {
        self.transition_enabled = true;
    }

    /// Pointer pressed on the track
    pub fn drag_start(&mut self, x: f64, step_px: f64) {
        if self.real_count == 0 {
            return;
        }
        // A press mid-snap cancels the CSS transition, so `transitionend`
        // never arrives to pull the index back from a clone block.
        self.normalize();
        self.transition_enabled = false;
        self.phase = CarouselPhase::Dragging {
            start_x: x,
            live_offset: self.translate_offset(step_px),
        };
    }

    /// Pointer moved while dragging. Returns the translation to apply.
    pub fn drag_move(&mut self, x: f64, step_px: f64) -> f64 {
        let base = self.translate_offset(step_px);
        if let CarouselPhase::Dragging {
            start_x,
            live_offset,
        } = &mut self.phase
        {
            *live_offset = base + (x - *start_x);
            *live_offset
        } else {
            base
        }
    }

    /// Whether the pointer has travelled far enough from the press for the
    /// gesture to be a drag rather than a click
    pub fn drag_past_slop(&self, x: f64) -> bool {
        match self.phase {
            CarouselPhase::Dragging { start_x, .. } => (x - start_x).abs() > DRAG_SLOP_PX,
            _ => false,
        }
    }

    /// Pointer released. Commits to a neighbour past a quarter step,
    /// otherwise returns to the pre-drag offset.
    pub fn drag_end(&mut self, x: f64, step_px: f64) -> DragOutcome {
        let CarouselPhase::Dragging { start_x, .. } = self.phase else {
            return DragOutcome::SnapBack;
        };
        self.phase = CarouselPhase::Settled;

        let delta = x - start_x;
        let threshold = step_px * DRAG_COMMIT_RATIO;

        if delta < -threshold && self.next() {
            DragOutcome::Next
        } else if delta > threshold && self.prev() {
            DragOutcome::Prev
        } else {
            self.normalize();
            self.transition_enabled = true;
            DragOutcome::SnapBack
        }
    }

    /// Apply a new items-per-view after a resize, keeping the same real
    /// slide in front. Returns `true` if the layout changed.
    pub fn set_items_per_view(&mut self, items_per_view: usize) -> bool {
        let items_per_view = items_per_view.max(1);
        if items_per_view == self.items_per_view {
            return false;
        }

        let position = self.real_position();
        self.items_per_view = items_per_view;
        self.clones_count = items_per_view.min(self.real_count);
        self.current_index = self.clones_count + position;
        self.phase = CarouselPhase::Settled;
        self.transition_enabled = false;
        true
    }

    /// Whether an auto-advance tick may move the carousel
    pub fn can_auto_advance(&self) -> bool {
        self.real_count > 1 && matches!(self.phase, CarouselPhase::Settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_view_breakpoints() {
        assert_eq!(items_per_view_for_width(375.0), 1);
        assert_eq!(items_per_view_for_width(768.0), 2);
        assert_eq!(items_per_view_for_width(1023.0), 2);
        assert_eq!(items_per_view_for_width(1024.0), 3);
    }

    #[test]
    fn test_slide_step() {
        // 3 per view, 24px gaps: (1000 - 48) / 3 = 317.33..
        let width = slide_width(1000.0, 24.0, 3);
        assert!((width - 317.333).abs() < 0.01);
        assert!((slide_step(1000.0, 24.0, 3) - (width + 24.0)).abs() < f64::EPSILON);
        assert_eq!(slide_width(300.0, 16.0, 1), 300.0);
    }

    #[test]
    fn test_initial_state() {
        let c = LoopingCarousel::new(10, 3);
        assert_eq!(c.clones_count(), 3);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.progress_label(), "1 / 10");
        assert!(c.transition_enabled());
        assert_eq!(c.phase(), CarouselPhase::Settled);
    }

    #[test]
    fn test_clones_capped_by_real_count() {
        let c = LoopingCarousel::new(2, 3);
        assert_eq!(c.clones_count(), 2);
        assert_eq!(c.displayed_len(), 6);
    }

    #[test]
    fn test_displayed_slides_layout() {
        let c = LoopingCarousel::new(5, 2);
        let slides = c.displayed_slides();
        let reals: Vec<_> = slides.iter().map(|s| s.real_index).collect();

        assert_eq!(reals, vec![3, 4, 0, 1, 2, 3, 4, 0, 1]);
        assert_eq!(slides[0].key, "clone-tail-0");
        assert_eq!(slides[2].key, "slide-0");
        assert_eq!(slides[7].key, "clone-head-0");
        assert!(slides[1].is_clone);
        assert!(!slides[6].is_clone);

        let mut keys: Vec<_> = slides.iter().map(|s| s.key.clone()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), slides.len());
    }

    #[test]
    fn test_real_index_at_matches_displayed_slides() {
        let c = LoopingCarousel::new(7, 3);
        for (i, slide) in c.displayed_slides().iter().enumerate() {
            assert_eq!(c.real_index_at(i), slide.real_index);
        }
    }

    #[test]
    fn test_next_wraps_through_head_clone() {
        let mut c = LoopingCarousel::new(4, 1);
        for _ in 0..4 {
            assert!(c.next());
        }
        // landed on the head clone of slide 0
        assert_eq!(c.current_index(), 5);
        assert_eq!(c.progress_label(), "1 / 4");

        assert!(c.transition_end());
        assert_eq!(c.current_index(), 1);
        assert!(!c.transition_enabled());

        c.reenable_transition();
        assert!(c.transition_enabled());
    }

    #[test]
    fn test_transition_end_inside_real_range_does_not_jump() {
        let mut c = LoopingCarousel::new(4, 1);
        c.next();
        assert!(!c.transition_end());
        assert_eq!(c.current_index(), 2);
        assert!(c.transition_enabled());
        assert_eq!(c.phase(), CarouselPhase::Settled);
    }

    #[test]
    fn test_rapid_prev_stops_at_track_start() {
        let mut c = LoopingCarousel::new(3, 2);
        assert!(c.prev());
        assert!(c.prev());
        assert!(!c.prev());
        assert_eq!(c.current_index(), 0);

        c.transition_end();
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.progress_label(), "2 / 3");
    }

    #[test]
    fn test_key_action() {
        assert_eq!(key_action("ArrowRight"), Some(KeyAction::Next));
        assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Prev));
        assert_eq!(key_action("ArrowUp"), None);
        assert_eq!(key_action("Enter"), None);
        assert_eq!(key_action("arrowright"), None);
    }

    #[test]
    fn test_drag_past_slop() {
        let mut c = LoopingCarousel::new(10, 3);
        assert!(!c.drag_past_slop(500.0));

        c.drag_start(200.0, 300.0);
        assert!(!c.drag_past_slop(200.0));
        assert!(!c.drag_past_slop(200.0 + DRAG_SLOP_PX));
        assert!(!c.drag_past_slop(200.0 - DRAG_SLOP_PX));
        assert!(c.drag_past_slop(200.0 + DRAG_SLOP_PX + 1.0));
        assert!(c.drag_past_slop(200.0 - DRAG_SLOP_PX - 1.0));

        c.drag_end(200.0, 300.0);
        assert!(!c.drag_past_slop(400.0));
    }

    #[test]
    fn test_press_mid_snap_into_head_clone_recovers() {
        let mut c = LoopingCarousel::new(4, 1);
        for _ in 0..5 {
            c.next();
        }
        assert_eq!(c.current_index(), 5);

        // no transitionend: the press cancelled the animation
        c.drag_start(100.0, 300.0);
        assert_eq!(c.drag_end(100.0, 300.0), DragOutcome::SnapBack);

        assert_eq!(c.phase(), CarouselPhase::Settled);
        assert!(c.clones_count() <= c.current_index() && c.current_index() < 4 + c.clones_count());
        assert_eq!(c.progress_label(), "1 / 4");
        assert!(c.can_auto_advance());
        assert!(c.next());
        assert_eq!(c.progress_label(), "2 / 4");
    }

    #[test]
    fn test_press_mid_snap_into_tail_clone_recovers() {
        let mut c = LoopingCarousel::new(4, 1);
        c.prev();
        assert_eq!(c.current_index(), 0);

        c.drag_start(100.0, 300.0);
        // offset is based on the real slide, not the clone
        assert_eq!(c.live_offset(300.0), -4.0 * 300.0);
        assert_eq!(c.drag_end(100.0, 300.0), DragOutcome::SnapBack);

        assert_eq!(c.current_index(), 4);
        assert_eq!(c.progress_label(), "4 / 4");
        assert!(c.prev());
    }

    #[test]
    fn test_drag_mid_snap_commits_from_real_slide() {
        let mut c = LoopingCarousel::new(4, 1);
        for _ in 0..5 {
            c.next();
        }

        c.drag_start(400.0, 300.0);
        assert_eq!(c.drag_end(250.0, 300.0), DragOutcome::Next);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.progress_label(), "2 / 4");
    }

    #[test]
    fn test_drag_live_offset() {
        let mut c = LoopingCarousel::new(10, 3);
        c.drag_start(500.0, 300.0);
        assert!(!c.transition_enabled());
        assert!(c.is_dragging());

        let offset = c.drag_move(460.0, 300.0);
        assert_eq!(offset, -900.0 - 40.0);
        assert_eq!(c.live_offset(300.0), -940.0);
    }

    #[test]
    fn test_drag_commit_prev() {
        let mut c = LoopingCarousel::new(10, 3);
        c.drag_start(100.0, 300.0);
        assert_eq!(c.drag_end(180.0, 300.0), DragOutcome::Prev);
        assert_eq!(c.current_index(), 2);
        assert!(c.transition_enabled());
    }

    #[test]
    fn test_drag_end_without_start() {
        let mut c = LoopingCarousel::new(10, 3);
        assert_eq!(c.drag_end(0.0, 300.0), DragOutcome::SnapBack);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_buttons_ignored_while_dragging() {
        let mut c = LoopingCarousel::new(10, 3);
        c.drag_start(0.0, 300.0);
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.can_auto_advance());
    }

    #[test]
    fn test_resize_keeps_real_slide() {
        let mut c = LoopingCarousel::new(10, 3);
        c.next();
        c.next();
        c.transition_end();
        assert_eq!(c.progress_label(), "3 / 10");

        assert!(c.set_items_per_view(1));
        assert_eq!(c.clones_count(), 1);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.progress_label(), "3 / 10");
        assert!(!c.transition_enabled());

        assert!(!c.set_items_per_view(1));
    }

    #[test]
    fn test_resize_from_clone_position() {
        let mut c = LoopingCarousel::new(5, 2);
        c.prev();
        // resize lands mid-animation on a tail clone
        assert!(c.set_items_per_view(3));
        assert_eq!(c.current_index(), 3 + 4);
        assert_eq!(c.progress_label(), "5 / 5");
    }

    #[test]
    fn test_empty_carousel() {
        let mut c = LoopingCarousel::new(0, 3);
        assert_eq!(c.displayed_len(), 0);
        assert!(c.displayed_slides().is_empty());
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.transition_end());
        assert_eq!(c.progress(), (0, 0));
        c.drag_start(0.0, 100.0);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_single_slide_still_loops() {
        let mut c = LoopingCarousel::new(1, 3);
        assert_eq!(c.clones_count(), 1);
        assert!(c.next());
        assert!(c.transition_end());
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.progress_label(), "1 / 1");
        assert!(!c.can_auto_advance());
    }
}
