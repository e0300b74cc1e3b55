#[cfg(test)]
mod tests {
    use crate::core::breakpoints::Responsive;
    use crate::core::carousel::{DragOutcome, LoopingCarousel, slide_step};
    use crate::core::content::{TEMPLATES, board_nodes};
    use crate::core::drag::{Bounds, DragState, InitialPlacement, Position};

    /// Deterministic pseudo-random walk for property-style loops
    fn walk(seed: u64, len: usize) -> Vec<bool> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 33) & 1 == 1
            })
            .collect()
    }

    // ========================================================================
    // Carousel scenarios
    // ========================================================================

    #[test]
    fn test_five_nexts_from_start() {
        let mut c = LoopingCarousel::new(10, 3);
        assert_eq!(c.current_index(), 3);

        for _ in 0..5 {
            c.next();
        }

        assert_eq!(c.current_index(), 8);
        assert_eq!(c.progress_label(), "6 / 10");
    }

    #[test]
    fn test_prev_from_first_real_slide_wraps_to_last() {
        let mut c = LoopingCarousel::new(10, 3);

        c.prev();
        assert_eq!(c.current_index(), 2);

        assert!(c.transition_end());
        assert_eq!(c.current_index(), 12);
        assert_eq!(c.progress_label(), "10 / 10");
    }

    #[test]
    fn test_drag_threshold_against_step() {
        let step = 300.0;

        let mut c = LoopingCarousel::new(10, 3);
        c.drag_start(400.0, step);
        c.drag_move(320.0, step);
        assert_eq!(c.drag_end(320.0, step), DragOutcome::Next);
        assert_eq!(c.current_index(), 4);

        let mut c = LoopingCarousel::new(10, 3);
        c.drag_start(400.0, step);
        c.drag_move(350.0, step);
        assert_eq!(c.drag_end(350.0, step), DragOutcome::SnapBack);
        assert_eq!(c.current_index(), 3);
        assert!(c.transition_enabled());
        assert_eq!(c.live_offset(step), c.translate_offset(step));
    }

    #[test]
    fn test_drag_exactly_at_threshold_snaps_back() {
        let mut c = LoopingCarousel::new(10, 3);
        c.drag_start(400.0, 300.0);
        assert_eq!(c.drag_end(325.0, 300.0), DragOutcome::SnapBack);
    }

    #[test]
    fn test_index_invariant_holds_after_every_settle() {
        for (n, per_view) in [(1, 1), (2, 3), (4, 1), (6, 2), (10, 3)] {
            for seed in 0..20 {
                let mut c = LoopingCarousel::new(n, per_view);
                for forward in walk(seed, 200) {
                    if forward {
                        c.next();
                    } else {
                        c.prev();
                    }
                    c.transition_end();
                    c.reenable_transition();

                    let clones = c.clones_count();
                    assert!(
                        clones <= c.current_index() && c.current_index() < n + clones,
                        "n={n} per_view={per_view} index={}",
                        c.current_index()
                    );
                }
            }
        }
    }

    #[test]
    fn test_display_invariant() {
        for (n, per_view) in [(1, 3), (3, 3), (5, 2), (10, 3), (10, 1)] {
            let c = LoopingCarousel::new(n, per_view);
            let clones = c.clones_count();
            let slides = c.displayed_slides();

            assert_eq!(slides.len(), n + 2 * clones);
            for (i, slide) in slides.iter().take(clones).enumerate() {
                assert_eq!(slide.real_index, n - clones + i);
            }
        }
    }

    #[test]
    fn test_progress_label_for_every_real_slide() {
        let n = 7;
        let mut c = LoopingCarousel::new(n, 2);
        for k in 0..n {
            assert_eq!(c.current_index(), c.clones_count() + k);
            assert_eq!(c.progress_label(), format!("{} / {}", k + 1, n));
            c.next();
            c.transition_end();
        }
    }

    #[test]
    fn test_templates_carousel_step_on_desktop() {
        let mut c = LoopingCarousel::new(TEMPLATES.len(), 3);
        let step = slide_step(1200.0, 24.0, c.items_per_view());

        c.next();
        assert!((c.translate_offset(step) + 4.0 * step).abs() < 1e-9);
    }

    // ========================================================================
    // Draggable node scenarios
    // ========================================================================

    #[test]
    fn test_latch_survives_many_resizes() {
        let table = Responsive::fixed(Position::new(0.0, 500.0)).lg(Position::new(700.0, 320.0));
        let mut node = DragState::new(InitialPlacement::Responsive(table));
        node.reposition(1440.0, 1400.0, 260.0);

        node.pointer_down(Position::new(720.0, 340.0));
        node.pointer_move(Position::new(100.0, 100.0), None);
        node.pointer_up();
        let settled = node.position();

        for width in [320.0, 768.0, 1024.0, 1920.0, 500.0] {
            assert!(!node.reposition(width, width, 260.0));
            assert_eq!(node.position(), settled);
        }
    }

    #[test]
    fn test_clamped_drag_stays_in_bounds() {
        let bounds = Bounds {
            parent_width: 900.0,
            parent_height: 640.0,
            node_width: 260.0,
            node_height: 180.0,
        };
        let mut node = DragState::new(InitialPlacement::Fixed(Position::new(300.0, 200.0)));
        node.pointer_down(Position::new(310.0, 210.0));

        for (i, dx) in (-1500..=1500).step_by(125).enumerate() {
            let dy = if i % 2 == 0 { dx } else { -dx };
            node.pointer_move(Position::new(310.0 + dx as f64, 210.0 + dy as f64), Some(bounds));

            let pos = node.position();
            assert!((0.0..=640.0).contains(&pos.x), "x out of bounds: {}", pos.x);
            assert!((0.0..=460.0).contains(&pos.y), "y out of bounds: {}", pos.y);
        }
    }

    #[test]
    fn test_hero_nodes_start_inside_desktop_board() {
        let board = Bounds {
            parent_width: 1280.0,
            parent_height: 900.0,
            node_width: 260.0,
            node_height: 0.0,
        };

        for node in board_nodes() {
            let mut state = DragState::new(node.placement);
            state.reposition(1280.0, board.parent_width, board.node_width);
            let pos = state.position();
            assert_eq!(board.clamp(pos).x, pos.x, "{} starts off-board", node.id);
        }
    }

    #[test]
    fn test_welcome_node_is_centered() {
        let welcome = board_nodes()[0];
        let mut state = DragState::new(welcome.placement);
        state.reposition(1280.0, 1280.0, 260.0);
        assert_eq!(state.position(), Position::new(510.0, 24.0));
    }
}
