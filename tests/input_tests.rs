use glam::Vec2;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use freecam::input::InputAccumulator;

#[cfg(test)]
mod movement_vector_tests {
    use super::*;

    #[test]
    fn test_movement_is_signed_sum_of_presses() {
        let mut input = InputAccumulator::new();

        input.register_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.register_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.register_key_event(KeyCode::KeyA, ElementState::Pressed);
        input.register_key_event(KeyCode::KeyS, ElementState::Pressed);

        assert_eq!(
            input.movement_vector(),
            Vec2::new(-1.0, 1.0),
            "two forward, one back, one left should sum to (-1, 1)"
        );
    }

    #[test]
    fn test_opposing_presses_in_one_frame_cancel() {
        let mut input = InputAccumulator::new();

        input.register_key_event(KeyCode::KeyD, ElementState::Pressed);
        input.register_key_event(KeyCode::KeyA, ElementState::Pressed);

        assert_eq!(
            input.movement_vector(),
            Vec2::ZERO,
            "right then left in the same frame should cancel"
        );
    }

    #[test]
    fn test_refresh_always_resets_to_zero() {
        let mut input = InputAccumulator::new();

        for _ in 0..5 {
            input.register_key_event(KeyCode::KeyW, ElementState::Pressed);
        }
        input.refresh();
        assert_eq!(input.movement_vector(), Vec2::ZERO);

        // refresh on an already-clean accumulator is a no-op
        input.refresh();
        assert_eq!(input.movement_vector(), Vec2::ZERO);
    }

    #[test]
    fn test_presses_after_refresh_start_from_zero() {
        let mut input = InputAccumulator::new();

        input.register_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.refresh();
        input.register_key_event(KeyCode::KeyS, ElementState::Pressed);

        assert_eq!(input.movement_vector(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_releases_never_change_the_vector() {
        let mut input = InputAccumulator::new();

        input.register_key_event(KeyCode::KeyD, ElementState::Pressed);
        input.register_key_event(KeyCode::KeyD, ElementState::Released);
        input.register_key_event(KeyCode::KeyA, ElementState::Released);

        assert_eq!(input.movement_vector(), Vec2::new(1.0, 0.0));
    }
}

#[cfg(test)]
mod mouse_delta_tests {
    use super::*;

    #[test]
    fn test_delta_is_current_minus_previous() {
        let mut input = InputAccumulator::new();

        input.register_motion_event(640.0, 360.0);
        input.register_motion_event(650.0, 355.0);

        assert_eq!(input.mouse_delta(), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_axes_threshold_independently() {
        let mut input = InputAccumulator::new();

        input.register_motion_event(100.0, 100.0);
        input.register_motion_event(101.5, 103.0);

        assert_eq!(
            input.mouse_delta(),
            Vec2::new(0.0, 3.0),
            "delta (1.5, 3.0) with threshold 2.0 should become (0.0, 3.0)"
        );
    }

    #[test]
    fn test_delta_exactly_at_threshold_survives() {
        let mut input = InputAccumulator::new();

        input.register_motion_event(100.0, 100.0);
        input.register_motion_event(102.0, 100.0);

        assert_eq!(input.mouse_delta().x, 2.0, "threshold is inclusive at the boundary");
    }

    #[test]
    fn test_delta_persists_across_refresh() {
        let mut input = InputAccumulator::new();

        input.register_motion_event(0.0, 0.0);
        input.register_motion_event(8.0, 0.0);
        input.refresh();

        assert_eq!(
            input.mouse_delta(),
            Vec2::new(8.0, 0.0),
            "refresh clears movement, never the mouse delta"
        );
    }

    #[test]
    fn test_next_motion_event_overwrites_stale_delta() {
        let mut input = InputAccumulator::new();

        input.register_motion_event(0.0, 0.0);
        input.register_motion_event(8.0, 0.0);
        input.register_motion_event(8.0, 8.0);

        assert_eq!(input.mouse_delta(), Vec2::new(0.0, 8.0));
    }
}
