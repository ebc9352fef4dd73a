use glam::Vec2;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Cursor jitter below this many device units is discarded per axis
pub const DEFAULT_MOUSE_DELTA_MIN: f32 = 2.0;

/// Accumulates raw key/mouse events into per-frame movement and look deltas.
///
/// Key presses contribute one-shot ±1 impulses to the movement vector, which
/// `refresh` clears once per frame. Mouse deltas are recomputed on every
/// motion event and noise-thresholded per axis; they are NOT cleared by
/// `refresh`, so a frame without motion events sees the last computed delta.
#[derive(Debug, Clone)]
pub struct InputAccumulator {
    movement: Vec2,
    mouse_current: Vec2,
    mouse_previous: Vec2,
    mouse_delta: Vec2,
    mouse_delta_min: f32,
}

impl InputAccumulator {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_MOUSE_DELTA_MIN)
    }

    /// Create an accumulator with a custom mouse noise threshold
    pub fn with_threshold(mouse_delta_min: f32) -> Self {
        Self {
            movement: Vec2::ZERO,
            mouse_current: Vec2::ZERO,
            mouse_previous: Vec2::ZERO,
            mouse_delta: Vec2::ZERO,
            mouse_delta_min,
        }
    }

    /// Fold a keyboard event into the movement vector.
    ///
    /// Only press events of W/A/S/D register; releases and every other key
    /// are ignored. Each press is a single ±1 contribution, so opposing keys
    /// pressed in the same frame cancel out.
    pub fn register_key_event(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }
        match key {
            KeyCode::KeyA => self.movement.x -= 1.0,
            KeyCode::KeyD => self.movement.x += 1.0,
            KeyCode::KeyW => self.movement.y += 1.0,
            KeyCode::KeyS => self.movement.y -= 1.0,
            _ => {}
        }
    }

    /// Record a new absolute cursor position and recompute the delta.
    pub fn register_motion_event(&mut self, x: f64, y: f64) {
        self.mouse_previous = self.mouse_current;
        self.mouse_current = Vec2::new(x as f32, y as f32);

        let raw = self.mouse_current - self.mouse_previous;
        self.mouse_delta = Vec2::new(
            self.threshold_axis(raw.x),
            self.threshold_axis(raw.y),
        );
    }

    // A delta exactly at the threshold survives; only strictly smaller
    // magnitudes are treated as jitter.
    fn threshold_axis(&self, delta: f32) -> f32 {
        if delta.abs() < self.mouse_delta_min {
            0.0
        } else {
            delta
        }
    }

    /// Movement accumulated since the last `refresh`
    pub fn movement_vector(&self) -> Vec2 {
        self.movement
    }

    /// Last computed (thresholded) cursor delta
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Clear the movement vector for the next frame.
    ///
    /// Call exactly once per frame, after the frame's consumers have read the
    /// movement vector. Leaves the mouse delta untouched.
    pub fn refresh(&mut self) {
        self.movement = Vec2::ZERO;
    }
}

impl Default for InputAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
