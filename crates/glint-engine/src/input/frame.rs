use std::collections::HashSet;

use super::types::{Key, WheelDelta};

/// Pixel-precision wheel deltas are normalized to line units with this
/// divisor before accumulation.
const PIXELS_PER_LINE: f32 = 20.0;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, pointer position).
/// `InputFrame` provides transitions and the scroll delta accumulated since
/// the last `clear()`.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Scroll delta accumulated this frame, in line units.
    pub wheel: (f32, f32),
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.wheel = (0.0, 0.0);
    }

    /// Accumulates a wheel delta, normalizing pixel deltas to line units.
    pub fn accumulate_wheel(&mut self, delta: WheelDelta) {
        let (x, y) = match delta {
            WheelDelta::Line { x, y } => (x, y),
            WheelDelta::Pixel { x, y } => (x / PIXELS_PER_LINE, y / PIXELS_PER_LINE),
        };
        self.wheel.0 += x;
        self.wheel.1 += y;
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::WheelDelta;
    use super::*;

    #[test]
    fn wheel_lines_accumulate_across_events() {
        let mut frame = InputFrame::default();
        frame.accumulate_wheel(WheelDelta::Line { x: 0.0, y: 1.0 });
        frame.accumulate_wheel(WheelDelta::Line { x: 0.0, y: -3.0 });
        assert_eq!(frame.wheel, (0.0, -2.0));
    }

    #[test]
    fn wheel_pixels_normalize_to_lines() {
        let mut frame = InputFrame::default();
        frame.accumulate_wheel(WheelDelta::Pixel { x: 0.0, y: 40.0 });
        assert_eq!(frame.wheel, (0.0, 2.0));
    }

    #[test]
    fn clear_resets_wheel_and_transitions() {
        let mut frame = InputFrame::default();
        frame.keys_pressed.insert(Key::W);
        frame.accumulate_wheel(WheelDelta::Line { x: 1.0, y: 1.0 });
        frame.clear();
        assert!(frame.keys_pressed.is_empty());
        assert_eq!(frame.wheel, (0.0, 0.0));
    }
}
