use macroquad::prelude::*;

/// Overshoot amount of the back easing.
const BACK_OVERSHOOT: f32 = 1.70158;

/// Back ease-out: starts fast, overshoots the target a little
/// and settles on it. `t` is the elapsed time, `b` the start value,
/// `c` the change and `d` the total duration.
pub fn ease_back_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    let t = t / d - 1.0;

    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

/// Frame-counted movement from one point to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Vec2,
    pub to: Vec2,
    pub frame: u32,
    pub duration: u32,
}

impl Tween {
    pub fn new(from: Vec2, to: Vec2, duration: u32) -> Self {
        Self {
            from,
            to,
            frame: 0,
            duration,
        }
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.duration
    }

    /// Moves one frame forward and returns the new position.
    /// On the last frame the position is exactly `to`.
    pub fn advance(&mut self) -> Vec2 {
        self.frame = self.frame.saturating_add(1);
        if self.is_done() {
            return self.to;
        }

        let t = self.frame as f32;
        let d = self.duration as f32;
        let delta = self.to - self.from;

        vec2(
            ease_back_out(t, self.from.x, delta.x, d),
            ease_back_out(t, self.from.y, delta.y, d),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert!((ease_back_out(0.0, 10.0, 90.0, 30.0) - 10.0).abs() < 1e-4);
        assert!((ease_back_out(30.0, 10.0, 90.0, 30.0) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_ease_overshoots() {
        let peak = (0..=30)
            .map(|t| ease_back_out(t as f32, 0.0, 100.0, 30.0))
            .fold(f32::NEG_INFINITY, f32::max);

        assert!(peak > 100.0);
        assert!(peak < 112.0);
    }

    #[test]
    fn test_tween_lands_exactly() {
        let from = vec2(431.7, 255.3);
        let to = vec2(119.0, 70.0);
        let mut tween = Tween::new(from, to, 30);

        let mut pos = from;
        for _ in 0..29 {
            pos = tween.advance();
            assert!(!tween.is_done());
        }
        assert_ne!(pos, to);

        assert_eq!(tween.advance(), to);
        assert!(tween.is_done());
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut tween = Tween::new(Vec2::ZERO, vec2(5.0, 5.0), 0);

        assert!(tween.is_done());
        assert_eq!(tween.advance(), vec2(5.0, 5.0));
    }
}
