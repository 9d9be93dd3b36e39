use macroquad::prelude::*;

use super::Hue;

/// How long a tray shakes after a correct drop, in seconds.
pub const SHAKE_DURATION: f32 = 0.10;
/// Maximum shake offset along each axis, in pixels.
pub const SHAKE_INTENSITY: f32 = 1.0;
/// Shake time consumed by one tick.
pub const SHAKE_DECREMENT: f32 = 0.016;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shake {
    pub remaining: f32,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tray {
    pub rect: Rect,
    pub hue: Hue,
    pub shake: Option<Shake>,
    /// Resting position. The shake always comes back exactly here.
    pub origin: Vec2,
}

impl Tray {
    pub fn new(rect: Rect, hue: Hue) -> Self {
        Self {
            rect,
            hue,
            shake: None,
            origin: rect.point(),
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    pub fn accepts(&self, card_rect: &Rect, card_hue: Hue) -> bool {
        self.hue == card_hue && overlaps_strictly(&self.rect, card_rect)
    }

    pub fn start_shake(&mut self, duration: f32, intensity: f32) {
        self.shake = Some(Shake {
            remaining: duration,
            intensity,
        });
    }

    pub fn update(&mut self) {
        let Some(shake) = &mut self.shake else {
            return;
        };

        let offset = vec2(jitter(shake.intensity), jitter(shake.intensity));
        shake.remaining -= SHAKE_DECREMENT;

        if shake.remaining > 0.0 {
            self.rect.move_to(self.origin + offset);
        } else {
            self.shake = None;
            self.rect.move_to(self.origin);
        }
    }
}

// Touching edges don't count
fn overlaps_strictly(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

// Uniform offset in [-intensity, intensity] with 101 steps
fn jitter(intensity: f32) -> f32 {
    let step = macroquad::rand::gen_range(0, 101u32) as f32;

    (step / 100.0 - 0.5) * intensity * 2.0
}
