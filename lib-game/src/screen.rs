use macroquad::prelude::*;

/// Maps a fixed-size virtual screen onto the window, keeping the
/// aspect ratio and centering it with black bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Letterbox {
    pub virtual_size: Vec2,
    pub window_size: Vec2,
}

impl Letterbox {
    pub fn new(virtual_size: Vec2, window_size: Vec2) -> Self {
        Self {
            virtual_size,
            window_size,
        }
    }

    pub fn scale(&self) -> f32 {
        (self.window_size.x / self.virtual_size.x).min(self.window_size.y / self.virtual_size.y)
    }

    /// The window-space rectangle the virtual screen is drawn into.
    pub fn dest_rect(&self) -> Rect {
        let size = self.virtual_size * self.scale();
        let offset = (self.window_size - size) * 0.5;

        Rect::new(offset.x, offset.y, size.x, size.y)
    }

    /// Converts a window-space point into virtual coordinates.
    /// Points over the black bars get clamped to the screen edge.
    pub fn to_virtual(&self, point: Vec2) -> Vec2 {
        let scale = self.scale();
        if scale.is_nan() || scale <= 0.0 {
            return Vec2::ZERO;
        }

        let dest = self.dest_rect();
        let local = (point - dest.point()) / scale;

        local.clamp(Vec2::ZERO, self.virtual_size)
    }
}
