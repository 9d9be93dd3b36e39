use macroquad::prelude::*;

/// Number of cloud layers.
pub const CLOUD_LAYERS: usize = 4;
/// Length of the layer order table.
pub const ORDER_LEN: usize = 20;
/// How fast the scroll phase grows, per second.
const PARALLAX_SPEED: f64 = 0.09;
/// Rows overlap: the next one starts after `height / ROW_OVERLAP`.
const ROW_OVERLAP: f32 = 1.6;

/// Vertically tiled cloud layers sliding sideways. Each row picks
/// a layer and an oscillation frequency from a table fixed for
/// the whole session. Only the first [CLOUD_LAYERS] entries are
/// read, so the pattern repeats every [CLOUD_LAYERS] rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Parallax {
    pub time: f64,
    pub order: [usize; ORDER_LEN],
}

impl Parallax {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            order: std::array::from_fn(|_| macroquad::rand::gen_range(0, CLOUD_LAYERS as u32) as usize),
        }
    }

    pub fn with_order(order: [usize; ORDER_LEN]) -> Self {
        Self { time: 0.0, order }
    }

    pub fn update(&mut self, dt: f32) {
        self.time += PARALLAX_SPEED * dt as f64;
    }

    /// The tiles covering the screen as `(layer, top-left)` pairs,
    /// top to bottom. All layers are assumed to be `layer_size` big.
    pub fn tiles(&self, layer_size: Vec2, screen: Vec2, scroll: bool) -> Vec<(usize, Vec2)> {
        let (width, height) = (layer_size.x, layer_size.y);
        if height <= 0.0 || !height.is_finite() {
            return Vec::new();
        }

        let mut tiles = Vec::new();
        let mut y = -height / 2.0;
        let mut row = 0;
        while y < screen.y + height * 2.0 {
            let layer = self.order[row % CLOUD_LAYERS];
            let x = if scroll {
                let half_slack = (width - screen.x) / 2.0;
                let phase = (self.time * layer as f64).sin() as f32;
                -(phase * half_slack + half_slack)
            } else {
                0.0
            };

            tiles.push((layer, vec2(x, y)));
            y += height / ROW_OVERLAP;
            row += 1;
        }

        tiles
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new()
    }
}
