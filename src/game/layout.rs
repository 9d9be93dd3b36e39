use macroquad::prelude::*;

use super::{CARD_COUNT, TRAY_COUNT};
use crate::config::Settings;

pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 640.0;

/// Space between cards and between trays.
pub const GAP: f32 = 70.0;
/// Space above the cards and below the trays.
pub const PADDING: f32 = 70.0;

const TRAY_SIZE_ART: Vec2 = vec2(250.0, 183.0);
const TRAY_SIZE_PLAIN: Vec2 = vec2(150.0, 100.0);
// Multiples of 32 so the card art isn't scaled unevenly
const CARD_SIZE_ART: Vec2 = vec2(128.0, 128.0);
const CARD_SIZE_PLAIN: Vec2 = vec2(100.0, 100.0);

/// Where everything sits on the virtual screen.
/// Cards are spread along the top, trays along the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub screen: Vec2,
    pub tray_size: Vec2,
    pub card_size: Vec2,
}

impl Layout {
    pub fn new(settings: &Settings) -> Self {
        Self {
            screen: vec2(SCREEN_WIDTH, SCREEN_HEIGHT),
            tray_size: if settings.tray_art() {
                TRAY_SIZE_ART
            } else {
                TRAY_SIZE_PLAIN
            },
            card_size: if settings.card_art() {
                CARD_SIZE_ART
            } else {
                CARD_SIZE_PLAIN
            },
        }
    }

    pub fn tray_rect(&self, idx: usize) -> Rect {
        let x = row_x(self.screen.x, self.tray_size.x, TRAY_COUNT, idx);
        let y = self.screen.y - self.tray_size.y - PADDING;

        Rect::new(x, y, self.tray_size.x, self.tray_size.y)
    }

    pub fn card_slot(&self, idx: usize) -> Vec2 {
        vec2(row_x(self.screen.x, self.card_size.x, CARD_COUNT, idx), PADDING)
    }
}

// Left edge of item `idx` in a row of `count` items centered on the screen
fn row_x(screen_width: f32, width: f32, count: usize, idx: usize) -> f32 {
    let count = count as f32;
    let idx = idx as f32;

    -(width * count) / 2.0 + screen_width / 2.0 + width * idx + GAP * idx
        - (GAP * (count - 1.0)) / 2.0
}
