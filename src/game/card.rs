use macroquad::prelude::*;

use super::{Hue, Tween};

/// Length of the return-to-slot animation: 30 frames = 500ms.
pub const CARD_TWEEN_FRAMES: u32 = 30;

/// Side of one cell in the card art sheet.
pub const CARD_ART_CELL: f32 = 32.0;
const CARD_ART_COLUMNS: u32 = 2;
const CARD_ART_ROWS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardMotion {
    /// Resting or being dragged.
    Idle,
    /// Flying back to the spawn slot after a wrong drop.
    Tween(Tween),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    pub rect: Rect,
    pub hue: Hue,
    pub dragging: bool,
    pub reached_target: bool,
    pub scored: bool,
    pub motion: CardMotion,
    /// Where the card was dealt. Wrong drops send it back here.
    pub slot: Vec2,
    /// Cell of the card art sheet to draw.
    pub art: Rect,
}

impl Card {
    pub fn new(slot: Vec2, size: Vec2, hue: Hue, art: Rect) -> Self {
        Self {
            rect: Rect::new(slot.x, slot.y, size.x, size.y),
            hue,
            dragging: false,
            reached_target: false,
            scored: false,
            motion: CardMotion::Idle,
            slot,
            art,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.rect.point()
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.rect.move_to(pos);
    }

    pub fn is_tweening(&self) -> bool {
        matches!(self.motion, CardMotion::Tween(_))
    }

    /// Puts the card's center under the pointer.
    pub fn center_on(&mut self, pointer: Vec2) {
        self.set_pos(pointer - self.rect.size() / 2.0);
    }

    /// Sends the card back to its slot, either animated or at once.
    pub fn return_to_slot(&mut self, animate: bool) {
        if animate {
            self.motion = CardMotion::Tween(Tween::new(self.pos(), self.slot, CARD_TWEEN_FRAMES));
        } else {
            self.motion = CardMotion::Idle;
            self.set_pos(self.slot);
        }
    }

    pub fn update(&mut self) {
        let CardMotion::Tween(tween) = &mut self.motion else {
            return;
        };

        let pos = tween.advance();
        let done = tween.is_done();
        self.set_pos(pos);
        if done {
            self.motion = CardMotion::Idle;
        }
    }
}

/// A random cell of the card art sheet.
pub fn random_art_cell() -> Rect {
    let col = macroquad::rand::gen_range(0, CARD_ART_COLUMNS);
    let row = macroquad::rand::gen_range(0, CARD_ART_ROWS);

    Rect::new(
        CARD_ART_CELL * col as f32,
        CARD_ART_CELL * row as f32,
        CARD_ART_CELL,
        CARD_ART_CELL,
    )
}
