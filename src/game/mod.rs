mod assets;
mod background;
mod card;
mod hue;
mod layout;
mod logic;
mod render;
mod stars;
mod tray;
mod tween;

pub use assets::*;
pub use background::*;
pub use card::*;
pub use hue::*;
pub use layout::*;
pub use stars::*;
pub use tray::*;
pub use tween::*;

use lib_game::{Game, InputModel, Render, SoundKey, SoundQueue, TICKS_PER_SECOND};
use log::info;
use macroquad::prelude::*;
use quad_dbg::dump;

use crate::config::Settings;

pub const TRAY_COUNT: usize = 3;
pub const CARD_COUNT: usize = 4;

pub const SFX_CLICK: SoundKey = SoundKey("click");
pub const SFX_SELECT: SoundKey = SoundKey("select");
pub const SFX_STOP: SoundKey = SoundKey("stop");
pub const SFX_POPUP: SoundKey = SoundKey("popup");

/// The whole game state. Trays live for the whole session,
/// cards get re-dealt each round.
#[derive(Clone, Debug)]
pub struct Board {
    pub settings: Settings,
    pub layout: Layout,
    pub cards: [Card; CARD_COUNT],
    pub trays: [Tray; TRAY_COUNT],
    pub stars: StarPool,
    pub parallax: Parallax,
    pub score: u32,
    /// Correct drops, counting repeated drops of finished cards.
    pub matches: u32,
    pub pointer: Vec2,
    pub pointer_down: bool,
}

impl Board {
    pub fn new(settings: Settings) -> Self {
        let layout = Layout::new(&settings);
        let trays = std::array::from_fn(|idx| Tray::new(layout.tray_rect(idx), Hue::ALL[idx]));
        let cards = deal(&layout);

        Self {
            settings,
            layout,
            cards,
            trays,
            stars: StarPool::new(),
            parallax: Parallax::new(),
            score: 0,
            matches: 0,
            pointer: Vec2::ZERO,
            pointer_down: false,
        }
    }

    /// Puts a fresh set of cards into their slots.
    pub fn deal_cards(&mut self) {
        self.cards = deal(&self.layout);
    }

    /// Starts over: new cards and zero score.
    pub fn reset(&mut self) {
        info!("Reset");
        self.score = 0;
        self.deal_cards();
    }

    pub fn dragged_card(&self) -> Option<usize> {
        self.cards.iter().position(|card| card.dragging)
    }

    pub fn round_complete(&self) -> bool {
        self.cards.iter().all(|card| card.reached_target)
    }
}

// Every card takes one of the tray colors
fn deal(layout: &Layout) -> [Card; CARD_COUNT] {
    std::array::from_fn(|idx| {
        let hue = Hue::ALL[macroquad::rand::gen_range(0, TRAY_COUNT as u32) as usize];

        Card::new(layout.card_slot(idx), layout.card_size, hue, random_art_cell())
    })
}

impl Game for Board {
    fn input_phase(&mut self, input: &InputModel, sounds: &mut SoundQueue) {
        logic::handle_input(self, input, sounds);
    }

    fn update(&mut self, dt: f32, _sounds: &mut SoundQueue) {
        for card in &mut self.cards {
            card.update();
        }
        for tray in &mut self.trays {
            tray.update();
        }
        self.stars.update(TICKS_PER_SECOND);
        self.parallax.update(dt);
    }

    fn render_export(&self, render: &mut Render) {
        render::background(self, render);
        render::trays(self, render);
        render::cards(self, render);
        render::cursor(self, render);
        render::score(self, render);
        render::stars(self, render);
        render::border(self, render);
    }

    fn debug_dump(&self) {
        dump!("score: {}", self.score);
        dump!("matches: {}", self.matches);
        dump!("pointer: {:.0} {:.0}", self.pointer.x, self.pointer.y);
        dump!("stars: {}", self.stars.active().count());
    }
}
