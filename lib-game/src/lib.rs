mod input;
mod render;
mod screen;
mod sound_director;
mod tick;

pub use input::*;
pub use render::*;
pub use screen::*;
pub use sound_director::*;
pub use tick::*;

use log::info;
use macroquad::prelude::*;
use quad_dbg::{ScreenDump, draw_log_events, dump};

/// The trait containing all callbacks for the game,
/// that is run inside the App. The game owns all of its
/// state; the App only feeds it input and time.
///
/// The application loop is structured as follows:
/// 1. Game::input_phase (every frame)
/// 2. Game::update (only on simulation ticks)
/// 3. Game::render_export
/// 4. Drawing and playing the queued sounds
pub trait Game: 'static {
    /// Handle the user input. Runs every frame, so no pointer
    /// edge gets lost between ticks.
    fn input_phase(&mut self, input: &InputModel, sounds: &mut SoundQueue);

    /// Advance the simulation by one tick of `dt` seconds.
    fn update(&mut self, dt: f32, sounds: &mut SoundQueue);

    /// Export the game state for rendering.
    fn render_export(&self, render: &mut Render);

    /// Write diagnostics with [quad_dbg::dump]. Shown only
    /// while the debug overlay is on.
    fn debug_dump(&self) {}
}

/// The app run all the boilerplate code to make the game tick.
/// The following features are provided:
/// * Consistent tickrate timing
/// * Letterboxing of the virtual screen
/// * Fullscreen toggling
/// * Sound playing
/// * Debug overlay with the on-screen log and the `dump!` macro
pub struct App {
    fullscreen: bool,
    old_size: (u32, u32),
    screen: Letterbox,
    ticker: Ticker,

    pub render: Render,
    pub sound: SoundDirector,
    sounds: SoundQueue,

    pub show_debug: bool,
}

impl App {
    pub fn new(conf: &Conf, virtual_size: Vec2, audio: bool) -> Self {
        Self {
            fullscreen: conf.fullscreen,
            old_size: (conf.window_width as u32, conf.window_height as u32),
            screen: Letterbox::new(
                virtual_size,
                vec2(conf.window_width as f32, conf.window_height as f32),
            ),
            ticker: Ticker::new(),

            render: Render::new(virtual_size),
            sound: SoundDirector::new(audio),
            sounds: SoundQueue::new(),

            show_debug: false,
        }
    }

    /// Just runs the game. This is what you call after loading all the resources.
    /// Returns once the user asks to quit.
    pub async fn run<G: Game>(mut self, game: &mut G) {
        info!("Done loading");
        info!("lib-game version: {}", env!("CARGO_PKG_VERSION"));

        loop {
            ScreenDump::new_frame();
            self.update_screen();

            let input = InputModel::capture(&self.screen);
            if input.quit_requested {
                info!("Quit requested");
                break;
            }
            self.fullscreen_toggles(&input);
            if input.debug_toggle_requested {
                self.show_debug = !self.show_debug;
            }

            let real_dt = get_frame_time();
            game.input_phase(&input, &mut self.sounds);
            if self.ticker.advance(real_dt) {
                game.update(GAME_TICKRATE, &mut self.sounds);
            }

            self.game_present(game);
            self.sound.direct_sounds(&mut self.sounds);
            self.debug_info(game);

            next_frame().await
        }
    }

    fn game_present<G: Game>(&mut self, game: &G) {
        self.render.new_frame();
        game.render_export(&mut self.render);
        self.render.render(&self.screen);
    }

    fn fullscreen_toggles(&mut self, input: &InputModel) {
        if !input.fullscreen_toggle_requested {
            return;
        }

        // NOTE: macroquad does not update window config when it goes fullscreen
        set_fullscreen(!self.fullscreen);

        if self.fullscreen {
            macroquad::miniquad::window::set_window_size(self.old_size.0, self.old_size.1);
        }

        self.fullscreen = !self.fullscreen;
        info!("Fullscreen: {}", self.fullscreen);
    }

    fn update_screen(&mut self) {
        let new_screen = Letterbox::new(
            self.screen.virtual_size,
            vec2(screen_width(), screen_height()),
        );
        if new_screen == self.screen {
            return;
        }

        info!("scale: {:.2}", new_screen.scale());
        info!(
            "resolution: {} x {}",
            new_screen.window_size.x, new_screen.window_size.y
        );
        self.screen = new_screen;
    }

    fn debug_info<G: Game>(&mut self, game: &G) {
        if !self.show_debug {
            return;
        }

        dump!("FPS: {}", get_fps());
        dump!("scale: {:.2}", self.screen.scale());
        dump!("tick backlog: {:.2}ms", self.ticker.accumulated_time() * 1000.0);
        game.debug_dump();

        ScreenDump::draw();
        draw_log_events();
    }
}
