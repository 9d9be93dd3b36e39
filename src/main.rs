use anyhow::Context;
use learn_colors::config::{SETTINGS_PATH, Settings};
use learn_colors::game::{Board, SCREEN_HEIGHT, SCREEN_WIDTH, load_assets};
use lib_game::App;
use log::{STATIC_MAX_LEVEL, error, info, set_max_level};
use macroquad::prelude::*;
use quad_dbg::init_on_screen_log;

fn window_conf() -> Conf {
    Conf {
        window_title: "Learn Colors".to_owned(),
        high_dpi: true,
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: true,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!("Driver panicked:\n{info}");
        hook(info);
    }));

    if let Err(e) = run().await {
        error!("Driver exitted with error:\n{e:?}");
    }
}

async fn run() -> anyhow::Result<()> {
    set_max_level(STATIC_MAX_LEVEL);
    init_on_screen_log().context("installing the logger")?;

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let settings = Settings::load(SETTINGS_PATH).await;
    let mut app = App::new(
        &window_conf(),
        vec2(SCREEN_WIDTH, SCREEN_HEIGHT),
        settings.sound(),
    );
    app.show_debug = settings.debug_overlay;
    if settings.cursor() {
        show_mouse(false);
    }

    load_assets(&settings, &mut app.render, &mut app.sound).await;

    let mut board = Board::new(settings);
    app.run(&mut board).await;

    info!("Shutting down, final score {}", board.score);

    Ok(())
}
