use lib_game::{Render, SoundDirector, TextureKey};
use log::info;

use super::{CLOUD_LAYERS, Hue, SFX_CLICK, SFX_POPUP, SFX_SELECT, SFX_STOP};
use crate::config::Settings;

pub const TEX_CLOUDS: [TextureKey; CLOUD_LAYERS] = [
    TextureKey("clouds_1"),
    TextureKey("clouds_2"),
    TextureKey("clouds_3"),
    TextureKey("clouds_4"),
];
pub const TEX_HAND: TextureKey = TextureKey("hand");
pub const TEX_HAND_PRESSED: TextureKey = TextureKey("hand_pressed");
pub const TEX_STARS: TextureKey = TextureKey("stars");
pub const TEX_BUTTON: TextureKey = TextureKey("ninepatch_button");
pub const TEX_TRAY: TextureKey = TextureKey("tray");
pub const TEX_CHECK: TextureKey = TextureKey("check");
pub const TEX_CARD_RED: TextureKey = TextureKey("card_red");
pub const TEX_CARD_GREEN: TextureKey = TextureKey("card_green");
pub const TEX_CARD_BLUE: TextureKey = TextureKey("card_blue");

/// The card art sheet for a hue. Only the tray hues have one.
pub fn card_texture(hue: Hue) -> Option<TextureKey> {
    match hue {
        Hue::Red => Some(TEX_CARD_RED),
        Hue::Green => Some(TEX_CARD_GREEN),
        Hue::Blue => Some(TEX_CARD_BLUE),
        _ => None,
    }
}

/// Loads whatever the settings will end up drawing or playing.
/// Missing files are logged and replaced, never fatal.
pub async fn load_assets(settings: &Settings, render: &mut Render, sound: &mut SoundDirector) {
    render.load_texture(TEX_CHECK, "assets/sprites/check.png").await;

    if settings.background() {
        let paths = [
            "assets/backgrounds/clouds_1.png",
            "assets/backgrounds/clouds_2.png",
            "assets/backgrounds/clouds_3.png",
            "assets/backgrounds/clouds_4.png",
        ];
        for (key, path) in TEX_CLOUDS.into_iter().zip(paths) {
            render.load_texture(key, path).await;
        }
    }

    if settings.cursor() {
        render.load_texture(TEX_HAND, "assets/ui/icon_hand_1.png").await;
        render
            .load_texture(TEX_HAND_PRESSED, "assets/ui/icon_hand_2.png")
            .await;
    }

    if settings.stars() {
        render.load_texture(TEX_STARS, "assets/ui/medal_stars.png").await;
    }

    if settings.tray_art() {
        render.load_texture(TEX_TRAY, "assets/sprites/tray.png").await;
    }

    if settings.card_art() {
        render
            .load_texture(TEX_BUTTON, "assets/ui/ninepatch_button.png")
            .await;
        render.load_texture(TEX_CARD_RED, "assets/sprites/red.png").await;
        render
            .load_texture(TEX_CARD_GREEN, "assets/sprites/green.png")
            .await;
        render.load_texture(TEX_CARD_BLUE, "assets/sprites/blue.png").await;
    }

    sound
        .load_sound_or_skip(SFX_CLICK, "assets/sfx/button_click.wav")
        .await;
    sound
        .load_sound_or_skip(SFX_SELECT, "assets/sfx/piece_select.wav")
        .await;
    sound
        .load_sound_or_skip(SFX_STOP, "assets/sfx/piece_stop.wav")
        .await;
    sound
        .load_sound_or_skip(SFX_POPUP, "assets/sfx/popup.wav")
        .await;

    info!("{} sounds ready", sound.len());
}
