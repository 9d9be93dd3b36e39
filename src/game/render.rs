use lib_game::{
    GlyphText, Margins, NinePatch, RectLines, Render, RoundedRect, Sprite, Tint, Transform,
};
use macroquad::prelude::*;

use super::{
    Board, STAR_FRAMES, TEX_BUTTON, TEX_CHECK, TEX_CLOUDS, TEX_HAND, TEX_HAND_PRESSED, TEX_STARS,
    TEX_TRAY, card_texture,
};

const ROUNDNESS: f32 = 0.3;
const TRAY_SHADOW_OFFSET: Vec2 = vec2(-7.0, 7.0);
const BUTTON_SOURCE: Rect = Rect {
    x: 0.0,
    y: 64.0,
    w: 64.0,
    h: 64.0,
};
const BUTTON_MARGIN: f32 = 16.0;
const CARD_OUTLINE: f32 = 2.0;
/// The tip of the hand is this far from the corner of its texture.
const CURSOR_TIP: f32 = 17.0;
const SCORE_POS: Vec2 = vec2(20.0, 20.0);
const SCORE_FONT_SIZE: u16 = 30;

pub fn background(board: &Board, render: &mut Render) {
    if !board.settings.background() {
        return;
    }

    let layer_size = render.texture_size(TEX_CLOUDS[0]);
    let tiles = board
        .parallax
        .tiles(layer_size, board.layout.screen, board.settings.parallax());
    for (layer, pos) in tiles {
        render.put((Transform::from_pos(pos), Sprite::new(TEX_CLOUDS[layer])));
    }
}

pub fn trays(board: &Board, render: &mut Render) {
    for tray in &board.trays {
        let pos = tray.rect.point();
        let size = tray.rect.size();

        if board.settings.tray_art() {
            render.put((
                Transform::from_pos(pos + TRAY_SHADOW_OFFSET),
                Sprite::new(TEX_TRAY).with_size(size),
                Tint(BLACK),
            ));
            render.put((
                Transform::from_pos(pos),
                Sprite::new(TEX_TRAY).with_size(size),
                Tint(tray.hue.color()),
            ));
        } else {
            render.put((
                Transform::from_pos(pos),
                RoundedRect {
                    size,
                    roundness: ROUNDNESS,
                },
                Tint(tray.hue.color()),
            ));
        }
    }
}

pub fn cards(board: &Board, render: &mut Render) {
    let check_size = render.texture_size(TEX_CHECK);

    for card in &board.cards {
        let pos = card.pos();
        let size = card.rect.size();

        if board.settings.card_art() {
            render.put((
                Transform::from_pos(pos),
                NinePatch {
                    texture: TEX_BUTTON,
                    source: BUTTON_SOURCE,
                    margins: Margins::uniform(BUTTON_MARGIN),
                    size,
                },
            ));
            if let Some(texture) = card_texture(card.hue) {
                render.put((
                    Transform::from_pos(pos),
                    Sprite::new(texture).with_source(card.art).with_size(size),
                ));
            }
        } else {
            render.put((
                Transform::from_pos(pos - Vec2::splat(CARD_OUTLINE)),
                RoundedRect {
                    size: size + Vec2::splat(CARD_OUTLINE * 2.0),
                    roundness: ROUNDNESS,
                },
                Tint(Color::new(0.0, 0.0, 0.0, 0.3)),
            ));
            render.put((
                Transform::from_pos(pos),
                RoundedRect {
                    size,
                    roundness: ROUNDNESS,
                },
                Tint(card.hue.color()),
            ));
        }

        if card.reached_target {
            render.put((
                Transform::from_pos(card.slot),
                RectLines {
                    size,
                    thickness: 1.0,
                },
                Tint(Color { a: 0.4, ..GRAY }),
            ));
            let check_pos = (card.slot + size / 2.0 - check_size / 2.0).floor();
            render.put((Transform::from_pos(check_pos), Sprite::new(TEX_CHECK)));
        }
    }
}

pub fn cursor(board: &Board, render: &mut Render) {
    if !board.settings.cursor() {
        return;
    }

    let texture = if board.pointer_down {
        TEX_HAND_PRESSED
    } else {
        TEX_HAND
    };
    render.put((
        Transform::from_pos(board.pointer - Vec2::splat(CURSOR_TIP)),
        Sprite::new(texture),
    ));
}

pub fn score(board: &Board, render: &mut Render) {
    render.put((
        Transform::from_pos(SCORE_POS),
        GlyphText {
            string: format!("Score: {}", board.score).into(),
            font_size: SCORE_FONT_SIZE,
        },
        Tint(GRAY),
    ));
}

pub fn stars(board: &Board, render: &mut Render) {
    if !board.settings.stars() {
        return;
    }

    let sheet = render.texture_size(TEX_STARS);
    let frame_size = vec2(sheet.x / STAR_FRAMES as f32, sheet.y);
    for star in board.stars.active() {
        render.put((
            Transform::from_pos(star.pos - frame_size / 2.0),
            Sprite::new(TEX_STARS).with_source(star.sheet.source(frame_size)),
        ));
    }
}

pub fn border(board: &Board, render: &mut Render) {
    render.put((
        Transform::IDENTITY,
        RectLines {
            size: board.layout.screen,
            thickness: 1.0,
        },
        Tint(Color::new(0.0, 0.0, 0.0, 0.2)),
    ));
}
