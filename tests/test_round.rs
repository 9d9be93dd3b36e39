use learn_colors::config::Settings;
use learn_colors::game::*;
use lib_game::*;
use macroquad::prelude::*;

fn board(settings: Settings, hues: [Hue; CARD_COUNT]) -> Board {
    let mut board = Board::new(settings);
    for (card, hue) in board.cards.iter_mut().zip(hues) {
        card.hue = hue;
    }
    board
}

fn tray_center(board: &Board, tray: usize) -> Vec2 {
    board.trays[tray].rect.center()
}

/// Press on the card, carry it to `to` and let go there.
fn drag(board: &mut Board, card: usize, to: Vec2, sounds: &mut SoundQueue) {
    let from = board.cards[card].rect.center();

    board.input_phase(&InputModel::press_at(from), sounds);
    board.input_phase(&InputModel::hold_at(to), sounds);
    board.input_phase(&InputModel::release_at(to), sounds);
}

fn tick(board: &mut Board, count: usize, sounds: &mut SoundQueue) {
    for _ in 0..count {
        board.update(GAME_TICKRATE, sounds);
    }
}

fn assert_fresh_round(board: &Board) {
    for (idx, card) in board.cards.iter().enumerate() {
        assert!(!card.reached_target, "card {idx}");
        assert!(!card.scored, "card {idx}");
        assert!(!card.dragging, "card {idx}");
        assert_eq!(card.motion, CardMotion::Idle, "card {idx}");
        assert_eq!(card.pos(), board.layout.card_slot(idx), "card {idx}");
        assert!(
            [Hue::Red, Hue::Green, Hue::Blue].contains(&card.hue),
            "card {idx}"
        );
    }
}

#[test]
fn test_full_round() {
    let mut board = board(
        Settings::default(),
        [Hue::Red, Hue::Green, Hue::Blue, Hue::Red],
    );
    let mut sounds = SoundQueue::new();
    assert_eq!(
        board.trays.map(|tray| tray.hue),
        [Hue::Red, Hue::Green, Hue::Blue]
    );

    let red = tray_center(&board, 0);
    drag(&mut board, 0, red, &mut sounds);
    assert_eq!(board.score, 1);
    assert!(board.cards[0].reached_target);
    assert!(board.cards[0].scored);
    assert_eq!(sounds.drain().collect::<Vec<_>>(), vec![SFX_SELECT, SFX_CLICK]);

    drag(&mut board, 3, red, &mut sounds);
    assert_eq!(board.score, 2);

    let green = tray_center(&board, 1);
    drag(&mut board, 1, green, &mut sounds);
    assert_eq!(board.score, 3);
    assert!(!board.round_complete());
    sounds.clear();

    let blue = tray_center(&board, 2);
    drag(&mut board, 2, blue, &mut sounds);
    assert_eq!(board.score, 4);
    assert_eq!(board.matches, 4);
    assert_eq!(
        sounds.drain().collect::<Vec<_>>(),
        vec![SFX_SELECT, SFX_CLICK, SFX_POPUP]
    );
    assert_fresh_round(&board);
}

#[test]
fn test_wrong_tray_sends_card_back() {
    let mut board = board(
        Settings::default(),
        [Hue::Red, Hue::Green, Hue::Blue, Hue::Red],
    );
    let mut sounds = SoundQueue::new();

    let green = tray_center(&board, 1);
    drag(&mut board, 0, green, &mut sounds);

    assert_eq!(board.score, 0);
    assert_eq!(board.matches, 0);
    assert!(board.cards[0].is_tweening());
    assert!(!board.cards[0].reached_target);
    assert_eq!(sounds.drain().collect::<Vec<_>>(), vec![SFX_SELECT, SFX_STOP]);

    tick(&mut board, CARD_TWEEN_FRAMES as usize - 1, &mut sounds);
    assert!(board.cards[0].is_tweening());
    tick(&mut board, 1, &mut sounds);
    assert_eq!(board.cards[0].motion, CardMotion::Idle);
    assert_eq!(board.cards[0].pos(), board.layout.card_slot(0));
}

#[test]
fn test_drop_on_empty_space_sends_card_back() {
    let mut board = board(
        Settings::default(),
        [Hue::Red, Hue::Green, Hue::Blue, Hue::Red],
    );
    let mut sounds = SoundQueue::new();

    drag(&mut board, 2, vec2(480.0, 300.0), &mut sounds);

    assert!(board.cards[2].is_tweening());
    assert_eq!(sounds.requests().last(), Some(&SFX_STOP));
}

#[test]
fn test_no_tween_snaps_back() {
    let mut board = board(Settings::plain(), [Hue::Red; CARD_COUNT]);
    let mut sounds = SoundQueue::new();

    let blue = tray_center(&board, 2);
    drag(&mut board, 1, blue, &mut sounds);

    assert_eq!(board.cards[1].motion, CardMotion::Idle);
    assert_eq!(board.cards[1].pos(), board.layout.card_slot(1));
}

#[test]
fn test_card_scores_once() {
    let mut board = board(Settings::default(), [Hue::Red; CARD_COUNT]);
    let mut sounds = SoundQueue::new();

    let red = tray_center(&board, 0);
    drag(&mut board, 0, red, &mut sounds);
    tick(&mut board, 10, &mut sounds);
    sounds.clear();

    // The card is sitting on the tray now, pick it up from there
    drag(&mut board, 0, red + vec2(5.0, 5.0), &mut sounds);

    assert_eq!(board.score, 1);
    assert_eq!(board.matches, 2);
    assert!(!board.trays[0].is_shaking());
    assert_eq!(board.stars.active().count(), 1);
    assert_eq!(sounds.drain().collect::<Vec<_>>(), vec![SFX_SELECT]);
}

#[test]
fn test_correct_drop_feedback() {
    let mut board = board(Settings::default(), [Hue::Red; CARD_COUNT]);
    let mut sounds = SoundQueue::new();

    let red = tray_center(&board, 0);
    drag(&mut board, 0, red, &mut sounds);

    assert!(board.trays[0].is_shaking());
    assert!(!board.trays[1].is_shaking());
    let star = board.stars.active().next().unwrap();
    assert_eq!(star.pos, red);

    tick(&mut board, 7, &mut sounds);
    assert!(!board.trays[0].is_shaking());
    assert_eq!(board.trays[0].rect, board.layout.tray_rect(0));
}

#[test]
fn test_reset_key() {
    let mut board = board(Settings::default(), [Hue::Red; CARD_COUNT]);
    let mut sounds = SoundQueue::new();

    let red = tray_center(&board, 0);
    drag(&mut board, 0, red, &mut sounds);
    drag(&mut board, 1, red, &mut sounds);
    assert_eq!(board.score, 2);

    let input = InputModel {
        reset_requested: true,
        ..Default::default()
    };
    board.input_phase(&input, &mut sounds);

    assert_eq!(board.score, 0);
    assert_fresh_round(&board);
}

#[test]
fn test_score_and_round_properties() {
    let mut board = Board::new(Settings::default());
    let mut sounds = SoundQueue::new();

    for _ in 0..500 {
        let card = macroquad::rand::gen_range(0, CARD_COUNT as u32) as usize;
        let tray = macroquad::rand::gen_range(0, TRAY_COUNT as u32) as usize;
        let to = tray_center(&board, tray);

        let score = board.score;
        let reached = board.cards.map(|card| card.reached_target);
        drag(&mut board, card, to, &mut sounds);
        tick(&mut board, macroquad::rand::gen_range(0, 40u32) as usize, &mut sounds);

        assert!(board.score == score || board.score == score + 1);

        let scored_now = board.score == score + 1;
        let was_last = reached.iter().filter(|reached| !**reached).count() == 1;
        if scored_now && was_last {
            assert!(board.cards.iter().all(|card| !card.reached_target));
        } else {
            for (idx, before) in reached.into_iter().enumerate() {
                if before {
                    assert!(board.cards[idx].reached_target);
                }
            }
        }
        assert!(board.dragged_card().is_none());
        assert!(board.stars.active().count() <= STAR_COUNT);
    }
}

#[test]
fn test_plain_render_export() {
    let mut board = board(Settings::plain(), [Hue::Red; CARD_COUNT]);
    let mut render = Render::new(vec2(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut sounds = SoundQueue::new();

    board.render_export(&mut render);

    // 3 trays, 4 outlined cards, score, border
    assert_eq!(render.world.len(), 13);
    assert_eq!(render.world.query::<&RoundedRect>().iter().count(), 11);
    assert_eq!(render.world.query::<&Sprite>().iter().count(), 0);
    let texts = render
        .world
        .query::<&GlyphText>()
        .iter()
        .map(|(_, text)| text.string.to_string())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["Score: 0".to_owned()]);

    let red = tray_center(&board, 0);
    drag(&mut board, 0, red, &mut sounds);
    render.new_frame();
    board.render_export(&mut render);

    // Slot outline and check mark for the placed card
    assert_eq!(render.world.len(), 15);
    assert_eq!(render.world.query::<&RectLines>().iter().count(), 2);
}

#[test]
fn test_art_render_export() {
    let board = board(Settings::default(), [Hue::Red, Hue::Green, Hue::Blue, Hue::Red]);
    let mut render = Render::new(vec2(SCREEN_WIDTH, SCREEN_HEIGHT));

    board.render_export(&mut render);

    // No clouds loaded, so the background is empty
    assert_eq!(render.world.query::<&NinePatch>().iter().count(), CARD_COUNT);
    // Tray shadows, trays, card art and the cursor
    assert_eq!(render.world.query::<&Sprite>().iter().count(), 2 * TRAY_COUNT + CARD_COUNT + 1);

    let mut order = render
        .world
        .query::<(&DrawOrder, Option<&NinePatch>, Option<&GlyphText>)>()
        .iter()
        .map(|(_, (order, patch, text))| (*order, patch.is_some(), text.is_some()))
        .collect::<Vec<_>>();
    order.sort_by_key(|(order, _, _)| *order);

    // Trays come first, the score text after every card
    assert!(order.iter().take(2 * TRAY_COUNT).all(|(_, patch, _)| !patch));
    let text_at = order.iter().position(|(_, _, text)| *text).unwrap();
    let last_patch = order.iter().rposition(|(_, patch, _)| *patch).unwrap();
    assert!(text_at > last_patch);
}
