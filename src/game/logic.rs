use lib_game::{InputModel, SoundQueue};
use log::debug;
use macroquad::prelude::*;

use super::{
    Board, CardMotion, SFX_CLICK, SFX_POPUP, SFX_SELECT, SFX_STOP, SHAKE_DURATION,
    SHAKE_INTENSITY,
};

pub fn handle_input(board: &mut Board, input: &InputModel, sounds: &mut SoundQueue) {
    board.pointer = input.pointer;
    board.pointer_down = input.pointer_down;

    if input.reset_requested {
        board.reset();
    }

    if input.pointer_pressed {
        pick_card(board, input.pointer, sounds);
    }

    if input.pointer_down {
        if let Some(idx) = board.dragged_card() {
            board.cards[idx].center_on(input.pointer);
        }
    }

    if input.pointer_released {
        if let Some(idx) = board.dragged_card() {
            drop_card(board, idx, input.pointer, sounds);
            finish_round(board, sounds);
        }
    }
}

fn pick_card(board: &mut Board, pointer: Vec2, sounds: &mut SoundQueue) {
    if board.dragged_card().is_some() {
        return;
    }

    // Later cards are drawn on top
    let Some(card) = board
        .cards
        .iter_mut()
        .rev()
        .find(|card| card.rect.contains(pointer))
    else {
        return;
    };

    card.dragging = true;
    card.motion = CardMotion::Idle;
    sounds.play(SFX_SELECT);
}

fn drop_card(board: &mut Board, idx: usize, pointer: Vec2, sounds: &mut SoundQueue) {
    let card = &mut board.cards[idx];
    card.dragging = false;

    let Some(tray) = board
        .trays
        .iter_mut()
        .find(|tray| tray.accepts(&card.rect, card.hue))
    else {
        debug!("card returns to its slot");
        card.return_to_slot(board.settings.tween());
        sounds.play(SFX_STOP);
        return;
    };

    board.matches += 1;
    debug!("hit {}", board.matches);

    if card.reached_target {
        return;
    }

    board.score += 1;
    if board.settings.stars() {
        board.stars.spawn(pointer);
    }
    tray.start_shake(SHAKE_DURATION, SHAKE_INTENSITY);
    sounds.play(SFX_CLICK);

    card.reached_target = true;
    card.scored = true;
}

fn finish_round(board: &mut Board, sounds: &mut SoundQueue) {
    if !board.round_complete() {
        return;
    }

    debug!("round complete, score {}", board.score);
    board.deal_cards();
    sounds.play(SFX_POPUP);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::game::Hue;

    fn board() -> Board {
        let mut board = Board::new(Settings::default());
        for card in &mut board.cards {
            card.hue = Hue::Red;
        }
        board
    }

    fn card_center(board: &Board, idx: usize) -> Vec2 {
        board.cards[idx].rect.center()
    }

    #[test]
    fn test_press_picks_a_card() {
        let mut board = board();
        let mut sounds = SoundQueue::new();
        let at = card_center(&board, 1);

        handle_input(&mut board, &InputModel::press_at(at), &mut sounds);

        assert_eq!(board.dragged_card(), Some(1));
        assert_eq!(sounds.requests(), &[SFX_SELECT]);
    }

    #[test]
    fn test_press_on_empty_space_does_nothing() {
        let mut board = board();
        let mut sounds = SoundQueue::new();

        handle_input(&mut board, &InputModel::press_at(vec2(5.0, 300.0)), &mut sounds);

        assert_eq!(board.dragged_card(), None);
        assert!(sounds.requests().is_empty());
    }

    #[test]
    fn test_topmost_card_is_picked() {
        let mut board = board();
        let mut sounds = SoundQueue::new();
        let pos = board.cards[0].pos();
        board.cards[2].set_pos(pos);

        let at = card_center(&board, 0);
        handle_input(&mut board, &InputModel::press_at(at), &mut sounds);

        assert_eq!(board.dragged_card(), Some(2));
        assert!(!board.cards[0].dragging);
    }

    #[test]
    fn test_pick_cancels_tween() {
        let mut board = board();
        let mut sounds = SoundQueue::new();
        board.cards[0].set_pos(vec2(400.0, 300.0));
        board.cards[0].return_to_slot(true);
        board.cards[0].update();

        let at = card_center(&board, 0);
        handle_input(&mut board, &InputModel::press_at(at), &mut sounds);

        assert!(board.cards[0].dragging);
        assert_eq!(board.cards[0].motion, CardMotion::Idle);
    }

    #[test]
    fn test_held_card_follows_pointer() {
        let mut board = board();
        let mut sounds = SoundQueue::new();

        let at = card_center(&board, 0);
        handle_input(&mut board, &InputModel::press_at(at), &mut sounds);
        handle_input(&mut board, &InputModel::hold_at(vec2(480.0, 320.0)), &mut sounds);

        assert_eq!(board.cards[0].rect.center(), vec2(480.0, 320.0));
        assert!(board.pointer_down);
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut board = board();
        let mut sounds = SoundQueue::new();
        let before = board.cards;

        handle_input(&mut board, &InputModel::release_at(vec2(480.0, 320.0)), &mut sounds);

        assert_eq!(board.cards, before);
        assert_eq!(board.matches, 0);
        assert!(sounds.requests().is_empty());
    }
}
