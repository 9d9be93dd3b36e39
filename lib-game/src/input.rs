use macroquad::prelude::*;

use crate::Letterbox;

/// Everything the game needs to know about the input devices
/// for one frame. The pointer is already in virtual screen
/// coordinates.
///
/// Touch input arrives here too: macroquad reports the first
/// touch as the left mouse button.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputModel {
    pub pointer: Vec2,
    pub pointer_pressed: bool,
    pub pointer_down: bool,
    pub pointer_released: bool,
    pub reset_requested: bool,
    pub fullscreen_toggle_requested: bool,
    pub debug_toggle_requested: bool,
    pub quit_requested: bool,
}

impl InputModel {
    pub fn capture(screen: &Letterbox) -> Self {
        let (mx, my) = mouse_position();
        let pointer = screen.to_virtual(vec2(mx, my));
        let pointer_pressed = is_mouse_button_pressed(MouseButton::Left);
        let pointer_down = is_mouse_button_down(MouseButton::Left);
        let pointer_released = is_mouse_button_released(MouseButton::Left);
        let reset_requested = is_key_pressed(KeyCode::R);
        let fullscreen_toggle_requested =
            is_key_pressed(KeyCode::F) || is_key_pressed(KeyCode::F11);
        let debug_toggle_requested = is_key_pressed(KeyCode::GraveAccent);
        let quit_requested = is_key_pressed(KeyCode::Escape);

        Self {
            pointer,
            pointer_pressed,
            pointer_down,
            pointer_released,
            reset_requested,
            fullscreen_toggle_requested,
            debug_toggle_requested,
            quit_requested,
        }
    }

    /// A frame where the pointer got pressed at `pointer`.
    pub fn press_at(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_pressed: true,
            pointer_down: true,
            ..Default::default()
        }
    }

    /// A frame where the pointer is held at `pointer`.
    pub fn hold_at(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_down: true,
            ..Default::default()
        }
    }

    /// A frame where the pointer got released at `pointer`.
    pub fn release_at(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_released: true,
            ..Default::default()
        }
    }
}
