use macroquad::prelude::*;

/// The palette. Trays take the first [crate::game::TRAY_COUNT] hues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hue {
    Red,
    Green,
    Blue,
    Orange,
    Pink,
    Purple,
    SkyBlue,
    Gray,
}

impl Hue {
    pub const ALL: [Hue; 8] = [
        Hue::Red,
        Hue::Green,
        Hue::Blue,
        Hue::Orange,
        Hue::Pink,
        Hue::Purple,
        Hue::SkyBlue,
        Hue::Gray,
    ];

    pub fn color(self) -> Color {
        match self {
            Hue::Red => RED,
            Hue::Green => GREEN,
            Hue::Blue => BLUE,
            Hue::Orange => ORANGE,
            Hue::Pink => PINK,
            Hue::Purple => PURPLE,
            Hue::SkyBlue => SKYBLUE,
            Hue::Gray => GRAY,
        }
    }
}
