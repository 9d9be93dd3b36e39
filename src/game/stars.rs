use macroquad::prelude::*;

/// Number of star bursts that can play at the same time.
pub const STAR_COUNT: usize = 4;
/// Frames in the star sprite sheet, laid out in a single row.
pub const STAR_FRAMES: u32 = 8;
/// Sheet frames per second.
pub const STAR_FRAME_SPEED: u32 = 10;

/// Position in a sprite sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SheetCursor {
    pub frame: u32,
    pub line: u32,
    pub counter: u32,
    pub speed: u32,
}

impl SheetCursor {
    pub fn new(speed: u32) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    /// Region of the current frame in a sheet with `frame_size` frames.
    pub fn source(&self, frame_size: Vec2) -> Rect {
        Rect::new(
            self.frame as f32 * frame_size.x,
            self.line as f32 * frame_size.y,
            frame_size.x,
            frame_size.y,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Center of the burst.
    pub pos: Vec2,
    pub sheet: SheetCursor,
    pub animating: bool,
}

/// Fixed pool of star bursts. A slot is claimed when a point is
/// scored and frees itself once its last frame has played.
#[derive(Clone, Debug, PartialEq)]
pub struct StarPool {
    pub stars: [Star; STAR_COUNT],
}

impl StarPool {
    pub fn new() -> Self {
        Self {
            stars: [Star {
                pos: Vec2::ZERO,
                sheet: SheetCursor::new(STAR_FRAME_SPEED),
                animating: false,
            }; STAR_COUNT],
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Star> + '_ {
        self.stars.iter().filter(|star| star.animating)
    }

    /// Starts a burst at `pos`. Returns `false` and does nothing
    /// when every slot is busy.
    pub fn spawn(&mut self, pos: Vec2) -> bool {
        let Some(star) = self.stars.iter_mut().find(|star| !star.animating) else {
            return false;
        };

        star.pos = pos;
        star.animating = true;
        true
    }

    pub fn update(&mut self, ticks_per_second: u32) {
        for star in self.stars.iter_mut().filter(|star| star.animating) {
            let ticks_per_frame = (ticks_per_second / star.sheet.speed.max(1)).max(1);

            star.sheet.counter += 1;
            if star.sheet.counter < ticks_per_frame {
                continue;
            }

            star.sheet.counter = 0;
            star.sheet.frame += 1;
            if star.sheet.frame >= STAR_FRAMES {
                star.sheet.frame = 0;
                star.animating = false;
            }
        }
    }
}

impl Default for StarPool {
    fn default() -> Self {
        Self::new()
    }
}
