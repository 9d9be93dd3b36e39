use log::warn;

pub const GAME_TICKRATE: f32 = 1.0 / 60.0;

/// Number of simulation ticks per second.
pub const TICKS_PER_SECOND: u32 = 60;

/// Turns the variable frame time into fixed simulation ticks.
/// At most one tick is produced per frame. If the game falls behind
/// by more than two ticks, the backlog is cut down to one owed tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ticker {
    accumulated_time: f32,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulated_time(&self) -> f32 {
        self.accumulated_time
    }

    pub fn advance(&mut self, real_dt: f32) -> bool {
        self.accumulated_time += real_dt;
        if self.accumulated_time > 2.0 * GAME_TICKRATE {
            warn!(
                "LAG by {:.2}ms",
                (self.accumulated_time - 2.0 * GAME_TICKRATE) * 1000.0
            );
            self.accumulated_time = 2.0 * GAME_TICKRATE;
        }

        if self.accumulated_time >= GAME_TICKRATE {
            self.accumulated_time -= GAME_TICKRATE;
            true
        } else {
            false
        }
    }
}
