use std::fmt::Write;
use std::sync::{LazyLock, Mutex};

use log::{Level, Log, Metadata, Record, SetLoggerError};
use macroquad::prelude::*;

use crate::screentext::{Line, SCREENTEXT_FONT_SIZE};

const DBG_MSG_LIFE: f32 = 3.0;
const DBG_MSG_CAP: usize = 30;

#[derive(Clone)]
struct DebugMsg {
    line: Line,
    spawn_time: f32,
}

/// Ring buffer of the most recent log messages.
pub(crate) struct DebugMsgStore {
    cursor: usize,
    messages: [DebugMsg; DBG_MSG_CAP],
}

impl DebugMsgStore {
    fn new() -> Self {
        Self {
            cursor: 0,
            messages: std::array::from_fn(|_| DebugMsg {
                line: Line::new(),
                spawn_time: f32::NEG_INFINITY,
            }),
        }
    }

    pub(crate) fn put(&mut self, msg: &str, color: Color, time: f32) {
        let cell = &mut self.messages[self.cursor];

        cell.line.clear();
        cell.line.put(msg);
        cell.line.color = color;
        cell.spawn_time = time;

        self.cursor = (self.cursor + 1) % DBG_MSG_CAP;
    }

    /// Messages younger than [DBG_MSG_LIFE], oldest first.
    pub(crate) fn alive(&self, time: f32) -> impl Iterator<Item = &Line> + '_ {
        let (newer, older) = self.messages.split_at(self.cursor);
        older
            .iter()
            .chain(newer.iter())
            .filter(move |msg| msg.spawn_time + DBG_MSG_LIFE >= time)
            .map(|msg| &msg.line)
    }
}

static DEBUG_CELL: LazyLock<Mutex<DebugMsgStore>> =
    LazyLock::new(|| Mutex::new(DebugMsgStore::new()));

#[derive(Clone, Copy, Debug)]
struct OnScreenLog;

static ON_SCREEN_LOG: OnScreenLog = OnScreenLog;

impl Log for OnScreenLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => RED,
            Level::Warn => YELLOW,
            Level::Info => GREEN,
            Level::Debug => WHITE,
            Level::Trace => GRAY,
        };

        #[cfg(not(target_family = "wasm"))]
        eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());

        let mut msg = String::new();
        if write!(&mut msg, "{}", record.args()).is_err() {
            return;
        }

        let mut cell = DEBUG_CELL.lock().unwrap_or_else(|e| e.into_inner());
        cell.put(&msg, color, get_time() as f32);
    }

    fn flush(&self) { /* NOOP */
    }
}

/// Installs the on-screen logger as the global `log` sink.
/// Messages stay visible for a few seconds after being logged.
pub fn init_on_screen_log() -> Result<(), SetLoggerError> {
    log::set_logger(&ON_SCREEN_LOG)
}

/// Draws the recent log messages in the top-left corner.
pub fn draw_log_events() {
    let cell = DEBUG_CELL.lock().unwrap_or_else(|e| e.into_inner());
    let time = get_time() as f32;

    set_default_camera();
    for (idx, line) in cell.alive(time).enumerate() {
        draw_text(
            &line.buf,
            0.0,
            (idx + 1) as f32 * SCREENTEXT_FONT_SIZE,
            SCREENTEXT_FONT_SIZE,
            line.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_expire() {
        let mut store = DebugMsgStore::new();
        store.put("hit 1", WHITE, 0.0);
        store.put("hit 2", WHITE, 2.0);

        let alive = store.alive(4.0).map(|l| l.buf.as_str()).collect::<Vec<_>>();
        assert_eq!(alive, vec!["hit 2"]);
    }

    #[test]
    fn test_ring_keeps_newest_in_order() {
        let mut store = DebugMsgStore::new();
        for idx in 0..(DBG_MSG_CAP + 5) {
            store.put(&format!("msg {idx}"), WHITE, 1.0);
        }

        let alive = store.alive(1.0).map(|l| l.buf.clone()).collect::<Vec<_>>();
        assert_eq!(alive.len(), DBG_MSG_CAP);
        assert_eq!(alive.first().map(String::as_str), Some("msg 5"));
        assert_eq!(
            alive.last().map(String::as_str),
            Some(format!("msg {}", DBG_MSG_CAP + 4).as_str()),
        );
    }

    #[test]
    fn test_second_install_is_a_std_error() {
        let _ = init_on_screen_log();
        let err = init_on_screen_log().unwrap_err();

        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert!(!err.to_string().is_empty());
    }
}
