use crate::screentext::*;
use macroquad::prelude::*;

use std::{
    fmt,
    sync::{LazyLock, Mutex},
};

struct ScreenDumpImpl {
    curr_line: usize,
    text: ScreenText,
}

impl ScreenDumpImpl {
    fn new() -> Self {
        ScreenDumpImpl {
            curr_line: 0,
            text: ScreenText::new(),
        }
    }

    fn write_str_no_newline(&mut self, s: &str) {
        let Some(line) = self.text.lines.get_mut(self.curr_line) else {
            return;
        };

        line.color = WHITE;
        line.put(s);
    }

    fn next_line(&mut self) {
        if self.curr_line == SCREENTEXT_LINES {
            return;
        }

        self.curr_line += 1;
    }

    fn wipe(&mut self) {
        self.curr_line = 0;
        for line in self.text.lines.iter_mut() {
            line.clear();
        }
    }
}

impl fmt::Write for ScreenDumpImpl {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut next = Some(s);
        while let Some(mut curr) = next.take() {
            if curr.is_empty() {
                break;
            }

            if let Some((line, rest)) = curr.split_once('\n') {
                curr = line;
                next = Some(rest);
            }

            self.write_str_no_newline(curr);

            if next.is_some() {
                self.next_line();
            }
        }

        Ok(())
    }
}

static GLOBAL_DUMP: LazyLock<Mutex<ScreenDumpImpl>> =
    LazyLock::new(|| Mutex::new(ScreenDumpImpl::new()));

/// Per-frame diagnostic text. Everything written during a frame
/// is shown by [ScreenDump::draw] and dropped by [ScreenDump::new_frame].
/// Use it through the [crate::dump] macro.
pub struct ScreenDump;

impl ScreenDump {
    fn scope<R>(scope: impl FnOnce(&mut ScreenDumpImpl) -> R) -> R {
        let mut lock = GLOBAL_DUMP.lock().unwrap_or_else(|e| e.into_inner());
        scope(&mut lock)
    }

    pub fn draw() {
        Self::scope(|con| con.text.draw(0.0, screen_height() / 2.0))
    }

    pub fn new_frame() {
        Self::scope(|con| con.wipe());
    }

    #[cfg(test)]
    pub(crate) fn snapshot() -> Vec<String> {
        Self::scope(|con| {
            con.text
                .lines
                .iter()
                .take(con.text.used_lines())
                .map(|line| line.buf.clone())
                .collect()
        })
    }
}

impl fmt::Write for ScreenDump {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Self::scope(|con| fmt::Write::write_str(con, s))
    }
}

#[macro_export]
macro_rules! dump {
    ($($arg:tt)+) => {
        // Writing into the dump never fails
        let _ = std::fmt::write(&mut $crate::ScreenDump,
            std::format_args!("{}\n", std::format_args!($($arg)+)),
        );
    };
}
