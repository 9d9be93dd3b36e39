use macroquad::prelude::*;

pub(crate) const SCREENTEXT_LINES: usize = 32;
pub(crate) const SCREENTEXT_CHARS_PER_LINE: usize = 120;
pub(crate) const SCREENTEXT_FONT_SIZE: f32 = 16.0;
pub(crate) const SCREENTEXT_BACKGROUND: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.6,
};

#[derive(Clone)]
pub(crate) struct Line {
    pub(crate) buf: String,
    pub(crate) color: Color,
}

impl Line {
    pub(crate) fn new() -> Self {
        Self {
            buf: String::with_capacity(SCREENTEXT_CHARS_PER_LINE),
            color: WHITE,
        }
    }

    /// Appends to the line, silently cutting whatever does
    /// not fit. Never reallocates.
    pub(crate) fn put(&mut self, mut s: &str) {
        let used = self.buf.len();
        if used >= SCREENTEXT_CHARS_PER_LINE {
            return;
        }
        let remaining = SCREENTEXT_CHARS_PER_LINE - used;

        if s.len() > remaining {
            let mut cut = remaining;
            while !s.is_char_boundary(cut) {
                cut -= 1;
            }
            s = &s[..cut];
        }

        self.buf.push_str(s);
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// A fixed block of lines drawn in screen space.
pub(crate) struct ScreenText {
    pub(crate) lines: Vec<Line>,
}

impl ScreenText {
    pub(crate) fn new() -> Self {
        Self {
            lines: vec![Line::new(); SCREENTEXT_LINES],
        }
    }

    pub(crate) fn used_lines(&self) -> usize {
        self.lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    pub(crate) fn draw(&self, x: f32, y: f32) {
        let used = self.used_lines();
        if used == 0 {
            return;
        }

        set_default_camera();
        let width = self
            .lines
            .iter()
            .take(used)
            .map(|line| measure_text(&line.buf, None, SCREENTEXT_FONT_SIZE as u16, 1.0).width)
            .fold(0.0f32, f32::max);

        draw_rectangle(
            x,
            y,
            width + 8.0,
            used as f32 * SCREENTEXT_FONT_SIZE + 4.0,
            SCREENTEXT_BACKGROUND,
        );

        for (idx, line) in self.lines.iter().take(used).enumerate() {
            draw_text(
                &line.buf,
                x + 4.0,
                y + (idx + 1) as f32 * SCREENTEXT_FONT_SIZE,
                SCREENTEXT_FONT_SIZE,
                line.color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Line, SCREENTEXT_CHARS_PER_LINE, ScreenText};

    #[test]
    fn test_line_overfill() {
        let mut line = Line::new();

        let samples = ["1"; 3000];

        for (idx, s) in samples.into_iter().enumerate() {
            if idx % 500 == 0 {
                line.clear();
            }

            line.put(s);

            assert!(line.buf.len() <= SCREENTEXT_CHARS_PER_LINE);
            assert!(line.buf.capacity() <= SCREENTEXT_CHARS_PER_LINE);
        }
    }

    #[test]
    fn test_line_cuts_on_char_boundary() {
        let mut line = Line::new();
        line.put(&"a".repeat(SCREENTEXT_CHARS_PER_LINE - 1));
        line.put("ééé");

        assert_eq!(line.buf.len(), SCREENTEXT_CHARS_PER_LINE - 1);
    }

    #[test]
    fn test_used_lines() {
        let mut text = ScreenText::new();
        assert_eq!(text.used_lines(), 0);

        text.lines[3].put("score: 1");
        assert_eq!(text.used_lines(), 4);
    }
}
