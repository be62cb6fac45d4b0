//! Fixed-width line formatting for the 16x2 character LCD.
//!
//! `LineBuf` is a `fmt::Write` target sized to one LCD row; writes past
//! the end silently truncate.

use core::fmt::{self, Write as _};

use crate::dice::DiceState;

pub const LCD_COLS: usize = 16;

pub struct LineBuf {
    buf: [u8; LCD_COLS],
    len: usize,
}

impl Default for LineBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuf {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; LCD_COLS],
            len: 0,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl fmt::Write for LineBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let n = bytes.len().min(LCD_COLS - self.len);
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        Ok(())
    }
}

/// Row 0: `Selected: NNdFFF` — count digits tens-first, then the face
/// digits hundreds-first.
pub fn selected_line(state: &DiceState, out: &mut LineBuf) {
    out.clear();
    let _ = write!(
        out,
        "Selected: {}{}d{}{}{}",
        state.count().digit(1),
        state.count().digit(0),
        state.faces().digit(2),
        state.faces().digit(1),
        state.faces().digit(0),
    );
}

/// Row 1: `Rolled:    NNNNN` — the total right-aligned in a 5-column
/// field.
pub fn rolled_line(total: u32, out: &mut LineBuf) {
    out.clear();
    let _ = write!(out, "Rolled:    {:5}", total);
}

#[cfg(test)]
mod tests {
    use core::fmt::Write as _;

    use super::*;

    #[test]
    fn selected_line_renders_preset() {
        let mut state = DiceState::new();
        state.apply_preset(1, 20);
        let mut line = LineBuf::new();
        selected_line(&state, &mut line);
        assert_eq!(line.as_str(), "Selected: 01d020");
    }

    #[test]
    fn selected_line_renders_cleared_state() {
        let state = DiceState::new();
        let mut line = LineBuf::new();
        selected_line(&state, &mut line);
        assert_eq!(line.as_str(), "Selected: 00d000");
    }

    #[test]
    fn selected_line_fills_the_full_row() {
        let mut state = DiceState::new();
        state.apply_preset(12, 345);
        let mut line = LineBuf::new();
        selected_line(&state, &mut line);
        assert_eq!(line.as_str(), "Selected: 12d345");
        assert_eq!(line.as_str().len(), LCD_COLS);
    }

    #[test]
    fn rolled_line_right_aligns_the_total() {
        let mut line = LineBuf::new();
        rolled_line(0, &mut line);
        assert_eq!(line.as_str(), "Rolled:        0");

        rolled_line(42, &mut line);
        assert_eq!(line.as_str(), "Rolled:       42");

        rolled_line(98901, &mut line);
        assert_eq!(line.as_str(), "Rolled:    98901");
    }

    #[test]
    fn writes_past_the_row_truncate() {
        let mut line = LineBuf::new();
        let _ = write!(line, "{}", "x".repeat(40));
        assert_eq!(line.as_str().len(), LCD_COLS);
    }
}
