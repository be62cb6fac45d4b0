// Debounced 4x4 matrix keypad scan
//
// Rows are driven low in turn and the pulled-up columns sensed; one
// key at a time (first hit in scan order wins). 30ms debounce. A press
// is reported once, on its edge; holds and releases are silent.

use esp_hal::time::{Duration, Instant};

use crate::board::KeypadHw;
use crate::board::keymap::{KEY_COLS, KEY_ROWS, decode};

const DEBOUNCE_MS: u64 = 30;

pub struct KeypadDriver {
    hw: KeypadHw,
    stable: Option<u8>,
    candidate: Option<u8>,
    candidate_since: Instant,
}

impl KeypadDriver {
    pub fn new(hw: KeypadHw) -> Self {
        Self {
            hw,
            stable: None,
            candidate: None,
            candidate_since: Instant::now(),
        }
    }

    /// Scan the matrix; `Some(symbol)` only on a fresh debounced press.
    pub fn poll(&mut self) -> Option<u8> {
        let raw = self.read_raw();
        let now = Instant::now();

        if raw != self.candidate {
            self.candidate = raw;
            self.candidate_since = now;
        }

        let debounced = if now - self.candidate_since >= Duration::from_millis(DEBOUNCE_MS) {
            self.candidate
        } else {
            self.stable
        };

        if debounced != self.stable {
            self.stable = debounced;
            // press edges surface the symbol; release edges are None
            return self.stable;
        }

        None
    }

    fn read_raw(&mut self) -> Option<u8> {
        let mut hit = None;
        for r in 0..KEY_ROWS {
            self.hw.rows[r].set_low();
            for c in 0..KEY_COLS {
                if self.hw.cols[c].is_low() {
                    hit = Some(decode(r, c));
                    break;
                }
            }
            self.hw.rows[r].set_high();
            if hit.is_some() {
                break;
            }
        }
        hit
    }
}
