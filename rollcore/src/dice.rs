//! Keypad entry and roll state machine for the dice roller.
//!
//! Digit keys shift into one of two registers selected by the entry
//! mode; `convert` derives the integer dice count and face count on
//! demand and they stay stale otherwise. A roll runs a fixed 14-frame
//! animation whose per-frame delay widens quadratically, then always
//! lands back in count entry.

use log::debug;

use crate::digits::DigitShift;

/// Frames per roll animation.
pub const ANIMATION_STEPS: u8 = 14;

/// Base per-frame delay; the accumulator adds `2*i` after frame `i`,
/// so frame `i` sleeps `50 + i*(i-1)` ms.
pub const STEP_DELAY_BASE_MS: u32 = 50;

/// Semantic keypad commands. The board keymap translates legend
/// symbols into these; symbols without a command never get here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(u8),
    Preset { count: u32, faces: u32 },
    ToggleEntry,
    Clear,
    Roll,
}

/// Which register digit keys currently feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Count,
    Faces,
}

/// Display lines dirtied by a state mutation. Mutators report what
/// they touched; the caller decides when to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    None,
    Selected,
    Rolled,
    Both,
}

pub struct DiceState {
    count: DigitShift<2>,
    faces: DigitShift<3>,
    entry: EntryMode,
    dice_count: u32,
    dice_faces: u32,
    last_roll: u32,
}

impl Default for DiceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceState {
    pub const fn new() -> Self {
        Self {
            count: DigitShift::new(),
            faces: DigitShift::new(),
            entry: EntryMode::Count,
            dice_count: 0,
            dice_faces: 0,
            last_roll: 0,
        }
    }

    pub fn entry(&self) -> EntryMode {
        self.entry
    }

    pub fn count(&self) -> &DigitShift<2> {
        &self.count
    }

    pub fn faces(&self) -> &DigitShift<3> {
        &self.faces
    }

    pub fn last_roll(&self) -> u32 {
        self.last_roll
    }

    /// Shift a digit into the register the entry mode selects.
    pub fn enter_digit(&mut self, d: u8) -> Refresh {
        match self.entry {
            EntryMode::Count => self.count.push(d),
            EntryMode::Faces => self.faces.push(d),
        }
        Refresh::Selected
    }

    /// Flip between count entry and face entry. Registers are untouched.
    pub fn toggle_entry(&mut self) -> Refresh {
        self.entry = match self.entry {
            EntryMode::Count => EntryMode::Faces,
            EntryMode::Faces => EntryMode::Count,
        };
        Refresh::None
    }

    /// Overwrite both registers from a fixed preset. The entry mode is
    /// left as-is.
    pub fn apply_preset(&mut self, count: u32, faces: u32) -> Refresh {
        self.count.set_value(count);
        self.faces.set_value(faces);
        Refresh::Selected
    }

    /// Reset registers, derived integers, and the last roll.
    pub fn clear(&mut self) -> Refresh {
        self.count.clear();
        self.faces.clear();
        self.entry = EntryMode::Count;
        self.dice_count = 0;
        self.dice_faces = 0;
        self.last_roll = 0;
        Refresh::Both
    }

    /// Derive the integer dice count and face count from the registers.
    /// Until this runs the derived values are whatever the last call
    /// produced.
    pub fn convert(&mut self) {
        self.dice_count = self.count.value();
        self.dice_faces = self.faces.value();
    }

    /// Inclusive range a roll frame draws from. Collapses to `(0, 0)`
    /// when `convert` has never run.
    pub fn roll_bounds(&self) -> (u32, u32) {
        (self.dice_count, self.dice_count * self.dice_faces)
    }

    pub fn record_roll(&mut self, total: u32) -> Refresh {
        debug!("rolled {}", total);
        self.last_roll = total;
        Refresh::Rolled
    }

    /// The animation always ends back in count entry.
    pub fn finish_roll(&mut self) {
        self.entry = EntryMode::Count;
    }
}

/// Paces the roll frames: yields exactly [`ANIMATION_STEPS`] steps,
/// each carrying its frame index and the delay to sleep after drawing.
pub struct RollAnimation {
    step: u8,
    slow: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollStep {
    pub index: u8,
    pub delay_ms: u32,
}

impl Default for RollAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl RollAnimation {
    pub const fn new() -> Self {
        Self { step: 0, slow: 0 }
    }

    pub fn next_step(&mut self) -> Option<RollStep> {
        if self.step >= ANIMATION_STEPS {
            return None;
        }
        let out = RollStep {
            index: self.step,
            delay_ms: STEP_DELAY_BASE_MS + self.slow,
        };
        self.slow += 2 * self.step as u32;
        self.step += 1;
        Some(out)
    }
}

const GLYPH_IDS: [u8; ANIMATION_STEPS as usize] =
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

/// Glyph ids drawn into the animation cell for a frame. Frame 0 draws
/// glyph 1 and then glyph 2 into the same cell; every later frame
/// draws the single glyph `index + 1`.
pub fn glyphs_for_step(index: u8) -> &'static [u8] {
    let i = index as usize;
    match i {
        0 => &GLYPH_IDS[0..2],
        1..=13 => &GLYPH_IDS[i..i + 1],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_route_by_entry_mode() {
        let mut state = DiceState::new();
        state.enter_digit(1);
        state.enter_digit(2);
        // count register holds the two most recent, newest in the ones place
        assert_eq!((state.count().digit(0), state.count().digit(1)), (2, 1));
        assert_eq!(state.faces().value(), 0);

        state.toggle_entry();
        state.enter_digit(3);
        state.enter_digit(4);
        state.enter_digit(5);
        assert_eq!(state.count().value(), 12);
        assert_eq!(
            (
                state.faces().digit(0),
                state.faces().digit(1),
                state.faces().digit(2)
            ),
            (5, 4, 3)
        );
    }

    #[test]
    fn face_entry_discards_oldest_beyond_three() {
        let mut state = DiceState::new();
        state.toggle_entry();
        for d in [9, 1, 2, 0] {
            state.enter_digit(d);
        }
        assert_eq!(state.faces().value(), 120);
    }

    #[test]
    fn toggle_entry_flips_and_preserves_registers() {
        let mut state = DiceState::new();
        state.enter_digit(7);
        assert_eq!(state.entry(), EntryMode::Count);
        state.toggle_entry();
        assert_eq!(state.entry(), EntryMode::Faces);
        state.toggle_entry();
        assert_eq!(state.entry(), EntryMode::Count);
        assert_eq!(state.count().value(), 7);
    }

    #[test]
    fn preset_overwrites_both_registers() {
        let mut state = DiceState::new();
        state.enter_digit(9);
        state.apply_preset(1, 20);
        assert_eq!(state.count().value(), 1);
        assert_eq!(state.faces().value(), 20);
        assert_eq!(
            (
                state.faces().digit(2),
                state.faces().digit(1),
                state.faces().digit(0)
            ),
            (0, 2, 0)
        );
    }

    #[test]
    fn preset_keeps_entry_mode() {
        let mut state = DiceState::new();
        state.toggle_entry();
        state.apply_preset(1, 6);
        // a preset does not pull the machine back to count entry
        assert_eq!(state.entry(), EntryMode::Faces);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = DiceState::new();
        state.apply_preset(2, 12);
        state.convert();
        state.record_roll(17);
        state.toggle_entry();

        assert_eq!(state.clear(), Refresh::Both);
        assert_eq!(state.count().value(), 0);
        assert_eq!(state.faces().value(), 0);
        assert_eq!(state.roll_bounds(), (0, 0));
        assert_eq!(state.last_roll(), 0);
        assert_eq!(state.entry(), EntryMode::Count);
    }

    #[test]
    fn convert_derives_inclusive_bounds() {
        let mut state = DiceState::new();
        state.apply_preset(1, 6);
        state.convert();
        assert_eq!(state.roll_bounds(), (1, 6));

        state.apply_preset(2, 10);
        state.convert();
        assert_eq!(state.roll_bounds(), (2, 20));
    }

    #[test]
    fn bounds_stay_stale_until_convert() {
        let mut state = DiceState::new();
        assert_eq!(state.roll_bounds(), (0, 0));

        state.apply_preset(1, 6);
        // nothing derived yet
        assert_eq!(state.roll_bounds(), (0, 0));
        state.convert();
        assert_eq!(state.roll_bounds(), (1, 6));

        state.enter_digit(3);
        assert_eq!(state.roll_bounds(), (1, 6));
        state.convert();
        assert_eq!(state.roll_bounds(), (31, 186));
    }

    #[test]
    fn animation_yields_exactly_fourteen_frames() {
        let mut anim = RollAnimation::new();
        let mut n = 0;
        while anim.next_step().is_some() {
            n += 1;
        }
        assert_eq!(n, 14);
        assert_eq!(anim.next_step(), None);
    }

    #[test]
    fn frame_delays_widen_quadratically() {
        let mut anim = RollAnimation::new();
        let mut delays = [0u32; ANIMATION_STEPS as usize];
        while let Some(step) = anim.next_step() {
            delays[step.index as usize] = step.delay_ms;
        }
        // delay(i) = 50 + i*(i-1)
        assert_eq!(&delays[..6], &[50, 50, 52, 56, 62, 70]);
        assert_eq!(delays[13], 50 + 13 * 12);
    }

    #[test]
    fn frame_zero_draws_two_glyphs() {
        assert_eq!(glyphs_for_step(0), &[1, 2]);
    }

    #[test]
    fn later_frames_draw_their_single_glyph() {
        for i in 1..=13u8 {
            assert_eq!(glyphs_for_step(i), &[i + 1]);
        }
        assert!(glyphs_for_step(14).is_empty());
    }

    #[test]
    fn one_d_six_roll_draws_stay_in_range() {
        use crate::rng::XorShift32;

        let mut state = DiceState::new();
        state.apply_preset(1, 6);
        state.convert();
        let (lo, hi) = state.roll_bounds();

        let mut rng = XorShift32::new(0xdead_beef);
        let mut anim = RollAnimation::new();
        let mut frames = 0;
        while anim.next_step().is_some() {
            let total = rng.uniform_inclusive(lo, hi);
            assert!((1..=6).contains(&total));
            state.record_roll(total);
            frames += 1;
        }
        state.finish_roll();

        assert_eq!(frames, 14);
        assert!((1..=6).contains(&state.last_roll()));
        assert_eq!(state.entry(), EntryMode::Count);
    }

    #[test]
    fn unconverted_roll_draws_zero() {
        use crate::rng::XorShift32;

        let state = DiceState::new();
        let (lo, hi) = state.roll_bounds();
        let mut rng = XorShift32::new(7);
        for _ in 0..ANIMATION_STEPS {
            assert_eq!(rng.uniform_inclusive(lo, hi), 0);
        }
    }

    #[test]
    fn finish_roll_returns_to_count_entry() {
        let mut state = DiceState::new();
        state.toggle_entry();
        state.finish_roll();
        assert_eq!(state.entry(), EntryMode::Count);
    }
}
