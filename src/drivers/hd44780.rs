// HD44780 character LCD driver, 4-bit parallel mode (board-independent)
// Write-only wiring: RS + EN + D4-D7, R/W strapped to ground, so the
// busy flag can't be read back; timing is held by worst-case delays.

use embedded_hal::digital::OutputPin;
use esp_hal::delay::Delay;

pub const COLS: u8 = 16;
pub const ROWS: u8 = 2;

// HD44780 instruction set
#[allow(dead_code)]
mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const SHIFT: u8 = 0x10;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

// ENTRY_MODE_SET: increment cursor, no display shift
const ENTRY_INCREMENT: u8 = 0x02;
// DISPLAY_CONTROL: display on, cursor and blink off
const DISPLAY_ON: u8 = 0x04;
// FUNCTION_SET: 4-bit bus, 2 lines, 5x8 font
const TWO_LINES_5X8: u8 = 0x08;

const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

pub struct Hd44780<P> {
    rs: P,
    en: P,
    data: [P; 4], // D4..D7
}

impl<P: OutputPin> Hd44780<P> {
    pub fn new(rs: P, en: P, data: [P; 4]) -> Self {
        Self { rs, en, data }
    }

    /// Power-on init into 4-bit mode, 2 lines, 5x8 font, cursor off.
    pub fn init(&mut self, delay: &mut Delay) {
        delay.delay_millis(50); // Vcc rise

        let _ = self.rs.set_low();
        let _ = self.en.set_low();

        // reset-by-instruction, then drop the bus to 4 bits
        self.write_nibble(0x03, delay);
        delay.delay_millis(5);
        self.write_nibble(0x03, delay);
        delay.delay_micros(150);
        self.write_nibble(0x03, delay);
        delay.delay_micros(150);
        self.write_nibble(0x02, delay);
        delay.delay_micros(150);

        self.command(cmd::FUNCTION_SET | TWO_LINES_5X8, delay);
        self.command(cmd::DISPLAY_CONTROL | DISPLAY_ON, delay);
        self.clear(delay);
        self.command(cmd::ENTRY_MODE_SET | ENTRY_INCREMENT, delay);
    }

    pub fn clear(&mut self, delay: &mut Delay) {
        self.command(cmd::CLEAR_DISPLAY, delay);
        delay.delay_millis(2); // clear runs >1.5ms
    }

    pub fn set_cursor(&mut self, col: u8, row: u8, delay: &mut Delay) {
        let row = row.min(ROWS - 1);
        self.command(cmd::SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col), delay);
    }

    /// Write visible text at the cursor.
    pub fn print(&mut self, s: &str, delay: &mut Delay) {
        for &b in s.as_bytes() {
            self.write_data(b, delay);
        }
    }

    /// Write a raw character code — CGRAM glyph ids included.
    pub fn write_raw(&mut self, code: u8, delay: &mut Delay) {
        self.write_data(code, delay);
    }

    /// Upload a 5x8 glyph. CGRAM has 8 slots; codes 8-15 mirror 0-7.
    pub fn create_char(&mut self, slot: u8, bitmap: &[u8; 8], delay: &mut Delay) {
        let slot = slot & 0x07;
        self.command(cmd::SET_CGRAM_ADDR | (slot << 3), delay);
        for &row in bitmap {
            self.write_data(row, delay);
        }
    }

    fn command(&mut self, byte: u8, delay: &mut Delay) {
        let _ = self.rs.set_low();
        self.write_byte(byte, delay);
    }

    fn write_data(&mut self, byte: u8, delay: &mut Delay) {
        let _ = self.rs.set_high();
        self.write_byte(byte, delay);
    }

    fn write_byte(&mut self, byte: u8, delay: &mut Delay) {
        self.write_nibble(byte >> 4, delay);
        self.write_nibble(byte & 0x0F, delay);
    }

    fn write_nibble(&mut self, nibble: u8, delay: &mut Delay) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                let _ = pin.set_high();
            } else {
                let _ = pin.set_low();
            }
        }
        // the controller latches on the EN falling edge
        let _ = self.en.set_high();
        delay.delay_micros(1);
        let _ = self.en.set_low();
        delay.delay_micros(50); // instruction execution time
    }
}
