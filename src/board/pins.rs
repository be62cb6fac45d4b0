//! Dice roller build
//!
//! GPIO |    Function    |      Notes
//! -----+----------------+----------------------------------
//!  0-3 | Keypad rows    | Driven low one at a time per scan
//!  4-7 | Keypad columns | Inputs, internal pull-ups
//!  8   | LCD RS         | Register select
//!  9   | LCD EN         | Write strobe, latches on falling edge
//! 10   | LCD D4         | 4-bit data bus
//! 11   | LCD D5         |
//! 18   | LCD D6         |
//! 19   | LCD D7         |
//!
//! Cube build
//!
//! GPIO |    Function    |      Notes
//! -----+----------------+----------------------------------
//!  0-4 | Layer 0-4      | Enable one at a time
//!  5-9 | Anode 0-4      | Enable one at a time
//! 10   | Cathode 0      | Enable desired LEDs
//! 11   | Cathode 1      |
//! 18   | Cathode 2      |
//! 19   | Cathode 3      |
//! 20   | Cathode 4      |
//!
//! GPIO12-17 are flash lines on ESP32-C3 and stay untouched.

// ----- Dice roller: LCD -----
pub const LCD_RS: u8 = 8;
pub const LCD_EN: u8 = 9;
pub const LCD_D4: u8 = 10;
pub const LCD_D5: u8 = 11;
pub const LCD_D6: u8 = 18;
pub const LCD_D7: u8 = 19;

// ----- Dice roller: keypad matrix -----
pub const KEY_ROW_PINS: [u8; 4] = [0, 1, 2, 3];
pub const KEY_COL_PINS: [u8; 4] = [4, 5, 6, 7];

// ----- Cube: select/drive banks -----
pub const LAYER_PINS: [u8; 5] = [0, 1, 2, 3, 4];
pub const ANODE_PINS: [u8; 5] = [5, 6, 7, 8, 9];
pub const CATHODE_PINS: [u8; 5] = [10, 11, 18, 19, 20];
