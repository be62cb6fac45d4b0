// bench firmware for two keypad/LED gadgets: a dice roller on a 16x2
// character LCD and a 5x5x5 multiplexed LED cube (ESP32-C3)

#![no_std]

pub mod board;
pub mod drivers;
