//! Board support for the two gadget builds.
//!
//! Maps physical hardware to named subsystems so the binaries and
//! drivers never touch raw GPIO numbers. `DiceBoard` and `CubeBoard`
//! are alternative wirings of the same MCU module; each image brings
//! up exactly one of them.

pub mod keymap;
pub mod pins;

pub use keymap::{KEY_COLS, KEY_ROWS, decode, map_key};

use esp_hal::{
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::Peripherals,
};

use crate::drivers::cube::CubeDriver;
use crate::drivers::hd44780::Hd44780;

// Type Aliases
pub type Lcd = Hd44780<Output<'static>>;
pub type Cube = CubeDriver<Output<'static>>;

/// Keypad matrix hardware: row drive lines + pulled-up column senses.
pub struct KeypadHw {
    pub rows: [Output<'static>; KEY_ROWS],
    pub cols: [Input<'static>; KEY_COLS],
}

/// Dice roller build: 16x2 LCD + 4x4 keypad.
pub struct DiceBoard {
    pub lcd: Lcd,
    pub keypad: KeypadHw,
}

impl DiceBoard {
    pub fn init(p: Peripherals) -> Self {
        let rs = Output::new(p.GPIO8, Level::Low, OutputConfig::default());
        let en = Output::new(p.GPIO9, Level::Low, OutputConfig::default());
        let data = [
            Output::new(p.GPIO10, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO11, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO18, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO19, Level::Low, OutputConfig::default()),
        ];
        let lcd = Hd44780::new(rs, en, data);

        // rows idle high; the scan drives one low at a time
        let rows = [
            Output::new(p.GPIO0, Level::High, OutputConfig::default()),
            Output::new(p.GPIO1, Level::High, OutputConfig::default()),
            Output::new(p.GPIO2, Level::High, OutputConfig::default()),
            Output::new(p.GPIO3, Level::High, OutputConfig::default()),
        ];
        let cols = [
            Input::new(p.GPIO4, InputConfig::default().with_pull(Pull::Up)),
            Input::new(p.GPIO5, InputConfig::default().with_pull(Pull::Up)),
            Input::new(p.GPIO6, InputConfig::default().with_pull(Pull::Up)),
            Input::new(p.GPIO7, InputConfig::default().with_pull(Pull::Up)),
        ];

        DiceBoard {
            lcd,
            keypad: KeypadHw { rows, cols },
        }
    }
}

/// Cube build: 15 select/drive lines, all initially low (everything
/// dark until the first address is applied).
pub struct CubeBoard {
    pub cube: Cube,
}

impl CubeBoard {
    pub fn init(p: Peripherals) -> Self {
        let layers = [
            Output::new(p.GPIO0, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO1, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO2, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO3, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO4, Level::Low, OutputConfig::default()),
        ];
        let anodes = [
            Output::new(p.GPIO5, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO6, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO7, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO8, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO9, Level::Low, OutputConfig::default()),
        ];
        let cathodes = [
            Output::new(p.GPIO10, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO11, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO18, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO19, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO20, Level::Low, OutputConfig::default()),
        ];

        CubeBoard {
            cube: CubeDriver::new(layers, anodes, cathodes),
        }
    }
}
