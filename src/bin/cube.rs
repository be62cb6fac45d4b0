// LED cube entry point
//
// Brings up the 15 select lines, then applies the LED address in a
// tight loop. The address is rebuilt from zero on every pass — as
// wired here the board holds a single dark cell until a scanning
// caller drives set_address with real coordinates.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use log::info;

use rollbox::board::CubeBoard;
use rollcore::cube::LedAddress;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let mut board = CubeBoard::init(peripherals);
    info!("cube lines configured.");

    loop {
        let address = LedAddress::default();
        board.cube.set_address(&address);
    }
}
