// dice roller entry point and poll loop
//
// Boot sequence: logger -> HAL -> board -> LCD init -> glyph upload
// -> clear -> first render.
// Main loop: scan the keypad every 10ms, map the symbol to a command,
// mutate the state machine, repaint whichever lines it dirtied.
// A roll blocks in place for its 14 frames; nothing else runs.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use log::info;

use rollbox::board::{DiceBoard, Lcd, keymap};
use rollbox::drivers::keypad::KeypadDriver;
use rollcore::dice::{Command, DiceState, Refresh, RollAnimation, glyphs_for_step};
use rollcore::rng::XorShift32;
use rollcore::text::{LineBuf, rolled_line, selected_line};

esp_bootloader_esp_idf::esp_app_desc!();

const TICK_MS: u32 = 10;

// LCD cell the animation glyph spins in
const ANIM_COL: u8 = 7;
const ANIM_ROW: u8 = 1;

// 5x8 animation glyphs, a dot orbiting the cell edge (CGRAM ids 1-8;
// id 8 lands in slot 0 through the CGRAM mirror)
const ANIM_GLYPHS: [[u8; 8]; 8] = [
    [0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x0C, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x06, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
];

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let mut board = DiceBoard::init(peripherals);
    let mut delay = Delay::new();
    board.lcd.init(&mut delay);
    for (i, bitmap) in ANIM_GLYPHS.iter().enumerate() {
        board.lcd.create_char(i as u8 + 1, bitmap, &mut delay);
    }
    info!("hardware initialized.");

    let seed = esp_hal::rng::Rng::new().random();
    let mut rng = XorShift32::new(seed);

    let mut keypad = KeypadDriver::new(board.keypad);
    let mut state = DiceState::new();

    state.clear();
    draw_selected(&mut board.lcd, &state, &mut delay);
    draw_rolled(&mut board.lcd, state.last_roll(), &mut delay);
    info!("ready.");

    loop {
        if let Some(symbol) = keypad.poll()
            && let Some(cmd) = keymap::map_key(symbol)
        {
            dispatch(cmd, &mut state, &mut rng, &mut board.lcd, &mut delay);
        }
        delay.delay_millis(TICK_MS);
    }
}

fn dispatch(
    cmd: Command,
    state: &mut DiceState,
    rng: &mut XorShift32,
    lcd: &mut Lcd,
    delay: &mut Delay,
) {
    let refresh = match cmd {
        Command::Digit(d) => state.enter_digit(d),
        Command::ToggleEntry => state.toggle_entry(),
        Command::Preset { count, faces } => state.apply_preset(count, faces),
        Command::Clear => state.clear(),
        Command::Roll => {
            run_roll(state, rng, lcd, delay);
            Refresh::None // the frames already painted the rolled line
        }
    };

    match refresh {
        Refresh::None => {}
        Refresh::Selected => draw_selected(lcd, state, delay),
        Refresh::Rolled => draw_rolled(lcd, state.last_roll(), delay),
        Refresh::Both => {
            draw_selected(lcd, state, delay);
            draw_rolled(lcd, state.last_roll(), delay);
        }
    }
}

// 14 frames: draw a fresh value, advance the spinner, sleep the
// widening step delay. Runs to completion; keys are not polled.
fn run_roll(state: &mut DiceState, rng: &mut XorShift32, lcd: &mut Lcd, delay: &mut Delay) {
    state.convert();
    let (lo, hi) = state.roll_bounds();

    let mut anim = RollAnimation::new();
    while let Some(frame) = anim.next_step() {
        let total = rng.uniform_inclusive(lo, hi);
        state.record_roll(total);
        draw_rolled(lcd, total, delay);
        for &glyph in glyphs_for_step(frame.index) {
            lcd.set_cursor(ANIM_COL, ANIM_ROW, delay);
            lcd.write_raw(glyph, delay);
        }
        delay.delay_millis(frame.delay_ms);
    }
    state.finish_roll();
    info!("rolled {} ({}..={})", state.last_roll(), lo, hi);
}

fn draw_selected(lcd: &mut Lcd, state: &DiceState, delay: &mut Delay) {
    let mut line = LineBuf::new();
    selected_line(state, &mut line);
    lcd.set_cursor(0, 0, delay);
    lcd.print(line.as_str(), delay);
}

fn draw_rolled(lcd: &mut Lcd, total: u32, delay: &mut Delay) {
    let mut line = LineBuf::new();
    rolled_line(total, &mut line);
    lcd.set_cursor(0, 1, delay);
    lcd.print(line.as_str(), delay);
}
