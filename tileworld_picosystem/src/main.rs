//! Tile platformer firmware for the PicoSystem.
//!
//! Built for `thumbv6m-none-eabi` this is the device firmware. Built for the
//! host it runs a short scripted session headless and prints the status line,
//! which is handy for checking level and physics changes without flashing.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std, no_main)]

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod display;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod hardware;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod input;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod panic;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod time;
#[cfg(all(target_arch = "arm", target_os = "none"))]
mod usb_logger;

use tileworld::config::Config;

#[cfg(all(target_arch = "arm", target_os = "none"))]
#[link_section = ".boot2"]
#[used]
pub static BOOT_LOADER: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

#[cfg(all(target_arch = "arm", target_os = "none"))]
#[cortex_m_rt::entry]
fn main() -> ! {
    use tileworld::frame::{FpsMonitor, FrameTimer};
    use tileworld::game::Game;
    use tileworld::input::ButtonState;
    use tileworld::level::MAP0;

    let mut hw = hardware::Hardware::new();
    let config = Config {
        screen_width: display::WIDTH as i32,
        screen_height: display::HEIGHT as i32,
        ..Config::DEFAULT
    };
    let mut game = match Game::new(config, &MAP0) {
        Ok(game) => game,
        Err(e) => panic!("Bad level: {}", e),
    };
    let mut buttons = ButtonState::new();
    let mut frame_timer = FrameTimer::new(config.frame_rate);
    let mut fps_monitor = FpsMonitor::new(time::time_us());
    log::info!("Finished initialization");

    loop {
        if !frame_timer.next_frame(time::time_us()) {
            continue;
        }
        buttons.poll(hw.input.sample());
        game.update(&buttons);
        hw.display.draw(|display| game.render(display).unwrap_or_else(|never| match never {}));
        fps_monitor.update(time::time_us());
    }
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
fn main() {
    use tileworld::game::Game;
    use tileworld::input::{Button, ButtonSet, ButtonState};
    use tileworld::level::MAP0;
    use tileworld::render::status_text;

    // (frames, buttons held)
    const SCRIPT: [(u32, ButtonSet); 6] = [
        (60, ButtonSet::EMPTY),
        (30, ButtonSet::EMPTY.with(Button::Left)),
        (1, ButtonSet::EMPTY.with(Button::Jump)),
        (20, ButtonSet::EMPTY),
        (60, ButtonSet::EMPTY.with(Button::Right)),
        (60, ButtonSet::EMPTY),
    ];

    let config = Config::DEFAULT;
    let mut game = match Game::new(config, &MAP0) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Bad level: {}", e);
            std::process::exit(1);
        }
    };
    let mut buttons = ButtonState::new();
    let mut frame = 0u32;
    for (frames, held) in SCRIPT {
        for _ in 0..frames {
            buttons.poll(held);
            game.update(&buttons);
            frame += 1;
            if frame % config.frame_rate == 0 {
                println!("frame {}\n{}\n", frame, status_text(game.camera(), game.player()));
            }
        }
    }
    println!("enemy at {:?}", game.enemy().position());
}
