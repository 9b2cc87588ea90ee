use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{debug, info};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use c8vm_core::{Chip8, StepResult};
use c8vm_display::Display;

use crate::keymap::keymap;

pub struct Config {
    pub rom: PathBuf,
    pub scale: u32,
    pub cycles_per_frame: u32,
    pub frame_rate: u32,
    pub seed: Option<u64>,
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let mut chip8 = match config.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let rom = fs::read(&config.rom)
        .with_context(|| format!("unable to read ROM {}", config.rom.display()))?;
    let loaded = chip8.load_program(&rom);
    info!("loaded {} bytes from {}", loaded, config.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let title = format!("c8vm - {}", config.rom.display());
    let mut display = Display::new(&sdl, &title, config.scale).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    // Set initial timing
    let frame_time = Duration::from_secs(1) / config.frame_rate;
    let mut last_frame = Instant::now();

    // Whether or not the frame rate should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.set_key(kc, true)?,
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Backspace, _) => {
                        info!("restarting");
                        chip8.reset();
                        chip8.load_program(&rom);
                    }
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.set_key(kc, false)?,
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => chip8.release_keys(),
                _ => continue,
            };
        }

        // Update state
        for _ in 0..config.cycles_per_frame {
            if let StepResult::AwaitingKey(x) = chip8.step() {
                debug!("waiting on a key for v{:X}", x);
                break;
            }
        }
        chip8.tick();

        // If the frame changed, render it
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame).map_err(|e| anyhow!(e))?;
        }

        // Handle timing
        let elapsed = last_frame.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }

    Ok(())
}
