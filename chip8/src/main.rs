use std::path::PathBuf;

use clap::Parser;

mod keymap;
mod run;

/// Runs a CHIP-8 program in a window.
///
/// Keys 0-9 and A-F drive the hex keypad. Escape quits, Backspace restarts the
/// program and holding Space runs it unthrottled.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Raw CHIP-8 program to load at 0x200
    rom: PathBuf,

    /// Window pixels per CHIP-8 pixel
    #[arg(short, long, default_value_t = 10)]
    scale: u32,

    /// Instructions executed per frame
    #[arg(short, long, default_value_t = 4)]
    cycles_per_frame: u32,

    /// Frames per second; the timers tick once per frame
    #[arg(short, long, default_value_t = 60)]
    frame_rate: u32,

    /// Seed for the RND instruction, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    run::run(run::Config {
        rom: args.rom,
        scale: args.scale,
        cycles_per_frame: args.cycles_per_frame,
        frame_rate: args.frame_rate.max(1),
        seed: args.seed,
    })
}
