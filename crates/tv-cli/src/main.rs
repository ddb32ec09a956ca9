//! `testvec` - deterministic `.mem` test vectors for matmul accelerators.
//!
//! Draws a seeded operand pair, computes the exact golden product, reorders
//! the operands for the selected hardware feed pattern (block-major tiling,
//! systolic skewing, or a plain row-major dump), and writes fixed-width hex
//! artifacts atomically.

mod config;
mod error;
mod pipeline;
mod progress;

use clap::Parser;

use config::Config;
use progress::{ConsoleProgress, Progress, SilentProgress};

fn main() {
    let cfg = Config::parse();
    let progress: &dyn Progress = if cfg.quiet {
        &SilentProgress
    } else {
        &ConsoleProgress
    };

    if let Err(err) = pipeline::run(&cfg, progress) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
