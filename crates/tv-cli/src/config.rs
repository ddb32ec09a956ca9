use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which data-movement pattern the artifacts encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Block-major operand streams for a tiled, weight-stationary array.
    Tiled,
    /// Per-cycle staggered lane streams for a wavefront systolic array.
    Skewed,
    /// Plain row-major operand dumps, no golden artifact.
    Flat,
}

/// Generate deterministic `.mem` test vectors for matmul accelerators.
#[derive(Debug, Parser)]
#[command(name = "testvec", version)]
pub struct Config {
    /// Matrix dimension N (operands and golden result are NxN).
    #[arg(long)]
    pub dim: usize,

    /// Block size B for tiled mode; must divide the dimension.
    #[arg(long, default_value_t = 8)]
    pub block: usize,

    /// Data-movement pattern to emit.
    #[arg(long, value_enum, default_value_t = Mode::Tiled)]
    pub mode: Mode,

    /// Bit width of operand tokens.
    #[arg(long = "data-width", default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub data_width: u32,

    /// Bit width of golden-result tokens and the accumulator check.
    #[arg(long = "acc-width", default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub acc_width: u32,

    /// Seed for the operand generator.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Override the operand-A artifact path.
    #[arg(long)]
    pub out_a: Option<PathBuf>,

    /// Override the operand-B artifact path.
    #[arg(long)]
    pub out_b: Option<PathBuf>,

    /// Override the golden-result artifact path.
    #[arg(long)]
    pub out_c: Option<PathBuf>,

    /// Suppress progress output.
    #[arg(long)]
    pub quiet: bool,
}

impl Config {
    /// Artifact path for the operand-A stream.
    pub fn out_a(&self) -> PathBuf {
        self.out_a.clone().unwrap_or_else(|| {
            PathBuf::from(match self.mode {
                Mode::Tiled => "matrix_a.mem",
                Mode::Skewed => "skewed_a.mem",
                Mode::Flat => "matrix_a_naive.mem",
            })
        })
    }

    /// Artifact path for the operand-B stream.
    pub fn out_b(&self) -> PathBuf {
        self.out_b.clone().unwrap_or_else(|| {
            PathBuf::from(match self.mode {
                Mode::Tiled => "matrix_b.mem",
                Mode::Skewed => "skewed_b.mem",
                Mode::Flat => "matrix_b_naive.mem",
            })
        })
    }

    /// Artifact path for the golden result.
    pub fn out_c(&self) -> PathBuf {
        self.out_c
            .clone()
            .unwrap_or_else(|| PathBuf::from("expected_c.mem"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("testvec").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = parse(&["--dim", "32"]);
        assert_eq!(cfg.dim, 32);
        assert_eq!(cfg.block, 8);
        assert_eq!(cfg.mode, Mode::Tiled);
        assert_eq!(cfg.data_width, 8);
        assert_eq!(cfg.acc_width, 32);
        assert_eq!(cfg.seed, 42);
        assert!(!cfg.quiet);
    }

    #[test]
    fn test_default_artifact_names_per_mode() {
        let tiled = parse(&["--dim", "16"]);
        assert_eq!(tiled.out_a(), PathBuf::from("matrix_a.mem"));
        assert_eq!(tiled.out_c(), PathBuf::from("expected_c.mem"));

        let skewed = parse(&["--dim", "8", "--mode", "skewed"]);
        assert_eq!(skewed.out_a(), PathBuf::from("skewed_a.mem"));
        assert_eq!(skewed.out_b(), PathBuf::from("skewed_b.mem"));

        let flat = parse(&["--dim", "8", "--mode", "flat"]);
        assert_eq!(flat.out_a(), PathBuf::from("matrix_a_naive.mem"));
        assert_eq!(flat.out_b(), PathBuf::from("matrix_b_naive.mem"));
    }

    #[test]
    fn test_path_overrides() {
        let cfg = parse(&["--dim", "8", "--out-a", "custom_a.mem"]);
        assert_eq!(cfg.out_a(), PathBuf::from("custom_a.mem"));
        assert_eq!(cfg.out_b(), PathBuf::from("matrix_b.mem"));
    }

    #[test]
    fn test_width_range_enforced() {
        let res = Config::try_parse_from(["testvec", "--dim", "8", "--data-width", "65"]);
        assert!(res.is_err());
        let res = Config::try_parse_from(["testvec", "--dim", "8", "--acc-width", "0"]);
        assert!(res.is_err());
    }
}
