use std::path::Path;

use tv_hex::{render, write_artifact, LineGrouping};
use tv_matrix::{fits_accumulator, golden_product, Matrix, MatrixGenerator};
use tv_schedule::{block_major, Edge, SystolicSchedule};

use crate::config::{Config, Mode};
use crate::error::{CliError, Result};
use crate::progress::Progress;

/// Runs one generation pass: draw operands, compute the golden product where
/// the mode calls for it, reorder, serialize, and write the artifacts.
///
/// Every failure happens before the first artifact write, or surfaces as an
/// IO error from the atomic writer; a partial run never leaves a truncated
/// file under a requested artifact name.
pub fn run(cfg: &Config, progress: &dyn Progress) -> Result<()> {
    if matches!(cfg.mode, Mode::Tiled | Mode::Skewed)
        && !fits_accumulator(cfg.dim, cfg.data_width, cfg.acc_width)
    {
        return Err(CliError::AccumulatorTooNarrow {
            dim: cfg.dim,
            data_width: cfg.data_width,
            acc_width: cfg.acc_width,
        });
    }

    progress.stage(&format!("Generating {0}x{0} matrices...", cfg.dim));
    let mut gen = MatrixGenerator::new(cfg.seed);
    let (a, b) = gen.operand_pair(cfg.dim)?;

    match cfg.mode {
        Mode::Tiled => run_tiled(cfg, &a, &b, progress),
        Mode::Skewed => run_skewed(cfg, &a, &b, progress),
        Mode::Flat => run_flat(cfg, &a, &b, progress),
    }
}

/// Block-major operand streams plus a row-major golden result, all on one
/// unterminated line each.
fn run_tiled(cfg: &Config, a: &Matrix, b: &Matrix, progress: &dyn Progress) -> Result<()> {
    progress.stage("Calculating golden result...");
    let c = golden_product(a, b, cfg.acc_width)?;

    let a_text = render(&block_major(a, cfg.block)?, cfg.data_width, LineGrouping::Flat)?;
    let b_text = render(&block_major(b, cfg.block)?, cfg.data_width, LineGrouping::Flat)?;
    let c_text = render(c.data(), cfg.acc_width, LineGrouping::Flat)?;

    save(&cfg.out_a(), &a_text, progress)?;
    save(&cfg.out_b(), &b_text, progress)?;
    save(&cfg.out_c(), &c_text, progress)
}

/// Per-cycle lane streams for the two array edges plus a single-line golden
/// result.
///
/// Port convention of the reference interconnect: the "A" artifact feeds the
/// top edge and carries operand B column-skewed; the "B" artifact feeds the
/// left edge and carries operand A row-skewed.
fn run_skewed(cfg: &Config, a: &Matrix, b: &Matrix, progress: &dyn Progress) -> Result<()> {
    progress.stage("Calculating golden result...");
    let c = golden_product(a, b, cfg.acc_width)?;

    let top = SystolicSchedule::skew(b, Edge::Top);
    let left = SystolicSchedule::skew(a, Edge::Left);

    let lanes = LineGrouping::PerRow(cfg.dim);
    let a_text = render(&top.flatten(), cfg.data_width, lanes)?;
    let b_text = render(&left.flatten(), cfg.data_width, lanes)?;
    let c_text = render(
        c.data(),
        cfg.acc_width,
        LineGrouping::PerRow(cfg.dim * cfg.dim),
    )?;

    save(&cfg.out_a(), &a_text, progress)?;
    save(&cfg.out_b(), &b_text, progress)?;
    save(&cfg.out_c(), &c_text, progress)
}

/// Row-major operand dumps with no golden artifact, for exercising a plain
/// memory interface.
fn run_flat(cfg: &Config, a: &Matrix, b: &Matrix, progress: &dyn Progress) -> Result<()> {
    let a_text = render(a.data(), cfg.data_width, LineGrouping::Flat)?;
    let b_text = render(b.data(), cfg.data_width, LineGrouping::Flat)?;

    save(&cfg.out_a(), &a_text, progress)?;
    save(&cfg.out_b(), &b_text, progress)
}

fn save(path: &Path, contents: &str, progress: &dyn Progress) -> Result<()> {
    progress.stage(&format!("Saving {}...", path.display()));
    write_artifact(path, contents)?;
    progress.stage(&format!("Successfully saved {}", path.display()));
    Ok(())
}
