//! Report rendering
//!
//! Table output prints the generation timings first, then one block per
//! batch. JSON output is a single document.

use std::io::Write;
use std::time::Duration;

use randstat_core::{Report, Variant};
use serde::Serialize;

use crate::Result;

const RULE: &str = "_______________________________________";

/// One analysed batch
#[derive(Debug, Serialize)]
pub struct BatchEntry<'a> {
    pub size: usize,
    pub elapsed_ns: u128,
    pub report: &'a Report,
}

/// JSON document for a whole run
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub variant: Variant,
    pub seed: u64,
    pub min_value: i32,
    pub max_value: i32,
    pub batches: Vec<BatchEntry<'a>>,
}

/// Write the generation time line for one batch
pub fn write_timing<W: Write>(out: &mut W, size: usize, elapsed: Duration) -> Result<()> {
    writeln!(
        out,
        "Generation time for volume of\t{}\t{} ns",
        size,
        elapsed.as_nanos()
    )?;
    Ok(())
}

/// Write one report block
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    writeln!(out, "{}\n\n", RULE)?;
    writeln!(out, "Volume of data is {}\n", report.sample_count())?;
    writeln!(out, "Mean is {}\n", report.mean())?;
    writeln!(out, "Standard deviation is {}\n", report.std_dev())?;
    match report.coefficient_of_variation() {
        Ok(cv) => writeln!(out, "Coefficient of variation is {}\n", cv)?,
        Err(_) => writeln!(out, "Coefficient of variation is undefined (zero mean)\n")?,
    }

    writeln!(out, "Array n looks like:\n")?;
    for (range, count) in report.histogram().buckets() {
        writeln!(out, "[{}...{})\t:\t{}", range.start, range.end, count)?;
    }

    writeln!(out, "\nTotal of array n is {}", report.histogram().total())?;
    writeln!(out, "\nValue of criterion is {}", report.criterion())?;
    writeln!(out, "\n\n{}\n", RULE)?;
    Ok(())
}

/// Write the whole run as pretty-printed JSON
pub fn write_json<W: Write>(out: &mut W, summary: &RunSummary<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}
