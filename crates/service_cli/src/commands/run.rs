//! Run command implementation
//!
//! Fills batches of increasing volume from one generator, timing each batch,
//! then analyses every batch and renders the reports.

use std::io::Write;
use std::time::{Duration, Instant};

use randstat_core::{analyze_with, Generator, HistogramSpec, Report, Variant};
use tracing::{debug, info};

use crate::config::{OutputFormat, RunConfig};
use crate::render::{self, BatchEntry, RunSummary};
use crate::Result;

/// One generated batch and its generation time
#[derive(Debug, Clone)]
pub struct Batch {
    pub samples: Vec<i32>,
    pub elapsed: Duration,
}

impl Batch {
    /// Number of samples in the batch
    pub fn size(&self) -> usize {
        self.samples.len()
    }
}

/// Fill one batch per size from the same stream, timing each fill
pub fn generate_batches(generator: &mut Generator, sizes: &[usize]) -> Vec<Batch> {
    sizes
        .iter()
        .map(|&size| {
            let mut samples = vec![0; size];
            let start = Instant::now();
            generator.fill(&mut samples);
            let elapsed = start.elapsed();

            debug!(size, ?elapsed, "Batch generated");
            Batch { samples, elapsed }
        })
        .collect()
}

/// Analyse every batch with the given histogram layout
pub fn analyse_batches(batches: &[Batch], spec: &HistogramSpec) -> Result<Vec<Report>> {
    batches
        .iter()
        .map(|batch| analyze_with(&batch.samples, spec).map_err(Into::into))
        .collect()
}

/// Run the run command with an already selected variant
pub fn run<W: Write>(config: &RunConfig, variant: Variant, out: &mut W) -> Result<()> {
    info!("Starting generation...");
    info!("  Generator: {}", variant.label());
    info!("  Seed: {}", config.seed);
    info!("  Bounds: [{}, {})", config.min_value, config.max_value);
    info!("  Batches: {:?}", config.sizes);

    let mut generator = Generator::new(config.seed, config.min_value, config.max_value, variant)?;
    let batches = generate_batches(&mut generator, &config.sizes);

    info!("Analysing {} batches...", batches.len());
    let reports = analyse_batches(&batches, &config.histogram_spec())?;

    match config.format {
        OutputFormat::Table => {
            for batch in &batches {
                render::write_timing(out, batch.size(), batch.elapsed)?;
            }
            writeln!(out)?;
            for report in &reports {
                render::write_report(out, report)?;
            }
        }
        OutputFormat::Json => {
            let summary = RunSummary {
                variant,
                seed: config.seed,
                min_value: config.min_value,
                max_value: config.max_value,
                batches: batches
                    .iter()
                    .zip(reports.iter())
                    .map(|(batch, report)| BatchEntry {
                        size: batch.size(),
                        elapsed_ns: batch.elapsed.as_nanos(),
                        report,
                    })
                    .collect(),
            };
            render::write_json(out, &summary)?;
        }
    }

    info!("Run complete");
    Ok(())
}
