//! Generate command: write the fixture stream for a date range.

use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use datespan_fixture::{DateRange, generate_parallel, write_fixtures};

use crate::cli::GenerateArgs;
use crate::config::DatespanConfig;
use crate::convert;

/// Run the fixture generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Resolve config: file if given, defaults otherwise
    let config = match &args.config {
        Some(path) => DatespanConfig::load(path)?,
        None => DatespanConfig::default(),
    };

    // 2. Build range and output settings, CLI flags first
    let range = convert::build_range(&config, &args)?;
    let parallel = args.parallel || config.output.parallel;
    let output = args.output.clone().or_else(|| config.output.path.clone());

    info!(
        start = %range.start(),
        end = %range.end(),
        pairs = range.pair_count(),
        parallel,
        "generating fixtures"
    );

    // 3. Write
    let lines = match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let lines = write_range(file, range, parallel)?;
            info!(path = %path.display(), lines, "fixtures written");
            lines
        }
        None => write_range(std::io::stdout().lock(), range, parallel)?,
    };
    debug_assert_eq!(lines, range.pair_count());

    Ok(())
}

fn write_range<W: Write>(writer: W, range: DateRange, parallel: bool) -> Result<u64> {
    let written = if parallel {
        write_fixtures(writer, generate_parallel(range))
    } else {
        write_fixtures(writer, range.fixtures())
    };
    written.context("failed to write fixtures")
}
