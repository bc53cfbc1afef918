//! Verify command: replay a fixture file through the period calculator.

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use datespan_fixture::verify_fixtures;

use crate::cli::VerifyArgs;

/// Run fixture verification, failing if any line disagrees.
pub fn run(args: VerifyArgs) -> Result<()> {
    let _cmd = info_span!("verify").entered();

    info!(path = %args.input.display(), "reading fixtures");
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open fixture file: {}", args.input.display()))?;
    let report = verify_fixtures(BufReader::new(file))
        .with_context(|| format!("failed to verify fixtures: {}", args.input.display()))?;

    for mismatch in report.mismatches().iter().take(args.show) {
        println!(
            "line {}: {} {} recorded {} computed {}",
            mismatch.line, mismatch.start, mismatch.end, mismatch.recorded, mismatch.computed
        );
    }
    if report.mismatches().len() > args.show {
        println!("... {} more", report.mismatches().len() - args.show);
    }

    if let Some(line) = report.first_out_of_order() {
        bail!("fixture lines are not in canonical order (first at line {line})");
    }
    if !report.mismatches().is_empty() {
        bail!(
            "{} of {} fixture lines disagree with the period calculator",
            report.mismatches().len(),
            report.checked()
        );
    }

    println!("{} fixture lines verified", report.checked());
    Ok(())
}
