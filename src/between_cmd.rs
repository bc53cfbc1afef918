//! Between command: print the period between two dates.

use anyhow::Result;
use tracing::debug;

use datespan_period::between;

use crate::cli::BetweenArgs;
use crate::convert;

/// Print the ISO-8601 period from `start` to `end`.
pub fn run(args: BetweenArgs) -> Result<()> {
    let start = convert::parse_date(&args.start, "start")?;
    let end = convert::parse_date(&args.end, "end")?;

    let period = between(start, end);
    debug!(
        %start,
        %end,
        years = period.years(),
        months = period.months(),
        days = period.days(),
        "computed period"
    );

    println!("{period}");
    Ok(())
}
