//! # datespan-period
//!
//! Calendar periods (years, months, days) between two dates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["start: impl CalendarDate"] --> C["between()"]
//!     B["end: impl CalendarDate"] --> C
//!     C -->|"end < start"| D["-between(end, start)"]
//!     C --> E["Period"]
//!     E -->|".checked_add_to(start)"| B
//!     E -->|"Display"| F["P1Y2M3D / -P1Y2M3D / P0D"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use datespan_calendar::Date;
//! use datespan_period::{Period, between};
//!
//! let start = Date::constant(2000, 2, 29);
//! let end = Date::constant(2001, 2, 28);
//!
//! let period = between(start, end);
//! assert_eq!(period.to_string(), "P11M30D");
//! assert_eq!(period.checked_add_to(start).unwrap(), end);
//!
//! let parsed: Period = "-P1Y1M1D".parse().unwrap();
//! assert_eq!(parsed.years(), -1);
//! ```
//!
//! ## Invariants
//!
//! For every pair of dates, `between(start, end)`:
//!
//! - takes `start` to `end` when applied (`Period::connects`),
//! - equals `-between(end, start)`,
//! - has `months` in `0..=11` when `start <= end`.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `between` | The period calculation |
//! | `period` | `Period` value type, ISO-8601 printing and parsing |
//! | `error` | Error types |

mod between;
mod error;
mod period;

pub use between::between;
pub use error::PeriodError;
pub use period::{Period, Sign};
