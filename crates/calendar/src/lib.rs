//! # datespan-calendar
//!
//! Proleptic Gregorian date primitive for period arithmetic, built on
//! `chrono::NaiveDate` and limited to years `-9999..=9999`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Date::new()"| B["Date"]
//!     B -->|".to_epoch_day()"| C["i64 epoch day"]
//!     C -->|"Date::from_epoch_day()"| B
//!     B -->|".checked_add_months()"| B
//!     B -->|".tomorrow()"| B
//!     B -->|"date_sequence()"| D["Vec of Date"]
//!     B -.->|"impl"| E["CalendarDate trait"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use datespan_calendar::{Date, date_sequence};
//!
//! let jan31: Date = "2000-01-31".parse().unwrap();
//!
//! // Month arithmetic clamps to the end of the target month.
//! assert_eq!(jan31.checked_add_months(1).unwrap(), Date::constant(2000, 2, 29));
//!
//! // Day differences are signed.
//! assert_eq!(jan31.days_until(Date::constant(2000, 3, 1)), 30);
//!
//! let dates = date_sequence(jan31, 31);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Year limits, leap-year rules, month lengths |
//! | `date` | The `Date` value type (wraps `chrono::NaiveDate`) |
//! | `traits` | `CalendarDate`, the interface period calculations use |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod gregorian;
mod sequence;
mod traits;

pub use date::Date;
pub use error::CalendarError;
pub use gregorian::{MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year};
pub use sequence::date_sequence;
pub use traits::CalendarDate;
