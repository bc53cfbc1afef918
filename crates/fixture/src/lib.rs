//! # datespan-fixture
//!
//! Exhaustive golden files for calendar period calculation.
//!
//! Every ordered pair of dates in a range is run through
//! [`datespan_period::between`] and written as one line, so another
//! implementation of the same calculation can be checked against it line by
//! line.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateRange [start, end)"] -->|".fixtures()"| B["Fixtures iterator"]
//!     A -->|"generate_parallel()"| C["Vec of FixtureRecord"]
//!     B --> D["write_fixtures()"]
//!     C --> D
//!     D --> E["start end period lines"]
//!     E -->|"verify_fixtures()"| F["VerifyReport"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use datespan_fixture::{DateRange, write_fixtures};
//!
//! let range = DateRange::default(); // [1999-01-01, 2002-01-01)
//! let stdout = std::io::stdout().lock();
//! let lines = write_fixtures(stdout, range.fixtures())?;
//! assert_eq!(lines, range.pair_count());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `range` | Half-open `DateRange` and its date iterator |
//! | `record` | `FixtureRecord` and the line format |
//! | `generate` | Lazy sequential pair enumeration |
//! | `parallel` | Rayon-backed generation in canonical order |
//! | `writer` | Buffered line output |
//! | `verify` | Replay a fixture stream through the calculator |
//! | `error` | Error types |

mod error;
mod generate;
mod parallel;
mod range;
mod record;
mod verify;
mod writer;

pub use error::FixtureError;
pub use generate::Fixtures;
pub use parallel::generate_parallel;
pub use range::{DEFAULT_END, DEFAULT_START, DateRange, Dates};
pub use record::FixtureRecord;
pub use verify::{Mismatch, VerifyReport, verify_fixtures};
pub use writer::write_fixtures;
