//! # Tabstat - Descriptive Statistics as Terminal Tables
//!
//! Loads lists of integers, computes ordinary descriptive statistics and
//! renders them with [`tabstat_render`].
//!
//! ```rust
//! use tabstat::report::{Report, ReportLayout};
//! use tabstat::stats::Summary;
//! use tabstat_render::RenderConfig;
//!
//! let summary = Summary::from_values(&[3, 1, 4, 1, 5]).unwrap();
//! let mut report = Report::new(&summary, &RenderConfig::default(), ReportLayout::default());
//! let text = report.render();
//! assert!(text.contains("Descriptive Statistics"));
//! ```

pub mod cli;
mod error;
pub mod input;
pub mod report;
pub mod stats;

pub use error::{LoadError, StatsError};
pub use report::{Report, ReportLayout};
pub use stats::{Quartiles, Summary};
