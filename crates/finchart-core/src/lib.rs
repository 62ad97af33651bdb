//! finchart-core
//!
//! Chart aggregation pipeline: calendar-period grouping, type sieving,
//! bar-series summarization, and category collapsing.
//! Depends on finchart-domain. No CLI, no terminal I/O, no storage.

pub mod category;
pub mod error;
pub mod formatter;
pub mod grouper;
pub mod pipeline;
pub mod series;
pub mod sieve;
pub mod worker;

pub use category::*;
pub use error::CoreError;
pub use formatter::*;
pub use grouper::*;
pub use pipeline::*;
pub use series::*;
pub use sieve::*;
pub use worker::*;
