//! finchart-domain
//!
//! Pure data model for the chart pipeline (Operation, FilterSpec, DisplaySpec,
//! and the enums that parameterize grouping). No I/O, no threading.

pub mod display;
pub mod filter;
pub mod operation;

pub use display::*;
pub use filter::*;
pub use operation::*;
