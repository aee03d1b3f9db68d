//! Scoring Module
//!
//! Static per-generation reference data and the scorer that ranks a
//! device's supported generations against it.

pub mod scorer;
pub mod table;

pub use scorer::*;
pub use table::*;
