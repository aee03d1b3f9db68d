//! Classification Module
//!
//! Classifies devices from hints and builds their profiles.

pub mod classifier;
pub mod profile;

pub use classifier::*;
pub use profile::*;
