//! Domain Module
//!
//! Core data model: device hints and profiles, generation tags and their
//! characteristics.

pub mod device;
pub mod glayer;

pub use device::*;
pub use glayer::*;
