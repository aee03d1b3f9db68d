//! G-Layer Classifier
//!
//! Heuristic device classification and wireless-generation ("G-layer")
//! scoring. Given a handful of device hints, it derives a coarse device
//! type, a structured device profile, and the generation that best fits a
//! latency/throughput/battery trade-off. No live measurement is involved.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ DeviceHints  │───►│  Classifier  │───►│ Profile Builder  │
//! └──────────────┘    └──────────────┘    └────────┬─────────┘
//!                                                  │ DeviceProfile
//!                     ┌──────────────┐    ┌────────▼─────────┐
//!                     │ G-Layer Table│───►│ Generation Scorer│──► best GLayerProfile
//!                     │  (static)    │    │  (ContextHints)  │
//!                     └──────────────┘    └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Hints, profiles, generation tags
//! - [`classification`]: Device classifier and profile builder
//! - [`scoring`]: Static generation table and scorer
//! - [`samples`]: Built-in example devices
//! - [`loader`]: Hints file loading
//! - [`error`]: Error types and handling
//!
//! # Example
//!
//! ```
//! use glayer_classifier::{build_device_profile, pick_best_g_layer, ContextHints, DeviceHints, FormFactor, GLayer};
//!
//! let hints = DeviceHints {
//!     form_factor: Some(FormFactor::Phone),
//!     supported_g_layers: Some(vec!["4G".into(), "5G".into()]),
//!     ..Default::default()
//! };
//! let profile = build_device_profile("demo-phone", &hints);
//!
//! let context = ContextHints { target_latency_ms: Some(15.0), prioritize_throughput: true, ..Default::default() };
//! let best = pick_best_g_layer(&profile, Some(&context)).unwrap();
//! assert_eq!(best.g_layer, GLayer::G5);
//! ```

pub mod classification;
pub mod domain;
pub mod error;
pub mod loader;
pub mod samples;
pub mod scoring;

// Re-export commonly used types
pub use classification::{build_device_profile, classify_device_type};

pub use domain::{
    CapabilityFlags, ContextHints, DeviceHints, DeviceProfile, DeviceType, FormFactor, GLayer,
    GLayerProfile, InterfaceType, NetworkInterface, RankedGLayer,
};

pub use error::{Error, Result};

pub use loader::{load_hints, parse_hints_json, parse_hints_yaml};

pub use samples::{sample_profiles, SampleCatalog, SampleDevice};

pub use scoring::{
    base_profile, estimate_g_layer_profiles, pick_best_g_layer, rank_g_layers,
    suitability_weight, GLayerScorer, ScoringConfig, G_LAYER_TABLE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
