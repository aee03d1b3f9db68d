//! Static Generation Table
//!
//! Nominal throughput, latency, and capability data for every known
//! generation, plus the fixed suitability weight used as the scoring
//! baseline. Process-wide constant data; nothing here is derived from a
//! device.

use crate::domain::{GLayer, GLayerProfile};

// =============================================================================
// Suitability Weights
// =============================================================================

/// Baseline weight for 5G
pub const WEIGHT_5G: f64 = 0.95;

/// Baseline weight for 4G
pub const WEIGHT_4G: f64 = 0.85;

/// Baseline weight for 3G
pub const WEIGHT_3G: f64 = 0.6;

/// Baseline weight for every other generation
pub const WEIGHT_DEFAULT: f64 = 0.4;

/// Fixed suitability weight of a generation, independent of any device
pub fn suitability_weight(g_layer: GLayer) -> f64 {
    match g_layer {
        GLayer::G5 => WEIGHT_5G,
        GLayer::G4 => WEIGHT_4G,
        GLayer::G3 => WEIGHT_3G,
        GLayer::G1 | GLayer::G2 | GLayer::G6 => WEIGHT_DEFAULT,
    }
}

// =============================================================================
// Base Profiles
// =============================================================================

const fn base(g_layer: GLayer, max_throughput_mbps: f64, typical_latency_ms: f64) -> GLayerProfile {
    GLayerProfile {
        g_layer,
        max_throughput_mbps,
        typical_latency_ms,
        energy_cost_per_mb: None,
        supports_mimo: None,
        supports_beamforming: None,
        supports_network_slicing: None,
        suitability_score: None,
    }
}

/// Base profiles indexed by [`GLayer::index`]. No entry carries a suitability score.
pub static G_LAYER_TABLE: [GLayerProfile; 6] = [
    base(GLayer::G1, 0.01, 500.0),
    base(GLayer::G2, 0.1, 300.0),
    base(GLayer::G3, 2.0, 150.0),
    GLayerProfile {
        supports_mimo: Some(true),
        ..base(GLayer::G4, 100.0, 60.0)
    },
    GLayerProfile {
        supports_beamforming: Some(true),
        supports_network_slicing: Some(true),
        ..base(GLayer::G5, 1000.0, 10.0)
    },
    GLayerProfile {
        supports_beamforming: Some(true),
        supports_network_slicing: Some(true),
        ..base(GLayer::G6, 10000.0, 1.0)
    },
];

/// Look up the base profile of a generation
pub fn base_profile(g_layer: GLayer) -> &'static GLayerProfile {
    &G_LAYER_TABLE[g_layer.index()]
}
