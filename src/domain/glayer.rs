//! G-Layer Types
//!
//! Wireless generation tags, their per-generation characteristics, and
//! the usage context that drives scoring.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// G-Layer Tag
// =============================================================================

/// Wireless generation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GLayer {
    #[serde(rename = "1G")]
    G1,
    #[serde(rename = "2G")]
    G2,
    #[serde(rename = "3G")]
    G3,
    #[serde(rename = "4G")]
    G4,
    #[serde(rename = "5G")]
    G5,
    #[serde(rename = "6G")]
    G6,
}

impl GLayer {
    /// All known generations, oldest first
    pub const ALL: [GLayer; 6] = [
        GLayer::G1,
        GLayer::G2,
        GLayer::G3,
        GLayer::G4,
        GLayer::G5,
        GLayer::G6,
    ];

    /// Tag string, e.g. "5G"
    pub fn as_str(&self) -> &'static str {
        match self {
            GLayer::G1 => "1G",
            GLayer::G2 => "2G",
            GLayer::G3 => "3G",
            GLayer::G4 => "4G",
            GLayer::G5 => "5G",
            GLayer::G6 => "6G",
        }
    }

    /// Position of this generation in [`GLayer::ALL`]
    pub fn index(&self) -> usize {
        match self {
            GLayer::G1 => 0,
            GLayer::G2 => 1,
            GLayer::G3 => 2,
            GLayer::G4 => 3,
            GLayer::G5 => 4,
            GLayer::G6 => 5,
        }
    }
}

impl std::fmt::Display for GLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GLayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GLayer::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| Error::UnknownGLayer { tag: s.to_string() })
    }
}

// =============================================================================
// G-Layer Profile
// =============================================================================

/// Nominal characteristics of one wireless generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GLayerProfile {
    pub g_layer: GLayer,

    pub max_throughput_mbps: f64,
    pub typical_latency_ms: f64,

    /// Rough energy cost per MB transmitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_cost_per_mb: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_mimo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_beamforming: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_network_slicing: Option<bool>,

    /// Static desirability weight (0.0 - 1.0), set only by scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitability_score: Option<f64>,
}

impl GLayerProfile {
    /// Copy of this profile carrying the given suitability score
    pub fn with_suitability(mut self, score: f64) -> Self {
        self.suitability_score = Some(score);
        self
    }
}

// =============================================================================
// Scoring Context
// =============================================================================

/// Usage context for picking a generation. All fields default to absent/false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextHints {
    /// Desired latency; candidates are penalized by their distance from it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_latency_ms: Option<f64>,

    /// Favor lower throughput as a proxy for lower power draw
    #[serde(default)]
    pub prioritize_battery: bool,

    /// Favor higher throughput
    #[serde(default)]
    pub prioritize_throughput: bool,
}

// =============================================================================
// Ranked G-Layer
// =============================================================================

/// A scored candidate and the adjusted score used to rank it.
///
/// `profile.suitability_score` stays the static weight; the context-adjusted
/// value lives only in `adjusted_score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedGLayer {
    #[serde(flatten)]
    pub profile: GLayerProfile,
    pub adjusted_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_glayer_parse() {
        assert_eq!("1G".parse::<GLayer>().unwrap(), GLayer::G1);
        assert_eq!("6G".parse::<GLayer>().unwrap(), GLayer::G6);

        assert_matches!(
            "5g".parse::<GLayer>(),
            Err(Error::UnknownGLayer { tag }) if tag == "5g"
        );
        assert_matches!("7G".parse::<GLayer>(), Err(Error::UnknownGLayer { .. }));
    }

    #[test]
    fn test_glayer_index_matches_all() {
        for (i, g) in GLayer::ALL.iter().enumerate() {
            assert_eq!(g.index(), i);
            assert_eq!(g.as_str().parse::<GLayer>().unwrap(), *g);
        }
    }

    #[test]
    fn test_glayer_serde_tag() {
        assert_eq!(serde_json::to_string(&GLayer::G4).unwrap(), "\"4G\"");
        assert_eq!(serde_json::from_str::<GLayer>("\"3G\"").unwrap(), GLayer::G3);
    }

    #[test]
    fn test_context_defaults() {
        let ctx: ContextHints = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx, ContextHints::default());

        let ctx: ContextHints =
            serde_json::from_str(r#"{"targetLatencyMs": 15, "prioritizeThroughput": true}"#)
                .unwrap();
        assert_eq!(ctx.target_latency_ms, Some(15.0));
        assert!(ctx.prioritize_throughput);
        assert!(!ctx.prioritize_battery);
    }
}
