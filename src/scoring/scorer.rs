//! Generation Scorer
//!
//! Ranks the generations a device supports under a usage context and
//! picks the best one.

use super::table::{base_profile, suitability_weight};
use crate::domain::{ContextHints, DeviceProfile, GLayer, GLayerProfile, RankedGLayer};
use tracing::{debug, trace};

// =============================================================================
// Scorer Configuration
// =============================================================================

/// Divisors applied to the context adjustments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// |latency - target| is divided by this before being subtracted
    pub latency_penalty_divisor: f64,

    /// Throughput is divided by this for the throughput bonus and the battery penalty
    pub throughput_divisor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            latency_penalty_divisor: 1000.0,
            throughput_divisor: 10_000.0,
        }
    }
}

// =============================================================================
// G-Layer Scorer
// =============================================================================

/// Scores and ranks generation candidates for a device profile
#[derive(Debug, Clone, Default)]
pub struct GLayerScorer {
    config: ScoringConfig,
}

impl GLayerScorer {
    /// Create a scorer with the default divisors
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// Create a scorer with custom divisors
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Candidate profiles for every recognized tag, in profile order.
    ///
    /// Unknown tags are dropped. Each entry is a copy of the base profile
    /// carrying the static suitability weight.
    pub fn estimate(&self, profile: &DeviceProfile) -> Vec<GLayerProfile> {
        profile
            .supported_g_layers()
            .iter()
            .filter_map(|tag| match tag.parse::<GLayer>() {
                Ok(g_layer) => Some(g_layer),
                Err(_) => {
                    debug!(device_id = profile.device_id(), %tag, "dropping unknown G-layer tag");
                    None
                }
            })
            .map(|g_layer| base_profile(g_layer).with_suitability(suitability_weight(g_layer)))
            .collect()
    }

    /// Context-adjusted score of a single candidate.
    ///
    /// Battery and throughput adjustments are additive and cancel when both are set.
    pub fn adjusted_score(&self, candidate: &GLayerProfile, context: &ContextHints) -> f64 {
        let mut score = candidate.suitability_score.unwrap_or(0.0);

        if let Some(target) = context.target_latency_ms {
            score -= (candidate.typical_latency_ms - target).abs() / self.config.latency_penalty_divisor;
        }

        if context.prioritize_throughput {
            score += candidate.max_throughput_mbps / self.config.throughput_divisor;
        }

        if context.prioritize_battery {
            score -= candidate.max_throughput_mbps / self.config.throughput_divisor;
        }

        score
    }

    /// All candidates, best first. Equal scores keep their profile order.
    pub fn rank(&self, profile: &DeviceProfile, context: Option<&ContextHints>) -> Vec<RankedGLayer> {
        let context = context.copied().unwrap_or_default();

        let mut ranked: Vec<RankedGLayer> = self
            .estimate(profile)
            .into_iter()
            .map(|candidate| {
                let adjusted_score = self.adjusted_score(&candidate, &context);
                trace!(g_layer = %candidate.g_layer, adjusted_score, "scored candidate");
                RankedGLayer {
                    profile: candidate,
                    adjusted_score,
                }
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.adjusted_score.total_cmp(&a.adjusted_score));
        ranked
    }

    /// Best candidate, or `None` when the profile has no recognized tag.
    ///
    /// The result carries the static suitability weight, not the adjusted score.
    pub fn pick_best(&self, profile: &DeviceProfile, context: Option<&ContextHints>) -> Option<GLayerProfile> {
        let best = self
            .rank(profile, context)
            .into_iter()
            .next()
            .map(|ranked| ranked.profile);

        match &best {
            Some(g) => debug!(device_id = profile.device_id(), g_layer = %g.g_layer, "picked best G-layer"),
            None => debug!(device_id = profile.device_id(), "no recognized G-layer"),
        }

        best
    }
}

// =============================================================================
// Default-config entry points
// =============================================================================

/// Candidate profiles for the recognized tags of `profile`
pub fn estimate_g_layer_profiles(profile: &DeviceProfile) -> Vec<GLayerProfile> {
    GLayerScorer::new().estimate(profile)
}

/// Ranked candidates for `profile` under `context`
pub fn rank_g_layers(profile: &DeviceProfile, context: Option<&ContextHints>) -> Vec<RankedGLayer> {
    GLayerScorer::new().rank(profile, context)
}

/// Best generation for `profile` under `context`
pub fn pick_best_g_layer(profile: &DeviceProfile, context: Option<&ContextHints>) -> Option<GLayerProfile> {
    GLayerScorer::new().pick_best(profile, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_device_profile;
    use crate::domain::{DeviceHints, FormFactor};

    const EPS: f64 = 1e-9;

    fn profile_with(tags: &[&str]) -> DeviceProfile {
        let hints = DeviceHints {
            has_cellular_modem: Some(true),
            has_touch_screen: Some(true),
            form_factor: Some(FormFactor::Phone),
            supported_g_layers: Some(tags.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        };
        build_device_profile("test-phone", &hints)
    }

    fn g_layers(list: &[GLayerProfile]) -> Vec<GLayer> {
        list.iter().map(|p| p.g_layer).collect()
    }

    #[test]
    fn test_estimate_preserves_order() {
        let estimates = estimate_g_layer_profiles(&profile_with(&["4G", "5G"]));

        assert_eq!(g_layers(&estimates), vec![GLayer::G4, GLayer::G5]);
        assert_eq!(estimates[0].suitability_score, Some(0.85));
        assert_eq!(estimates[1].suitability_score, Some(0.95));
        assert_eq!(estimates[1].max_throughput_mbps, 1000.0);
    }

    #[test]
    fn test_estimate_drops_unknown_tags() {
        let estimates =
            estimate_g_layer_profiles(&profile_with(&["LTE", "3G", "7G", "5g", "1G", "3G"]));

        assert_eq!(g_layers(&estimates), vec![GLayer::G3, GLayer::G1, GLayer::G3]);
        assert!(estimates.iter().all(|p| GLayer::ALL.contains(&p.g_layer)));
    }

    #[test]
    fn test_estimate_empty() {
        assert!(estimate_g_layer_profiles(&profile_with(&[])).is_empty());
        assert!(estimate_g_layer_profiles(&profile_with(&["NR", "LTE"])).is_empty());
    }

    #[test]
    fn test_pick_best_none_without_known_tags() {
        assert_eq!(pick_best_g_layer(&profile_with(&[]), None), None);
        assert_eq!(
            pick_best_g_layer(&profile_with(&["NR"]), Some(&ContextHints::default())),
            None
        );
    }

    #[test]
    fn test_low_latency_throughput_scenario() {
        let profile = profile_with(&["4G", "5G"]);
        let ctx = ContextHints {
            target_latency_ms: Some(15.0),
            prioritize_throughput: true,
            ..Default::default()
        };

        let ranked = rank_g_layers(&profile, Some(&ctx));
        assert_eq!(ranked[0].profile.g_layer, GLayer::G5);
        assert!((ranked[0].adjusted_score - 1.045).abs() < EPS);
        assert_eq!(ranked[1].profile.g_layer, GLayer::G4);
        assert!((ranked[1].adjusted_score - 0.815).abs() < EPS);

        let best = pick_best_g_layer(&profile, Some(&ctx)).unwrap();
        assert_eq!(best.g_layer, GLayer::G5);
        // Static weight, not the adjusted score
        assert_eq!(best.suitability_score, Some(0.95));
    }

    #[test]
    fn test_battery_scenario() {
        let profile = profile_with(&["4G", "5G"]);
        let ctx = ContextHints {
            prioritize_battery: true,
            ..Default::default()
        };

        let ranked = rank_g_layers(&profile, Some(&ctx));
        assert_eq!(ranked[0].profile.g_layer, GLayer::G5);
        assert!((ranked[0].adjusted_score - 0.85).abs() < EPS);
        assert!((ranked[1].adjusted_score - 0.84).abs() < EPS);

        let best = pick_best_g_layer(&profile, Some(&ctx)).unwrap();
        assert_eq!(best.g_layer, GLayer::G5);
    }

    #[test]
    fn test_battery_and_throughput_cancel() {
        let profile = profile_with(&["4G", "5G", "6G"]);
        let ctx = ContextHints {
            prioritize_battery: true,
            prioritize_throughput: true,
            ..Default::default()
        };

        let ranked = rank_g_layers(&profile, Some(&ctx));
        for r in &ranked {
            assert!((r.adjusted_score - r.profile.suitability_score.unwrap()).abs() < EPS);
        }
        assert_eq!(ranked[0].profile.g_layer, GLayer::G5);
    }

    #[test]
    fn test_no_context_uses_static_weight() {
        let profile = profile_with(&["3G", "6G", "4G"]);

        let best = pick_best_g_layer(&profile, None).unwrap();
        assert_eq!(best.g_layer, GLayer::G4);
        assert_eq!(
            pick_best_g_layer(&profile, Some(&ContextHints::default())),
            Some(best)
        );
    }

    #[test]
    fn test_throughput_flips_to_6g() {
        // 6G: 0.4 + 10000 / 10000 = 1.4 beats 5G: 0.95 + 0.1
        let profile = profile_with(&["5G", "6G"]);
        let ctx = ContextHints {
            prioritize_throughput: true,
            ..Default::default()
        };

        let best = pick_best_g_layer(&profile, Some(&ctx)).unwrap();
        assert_eq!(best.g_layer, GLayer::G6);
        assert_eq!(best.suitability_score, Some(0.4));
    }

    #[test]
    fn test_latency_penalty() {
        // 2G: 0.4 - |300 - 500| / 1000 = 0.2, 1G: 0.4 - 0 = 0.4
        let profile = profile_with(&["2G", "1G"]);
        let ctx = ContextHints {
            target_latency_ms: Some(500.0),
            ..Default::default()
        };

        let ranked = rank_g_layers(&profile, Some(&ctx));
        assert_eq!(ranked[0].profile.g_layer, GLayer::G1);
        assert!((ranked[1].adjusted_score - 0.2).abs() < EPS);
    }

    #[test]
    fn test_ties_keep_profile_order() {
        let best = pick_best_g_layer(&profile_with(&["2G", "1G"]), None).unwrap();
        assert_eq!(best.g_layer, GLayer::G2);

        let best = pick_best_g_layer(&profile_with(&["1G", "2G"]), None).unwrap();
        assert_eq!(best.g_layer, GLayer::G1);

        let ranked = rank_g_layers(&profile_with(&["6G", "1G", "2G"]), None);
        assert_eq!(
            ranked.iter().map(|r| r.profile.g_layer).collect::<Vec<_>>(),
            vec![GLayer::G6, GLayer::G1, GLayer::G2]
        );
    }

    #[test]
    fn test_missing_suitability_scores_zero() {
        let scorer = GLayerScorer::new();
        let bare = *base_profile(GLayer::G5);
        assert_eq!(scorer.adjusted_score(&bare, &ContextHints::default()), 0.0);
    }

    #[test]
    fn test_custom_config() {
        let scorer = GLayerScorer::with_config(ScoringConfig {
            latency_penalty_divisor: 100.0,
            throughput_divisor: 10_000.0,
        });
        let ctx = ContextHints {
            target_latency_ms: Some(60.0),
            ..Default::default()
        };

        // 5G: 0.95 - 50 / 100 = 0.45, 4G: 0.85 - 0
        let best = scorer.pick_best(&profile_with(&["4G", "5G"]), Some(&ctx)).unwrap();
        assert_eq!(best.g_layer, GLayer::G4);
        assert_eq!(scorer.config().latency_penalty_divisor, 100.0);
    }

    #[test]
    fn test_deserialized_profile_scores() {
        let profile: DeviceProfile = serde_json::from_str(
            r#"{"deviceId": "imported", "deviceType": "router", "supportedGLayers": ["4G", "6G", "LTE"]}"#,
        )
        .unwrap();

        let best = pick_best_g_layer(&profile, None).unwrap();
        assert_eq!(best.g_layer, GLayer::G4);

        let round_trip: DeviceProfile =
            serde_json::from_value(serde_json::to_value(&profile_with(&["5G"])).unwrap()).unwrap();
        assert_eq!(round_trip, profile_with(&["5G"]));
    }

    #[test]
    fn test_scoring_does_not_touch_table() {
        let profile = profile_with(&["5G"]);
        let _ = pick_best_g_layer(&profile, None);
        assert!(base_profile(GLayer::G5).suitability_score.is_none());
    }
}
