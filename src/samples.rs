//! Sample Devices
//!
//! A read-only bundle of example device hints for demos and tests. Not
//! consumed by the classification logic.

use crate::domain::{DeviceHints, FormFactor};
use serde::Serialize;
use std::sync::OnceLock;

// =============================================================================
// Sample Device
// =============================================================================

/// An example device and the hints describing it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDevice {
    /// Device identifier passed to the profile builder
    pub device_id: String,
    /// Human-readable description
    pub description: String,
    pub hints: DeviceHints,
}

// =============================================================================
// Sample Catalog
// =============================================================================

/// Catalog of built-in sample devices
pub struct SampleCatalog {
    samples: Vec<SampleDevice>,
}

impl SampleCatalog {
    /// Create a catalog with the built-in samples
    pub fn new() -> Self {
        let mut catalog = Self {
            samples: Vec::new(),
        };
        catalog.load_builtin_samples();
        catalog
    }

    /// Look up a sample by device id
    pub fn lookup(&self, device_id: &str) -> Option<&SampleDevice> {
        self.samples.iter().find(|s| s.device_id == device_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SampleDevice> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn add(&mut self, device_id: &str, description: &str, hints: DeviceHints) {
        self.samples.push(SampleDevice {
            device_id: device_id.to_string(),
            description: description.to_string(),
            hints,
        });
    }

    fn load_builtin_samples(&mut self) {
        self.add(
            "demo-phone",
            "5G smartphone",
            DeviceHints {
                has_cellular_modem: Some(true),
                has_touch_screen: Some(true),
                form_factor: Some(FormFactor::Phone),
                vendor: Some("ExampleVendor".to_string()),
                model: Some("XV-5G".to_string()),
                region_code: Some("BW".to_string()),
                supported_g_layers: g_layers(&["4G", "5G"]),
                ..Default::default()
            },
        );

        self.add(
            "legacy-feature-phone",
            "Feature phone without touch screen",
            DeviceHints {
                has_cellular_modem: Some(true),
                has_touch_screen: Some(false),
                form_factor: Some(FormFactor::Phone),
                vendor: Some("ExampleVendor".to_string()),
                model: Some("FP-100".to_string()),
                region_code: Some("BW".to_string()),
                supported_g_layers: g_layers(&["2G", "3G"]),
                ..Default::default()
            },
        );

        self.add(
            "office-laptop",
            "Wi-Fi only laptop",
            DeviceHints {
                user_agent: Some(
                    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
                        .to_string(),
                ),
                has_cellular_modem: Some(false),
                has_touch_screen: Some(false),
                form_factor: Some(FormFactor::Laptop),
                region_code: Some("EU".to_string()),
                ..Default::default()
            },
        );

        self.add(
            "lte-tablet",
            "Tablet with LTE modem",
            DeviceHints {
                has_cellular_modem: Some(true),
                has_touch_screen: Some(true),
                form_factor: Some(FormFactor::Tablet),
                region_code: Some("US".to_string()),
                supported_g_layers: g_layers(&["3G", "4G"]),
                ..Default::default()
            },
        );

        self.add(
            "field-sensor",
            "Low-power IoT sensor",
            DeviceHints {
                has_cellular_modem: Some(true),
                has_touch_screen: Some(false),
                form_factor: Some(FormFactor::Iot),
                vendor: Some("SensorWorks".to_string()),
                model: Some("SW-NB1".to_string()),
                supported_g_layers: g_layers(&["2G", "4G", "NB-IoT"]),
                ..Default::default()
            },
        );

        self.add(
            "home-cpe",
            "Fixed wireless access gateway",
            DeviceHints {
                has_cellular_modem: Some(true),
                vendor: Some("ExampleVendor".to_string()),
                model: Some("CPE-6".to_string()),
                supported_g_layers: g_layers(&["4G", "5G", "6G"]),
                ..Default::default()
            },
        );
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn g_layers(tags: &[&str]) -> Option<Vec<String>> {
    Some(tags.iter().map(|t| t.to_string()).collect())
}

static SAMPLES: OnceLock<SampleCatalog> = OnceLock::new();

/// Shared built-in sample catalog, built on first use
pub fn sample_profiles() -> &'static SampleCatalog {
    SAMPLES.get_or_init(SampleCatalog::new)
}
