//! Device Types
//!
//! Caller-supplied device hints and the device profile derived from them.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Form Factor
// =============================================================================

/// Physical form factor reported by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Phone,
    Laptop,
    Desktop,
    Tablet,
    Iot,
}

impl FormFactor {
    /// Wire name of this form factor
    pub fn as_str(&self) -> &'static str {
        match self {
            FormFactor::Phone => "phone",
            FormFactor::Laptop => "laptop",
            FormFactor::Desktop => "desktop",
            FormFactor::Tablet => "tablet",
            FormFactor::Iot => "iot",
        }
    }
}

impl std::fmt::Display for FormFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormFactor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "phone" => Ok(FormFactor::Phone),
            "laptop" => Ok(FormFactor::Laptop),
            "desktop" => Ok(FormFactor::Desktop),
            "tablet" => Ok(FormFactor::Tablet),
            "iot" => Ok(FormFactor::Iot),
            other => Err(Error::UnknownFormFactor {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Device Hints
// =============================================================================

/// Raw, caller-supplied description of a device.
///
/// Every field is optional. An absent field means "unknown", never "false".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceHints {
    /// Identifying user agent string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Device has a cellular modem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_cellular_modem: Option<bool>,

    /// Device has a touch screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_touch_screen: Option<bool>,

    /// Physical form factor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<FormFactor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Region or regulatory code, e.g. "BW", "US", "EU"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,

    /// Generation tags the device claims to support, e.g. ["4G", "5G"].
    /// Unknown tags are accepted here and dropped during scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_g_layers: Option<Vec<String>>,
}

impl DeviceHints {
    /// Whether the caller confirmed a cellular modem
    pub fn has_cellular_modem(&self) -> bool {
        self.has_cellular_modem.unwrap_or(false)
    }

    /// Whether the caller confirmed a touch screen
    pub fn has_touch_screen(&self) -> bool {
        self.has_touch_screen.unwrap_or(false)
    }

    /// Layer `other` on top of these hints.
    ///
    /// Every field present in `other` replaces the value here; absent fields
    /// keep the current value. An empty generation list counts as absent.
    pub fn overlay(self, other: DeviceHints) -> DeviceHints {
        let supported_g_layers = match other.supported_g_layers {
            Some(tags) if !tags.is_empty() => Some(tags),
            _ => self.supported_g_layers,
        };

        DeviceHints {
            user_agent: other.user_agent.or(self.user_agent),
            has_cellular_modem: other.has_cellular_modem.or(self.has_cellular_modem),
            has_touch_screen: other.has_touch_screen.or(self.has_touch_screen),
            form_factor: other.form_factor.or(self.form_factor),
            vendor: other.vendor.or(self.vendor),
            model: other.model.or(self.model),
            region_code: other.region_code.or(self.region_code),
            supported_g_layers,
        }
    }
}

// =============================================================================
// Device Type
// =============================================================================

/// Coarse device category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Phone,
    Computer,
    Iot,
    Router,
    Other,
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceType::Phone => write!(f, "phone"),
            DeviceType::Computer => write!(f, "computer"),
            DeviceType::Iot => write!(f, "iot"),
            DeviceType::Router => write!(f, "router"),
            DeviceType::Other => write!(f, "other"),
        }
    }
}

// =============================================================================
// Network Interfaces
// =============================================================================

/// Network interface kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    Cellular,
    Wifi,
    Ethernet,
    Bluetooth,
    Other,
}

impl std::fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterfaceType::Cellular => write!(f, "cellular"),
            InterfaceType::Wifi => write!(f, "wifi"),
            InterfaceType::Ethernet => write!(f, "ethernet"),
            InterfaceType::Bluetooth => write!(f, "bluetooth"),
            InterfaceType::Other => write!(f, "other"),
        }
    }
}

/// A network interface descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterface {
    #[serde(rename = "type")]
    pub interface_type: InterfaceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NetworkInterface {
    pub fn new(interface_type: InterfaceType) -> Self {
        Self {
            interface_type,
            description: None,
        }
    }
}

// =============================================================================
// Capability Flags
// =============================================================================

/// Radio capability flags derived from supported generation tags.
///
/// Only constructible through [`CapabilityFlags::from_g_layers`], so the
/// flags always agree with the tag set they were computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityFlags {
    supports_mimo: bool,
    supports_beamforming: bool,
    supports_network_slicing: bool,
}

impl CapabilityFlags {
    /// MIMO iff "4G" or "5G" is present; beamforming and slicing iff "5G" is.
    pub fn from_g_layers<S: AsRef<str>>(g_layers: &[S]) -> Self {
        let has = |tag: &str| g_layers.iter().any(|g| g.as_ref() == tag);
        let has_5g = has("5G");

        Self {
            supports_mimo: has("4G") || has_5g,
            supports_beamforming: has_5g,
            supports_network_slicing: has_5g,
        }
    }

    pub fn supports_mimo(&self) -> bool {
        self.supports_mimo
    }

    pub fn supports_beamforming(&self) -> bool {
        self.supports_beamforming
    }

    pub fn supports_network_slicing(&self) -> bool {
        self.supports_network_slicing
    }
}

// =============================================================================
// Device Profile
// =============================================================================

/// Structured profile of a classified device.
///
/// Built once by [`crate::build_device_profile`] and read-only afterwards.
/// Deserialized profiles recompute their capability flags from
/// `supportedGLayers`; any flag values in the input are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DeviceProfileRecord")]
pub struct DeviceProfile {
    pub(crate) device_id: String,
    pub(crate) device_type: DeviceType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) os_version: Option<String>,

    pub(crate) supported_g_layers: Vec<String>,
    pub(crate) network_interfaces: Vec<NetworkInterface>,

    #[serde(flatten)]
    pub(crate) capabilities: CapabilityFlags,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) region_code: Option<String>,
}

/// Wire shape of a profile, without the derived flags
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeviceProfileRecord {
    device_id: String,
    device_type: DeviceType,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    os: Option<String>,
    #[serde(default)]
    os_version: Option<String>,
    #[serde(default)]
    supported_g_layers: Vec<String>,
    #[serde(default)]
    network_interfaces: Vec<NetworkInterface>,
    #[serde(default)]
    region_code: Option<String>,
}

impl From<DeviceProfileRecord> for DeviceProfile {
    fn from(record: DeviceProfileRecord) -> Self {
        let capabilities = CapabilityFlags::from_g_layers(&record.supported_g_layers);

        Self {
            device_id: record.device_id,
            device_type: record.device_type,
            vendor: record.vendor,
            model: record.model,
            os: record.os,
            os_version: record.os_version,
            supported_g_layers: record.supported_g_layers,
            network_interfaces: record.network_interfaces,
            capabilities,
            region_code: record.region_code,
        }
    }
}

impl DeviceProfile {
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Operating system string (sourced from the user agent)
    pub fn os(&self) -> Option<&str> {
        self.os.as_deref()
    }

    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    /// Supported generation tags in caller order, duplicates and unknown tags included
    pub fn supported_g_layers(&self) -> &[String] {
        &self.supported_g_layers
    }

    pub fn network_interfaces(&self) -> &[NetworkInterface] {
        &self.network_interfaces
    }

    /// Check if the profile has an interface of the given kind
    pub fn has_interface(&self, interface_type: InterfaceType) -> bool {
        self.network_interfaces
            .iter()
            .any(|i| i.interface_type == interface_type)
    }

    pub fn capabilities(&self) -> CapabilityFlags {
        self.capabilities
    }

    pub fn supports_mimo(&self) -> bool {
        self.capabilities.supports_mimo()
    }

    pub fn supports_beamforming(&self) -> bool {
        self.capabilities.supports_beamforming()
    }

    pub fn supports_network_slicing(&self) -> bool {
        self.capabilities.supports_network_slicing()
    }

    pub fn region_code(&self) -> Option<&str> {
        self.region_code.as_deref()
    }
}
