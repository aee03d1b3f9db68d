//! Profile Builder
//!
//! Assembles a complete device profile from hints: device type, supported
//! generations, network interfaces, and derived radio capabilities.

use super::classifier::classify_device_type;
use crate::domain::{
    CapabilityFlags, DeviceHints, DeviceProfile, InterfaceType, NetworkInterface,
};
use tracing::debug;

/// Build the profile for `device_id` from its hints.
///
/// Generation tags are copied as-is, including duplicates and tags outside
/// 1G..6G; the scorer filters them later.
pub fn build_device_profile(device_id: impl Into<String>, hints: &DeviceHints) -> DeviceProfile {
    let device_id = device_id.into();
    let device_type = classify_device_type(hints);

    let supported_g_layers = hints.supported_g_layers.clone().unwrap_or_default();
    let network_interfaces = infer_network_interfaces(hints);
    let capabilities = CapabilityFlags::from_g_layers(&supported_g_layers);

    debug!(
        %device_id,
        %device_type,
        g_layers = supported_g_layers.len(),
        mimo = capabilities.supports_mimo(),
        "built device profile"
    );

    DeviceProfile {
        device_id,
        device_type,
        vendor: hints.vendor.clone(),
        model: hints.model.clone(),
        os: hints.user_agent.clone(),
        os_version: None,
        supported_g_layers,
        network_interfaces,
        capabilities,
        region_code: hints.region_code.clone(),
    }
}

/// Cellular only when the modem is confirmed; wifi is always assumed
fn infer_network_interfaces(hints: &DeviceHints) -> Vec<NetworkInterface> {
    let mut interfaces = Vec::with_capacity(2);

    if hints.has_cellular_modem() {
        interfaces.push(NetworkInterface::new(InterfaceType::Cellular));
    }
    interfaces.push(NetworkInterface::new(InterfaceType::Wifi));

    interfaces
}
