//! Device Classifier
//!
//! Maps raw device hints to a coarse device type.

use crate::domain::{DeviceHints, DeviceType, FormFactor};
use tracing::debug;

/// Classify a device from its hints.
///
/// Rules are evaluated in order and the first match wins:
/// 1. phone form factor, or cellular modem together with a touch screen
/// 2. laptop or desktop form factor
/// 3. iot form factor
/// 4. anything else
pub fn classify_device_type(hints: &DeviceHints) -> DeviceType {
    let device_type = if is_phone(hints) {
        DeviceType::Phone
    } else {
        match hints.form_factor {
            Some(FormFactor::Laptop | FormFactor::Desktop) => DeviceType::Computer,
            Some(FormFactor::Iot) => DeviceType::Iot,
            Some(FormFactor::Phone | FormFactor::Tablet) | None => DeviceType::Other,
        }
    };

    debug!(
        form_factor = ?hints.form_factor,
        cellular = ?hints.has_cellular_modem,
        touch = ?hints.has_touch_screen,
        %device_type,
        "classified device"
    );

    device_type
}

/// The phone rule takes precedence over every form factor
fn is_phone(hints: &DeviceHints) -> bool {
    hints.form_factor == Some(FormFactor::Phone)
        || (hints.has_cellular_modem() && hints.has_touch_screen())
}
