// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat identity data.

use std::fmt;

/// Lowest firmware version that stores comfort, eco and window-open presets.
pub const MIN_FIRMWARE_FOR_PRESETS: u16 = 120;

/// Firmware version and serial number of a thermostat.
///
/// Read once per connect. The values only change when the device is
/// reflashed, so the supervisor keeps the last one across disconnects.
///
/// # Examples
///
/// ```
/// use eq3bt_lib::state::DeviceData;
///
/// let data = DeviceData::new(146, "OEQ1234567");
/// assert!(data.supports_presets());
/// assert_eq!(data.to_string(), "OEQ1234567 (firmware 146)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DeviceData {
    firmware_version: u16,
    serial: String,
}

impl DeviceData {
    /// Creates device data from the firmware version and serial number.
    #[must_use]
    pub fn new(firmware_version: u16, serial: impl Into<String>) -> Self {
        Self {
            firmware_version,
            serial: serial.into(),
        }
    }

    /// Returns the firmware version.
    #[must_use]
    pub fn firmware_version(&self) -> u16 {
        self.firmware_version
    }

    /// Returns the serial number.
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Returns `true` if the firmware stores presets.
    ///
    /// Preset entities should only be offered for such devices.
    #[must_use]
    pub fn supports_presets(&self) -> bool {
        self.firmware_version >= MIN_FIRMWARE_FOR_PRESETS
    }
}

impl fmt::Display for DeviceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (firmware {})", self.serial, self.firmware_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_support_follows_firmware() {
        assert!(!DeviceData::new(119, "OEQ0000001").supports_presets());
        assert!(DeviceData::new(MIN_FIRMWARE_FOR_PRESETS, "OEQ0000001").supports_presets());
        assert!(DeviceData::new(146, "OEQ0000001").supports_presets());
    }

    #[test]
    fn accessors() {
        let data = DeviceData::new(120, "OEQ7654321");
        assert_eq!(data.firmware_version(), 120);
        assert_eq!(data.serial(), "OEQ7654321");
    }

    #[test]
    fn serde_fields() {
        let json = serde_json::to_value(DeviceData::new(146, "OEQ1234567")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"firmware_version": 146, "serial": "OEQ1234567"})
        );
    }
}
