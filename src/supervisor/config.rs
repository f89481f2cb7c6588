// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration types for the connection supervisor.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ValueError};
use crate::types::MacAddress;

/// Interval between two status fetches while connected.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Interval between two connect attempts while disconnected.
pub const DEFAULT_RECONNECT_INTERVAL: Duration = DEFAULT_POLL_INTERVAL;

/// Configuration for one supervised thermostat.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use eq3bt_lib::supervisor::SupervisorConfig;
///
/// let address = "00:1A:22:0C:4F:3B".parse().unwrap();
/// let config = SupervisorConfig::new(address)
///     .with_poll_interval(Duration::from_secs(30));
///
/// assert_eq!(config.poll_interval, Duration::from_secs(30));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SupervisorConfig {
    /// Hardware address of the thermostat.
    pub address: MacAddress,
    /// Time to wait after each status fetch.
    pub poll_interval: Duration,
    /// Time to wait after a failed connect attempt.
    pub reconnect_interval: Duration,
    /// Options consumed by the entity adapters.
    pub options: DeviceOptions,
}

impl SupervisorConfig {
    /// Creates a configuration with default intervals and options.
    #[must_use]
    pub fn new(address: MacAddress) -> Self {
        Self {
            address,
            poll_interval: DEFAULT_POLL_INTERVAL,
            reconnect_interval: DEFAULT_RECONNECT_INTERVAL,
            options: DeviceOptions::default(),
        }
    }

    /// Sets the poll interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the reconnect interval.
    #[must_use]
    pub fn with_reconnect_interval(mut self, interval: Duration) -> Self {
        self.reconnect_interval = interval;
        self
    }

    /// Sets the device options.
    #[must_use]
    pub fn with_options(mut self, options: DeviceOptions) -> Self {
        self.options = options;
        self
    }

    /// Checks that both intervals are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ZeroInterval`] naming the offending interval.
    pub fn validate(&self) -> Result<(), ValueError> {
        if self.poll_interval.is_zero() {
            return Err(ValueError::ZeroInterval("poll_interval"));
        }
        if self.reconnect_interval.is_zero() {
            return Err(ValueError::ZeroInterval("reconnect_interval"));
        }
        Ok(())
    }
}

/// Source of the "current temperature" shown by the climate entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentTemperatureSelector {
    /// No current temperature is shown.
    Nothing,
    /// The last target set through the UI.
    Ui,
    /// The target temperature reported by the device.
    #[default]
    Device,
    /// Derived from the valve opening.
    Valve,
    /// Read from an external temperature sensor entity.
    Entity,
}

/// Source of the "target temperature" shown by the climate entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetTemperatureSelector {
    /// The value requested through the UI.
    #[default]
    Target,
    /// The value last reported by the device.
    LastReported,
}

/// Per-device options stored with the integration entry.
///
/// Every field has a default, so an empty JSON object is a valid set of
/// options.
///
/// ```
/// use eq3bt_lib::supervisor::{CurrentTemperatureSelector, DeviceOptions};
///
/// let options = DeviceOptions::from_json(
///     r#"{"current_temperature_selector": "entity",
///         "external_temperature_sensor": "sensor.living_room"}"#,
/// ).unwrap();
///
/// assert_eq!(options.current_temperature_selector, CurrentTemperatureSelector::Entity);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceOptions {
    /// Where the current temperature comes from.
    pub current_temperature_selector: CurrentTemperatureSelector,
    /// Where the target temperature comes from.
    pub target_temperature_selector: TargetTemperatureSelector,
    /// Entity id of the external sensor, used with
    /// [`CurrentTemperatureSelector::Entity`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_temperature_sensor: Option<String>,
}

impl DeviceOptions {
    /// Parses and validates options from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] for malformed input and
    /// [`ParseError::InvalidValue`] if the options are inconsistent.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that an external sensor is named when one is required.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if the entity selector is used
    /// without a sensor.
    pub fn validate(&self) -> Result<(), ParseError> {
        let has_sensor = self
            .external_temperature_sensor
            .as_deref()
            .is_some_and(|sensor| !sensor.trim().is_empty());

        if self.current_temperature_selector == CurrentTemperatureSelector::Entity && !has_sensor {
            return Err(ParseError::InvalidValue {
                field: "external_temperature_sensor".to_string(),
                message: "required when current_temperature_selector is \"entity\"".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> MacAddress {
        "00:1A:22:0C:4F:3B".parse().unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = SupervisorConfig::new(address());

        assert_eq!(config.poll_interval, Duration::from_secs(10));
        assert_eq!(config.reconnect_interval, config.poll_interval);
        assert_eq!(config.options, DeviceOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builders() {
        let options = DeviceOptions {
            target_temperature_selector: TargetTemperatureSelector::LastReported,
            ..DeviceOptions::default()
        };
        let config = SupervisorConfig::new(address())
            .with_poll_interval(Duration::from_secs(60))
            .with_reconnect_interval(Duration::from_secs(5))
            .with_options(options.clone());

        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.reconnect_interval, Duration::from_secs(5));
        assert_eq!(config.options, options);
    }

    #[test]
    fn zero_intervals_are_rejected() {
        let config = SupervisorConfig::new(address()).with_poll_interval(Duration::ZERO);
        assert_eq!(
            config.validate(),
            Err(ValueError::ZeroInterval("poll_interval"))
        );

        let config = SupervisorConfig::new(address()).with_reconnect_interval(Duration::ZERO);
        assert_eq!(
            config.validate(),
            Err(ValueError::ZeroInterval("reconnect_interval"))
        );
    }

    #[test]
    fn empty_options_use_defaults() {
        let options = DeviceOptions::from_json("{}").unwrap();

        assert_eq!(
            options.current_temperature_selector,
            CurrentTemperatureSelector::Device
        );
        assert_eq!(
            options.target_temperature_selector,
            TargetTemperatureSelector::Target
        );
        assert!(options.external_temperature_sensor.is_none());
    }

    #[test]
    fn options_parse_all_fields() {
        let options = DeviceOptions::from_json(
            r#"{
                "current_temperature_selector": "valve",
                "target_temperature_selector": "last_reported"
            }"#,
        )
        .unwrap();

        assert_eq!(
            options.current_temperature_selector,
            CurrentTemperatureSelector::Valve
        );
        assert_eq!(
            options.target_temperature_selector,
            TargetTemperatureSelector::LastReported
        );
    }

    #[test]
    fn entity_selector_requires_sensor() {
        let err = DeviceOptions::from_json(r#"{"current_temperature_selector": "entity"}"#)
            .unwrap_err();
        assert!(matches!(
            &err,
            ParseError::InvalidValue { field, .. } if field == "external_temperature_sensor"
        ));

        let err = DeviceOptions::from_json(
            r#"{"current_temperature_selector": "entity", "external_temperature_sensor": "  "}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { .. }));
    }

    #[test]
    fn unknown_selector_is_json_error() {
        let err = DeviceOptions::from_json(r#"{"current_temperature_selector": "outside"}"#)
            .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn options_serialize_without_empty_sensor() {
        let json = serde_json::to_string(&DeviceOptions::default()).unwrap();
        assert_eq!(
            json,
            r#"{"current_temperature_selector":"device","target_temperature_selector":"target"}"#
        );
    }
}
