// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat status snapshot.

use chrono::NaiveDateTime;

use crate::types::{OperationMode, Temperature, TemperatureOffset, WindowOpenDuration};

/// Temperatures and timings stored on the thermostat.
///
/// Only thermostats whose firmware stores presets report these; see
/// [`DeviceData::supports_presets`](super::DeviceData::supports_presets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Presets {
    /// Comfort preset temperature.
    pub comfort_temperature: Temperature,
    /// Eco preset temperature.
    pub eco_temperature: Temperature,
    /// Temperature held while a window is open.
    pub window_open_temperature: Temperature,
    /// How long the window-open temperature is held.
    pub window_open_duration: WindowOpenDuration,
    /// Correction applied to the internal sensor.
    pub offset_temperature: TemperatureOffset,
}

/// Snapshot of a thermostat's state, as returned by one status fetch.
///
/// A `DeviceStatus` is never modified after it is built. Each successful
/// poll produces a new snapshot that replaces the previous one wholesale in
/// the [`StatusCache`](super::StatusCache).
///
/// # Examples
///
/// ```
/// use eq3bt_lib::state::DeviceStatus;
/// use eq3bt_lib::types::{OperationMode, Temperature};
///
/// let status = DeviceStatus::new(OperationMode::Manual, Temperature::new(21.0).unwrap())
///     .with_valve(35)
///     .with_boost(true);
///
/// assert_eq!(status.valve(), 35);
/// assert!(status.is_boost());
/// assert!(!status.is_away());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct DeviceStatus {
    mode: OperationMode,
    target_temperature: Temperature,
    /// Valve opening in percent (0-100).
    valve: u8,
    is_away: bool,
    is_boost: bool,
    is_window_open: bool,
    is_low_battery: bool,
    is_locked: bool,
    is_dst: bool,
    away_until: Option<NaiveDateTime>,
    presets: Option<Presets>,
}

impl DeviceStatus {
    /// Creates a status with the given mode and target, all flags cleared,
    /// the valve closed and no presets.
    #[must_use]
    pub fn new(mode: OperationMode, target_temperature: Temperature) -> Self {
        Self {
            mode,
            target_temperature,
            valve: 0,
            is_away: false,
            is_boost: false,
            is_window_open: false,
            is_low_battery: false,
            is_locked: false,
            is_dst: false,
            away_until: None,
            presets: None,
        }
    }

    /// Sets the valve opening; values above 100 are clamped.
    #[must_use]
    pub fn with_valve(mut self, percent: u8) -> Self {
        self.valve = percent.min(100);
        self
    }

    /// Sets the away flag.
    #[must_use]
    pub fn with_away(mut self, away: bool) -> Self {
        self.is_away = away;
        self
    }

    /// Sets the away end time.
    #[must_use]
    pub fn with_away_until(mut self, until: Option<NaiveDateTime>) -> Self {
        self.away_until = until;
        self
    }

    /// Sets the boost flag.
    #[must_use]
    pub fn with_boost(mut self, boost: bool) -> Self {
        self.is_boost = boost;
        self
    }

    /// Sets the window-open flag.
    #[must_use]
    pub fn with_window_open(mut self, open: bool) -> Self {
        self.is_window_open = open;
        self
    }

    /// Sets the low-battery flag.
    #[must_use]
    pub fn with_low_battery(mut self, low: bool) -> Self {
        self.is_low_battery = low;
        self
    }

    /// Sets the child-lock flag.
    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.is_locked = locked;
        self
    }

    /// Sets the daylight-saving flag.
    #[must_use]
    pub fn with_dst(mut self, dst: bool) -> Self {
        self.is_dst = dst;
        self
    }

    /// Sets the stored presets.
    #[must_use]
    pub fn with_presets(mut self, presets: Presets) -> Self {
        self.presets = Some(presets);
        self
    }

    /// Returns the operating mode.
    #[must_use]
    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    /// Returns the target temperature.
    #[must_use]
    pub fn target_temperature(&self) -> Temperature {
        self.target_temperature
    }

    /// Returns the valve opening in percent.
    #[must_use]
    pub fn valve(&self) -> u8 {
        self.valve
    }

    /// Returns `true` if away mode is active.
    #[must_use]
    pub fn is_away(&self) -> bool {
        self.is_away
    }

    /// Returns when away mode ends, if it is active and time-limited.
    #[must_use]
    pub fn away_until(&self) -> Option<NaiveDateTime> {
        self.away_until
    }

    /// Returns `true` if boost is running.
    #[must_use]
    pub fn is_boost(&self) -> bool {
        self.is_boost
    }

    /// Returns `true` if an open window was detected.
    #[must_use]
    pub fn is_window_open(&self) -> bool {
        self.is_window_open
    }

    /// Returns `true` if the battery is low.
    #[must_use]
    pub fn is_low_battery(&self) -> bool {
        self.is_low_battery
    }

    /// Returns `true` if the buttons are locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// Returns `true` if daylight-saving time is active on the device clock.
    #[must_use]
    pub fn is_dst(&self) -> bool {
        self.is_dst
    }

    /// Returns the stored presets, if the firmware reports them.
    #[must_use]
    pub fn presets(&self) -> Option<&Presets> {
        self.presets.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn presets() -> Presets {
        Presets {
            comfort_temperature: Temperature::new(21.0).unwrap(),
            eco_temperature: Temperature::new(16.0).unwrap(),
            window_open_temperature: Temperature::new(5.0).unwrap(),
            window_open_duration: WindowOpenDuration::from_minutes(15).unwrap(),
            offset_temperature: TemperatureOffset::default(),
        }
    }

    #[test]
    fn new_status_has_flags_cleared() {
        let status = DeviceStatus::new(OperationMode::Auto, Temperature::new(20.0).unwrap());

        assert_eq!(status.mode(), OperationMode::Auto);
        assert_eq!(status.target_temperature().celsius(), 20.0);
        assert_eq!(status.valve(), 0);
        assert!(!status.is_away());
        assert!(!status.is_boost());
        assert!(!status.is_window_open());
        assert!(!status.is_low_battery());
        assert!(!status.is_locked());
        assert!(!status.is_dst());
        assert!(status.away_until().is_none());
        assert!(status.presets().is_none());
    }

    #[test]
    fn builder_sets_every_field() {
        let until = NaiveDate::from_ymd_opt(2026, 12, 24)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();

        let status = DeviceStatus::new(OperationMode::Manual, Temperature::new(22.5).unwrap())
            .with_valve(40)
            .with_away(true)
            .with_away_until(Some(until))
            .with_boost(true)
            .with_window_open(true)
            .with_low_battery(true)
            .with_locked(true)
            .with_dst(true)
            .with_presets(presets());

        assert_eq!(status.valve(), 40);
        assert!(status.is_away());
        assert_eq!(status.away_until(), Some(until));
        assert!(status.is_boost());
        assert!(status.is_window_open());
        assert!(status.is_low_battery());
        assert!(status.is_locked());
        assert!(status.is_dst());
        assert_eq!(status.presets(), Some(&presets()));
    }

    #[test]
    fn valve_is_clamped() {
        let status =
            DeviceStatus::new(OperationMode::On, Temperature::ON).with_valve(250);
        assert_eq!(status.valve(), 100);
    }

    #[test]
    fn serializes_to_json() {
        let status = DeviceStatus::new(OperationMode::Auto, Temperature::new(20.0).unwrap())
            .with_valve(1)
            .with_presets(presets());

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["mode"], "auto");
        assert_eq!(json["target_temperature"], 20.0);
        assert_eq!(json["presets"]["window_open_duration"], 15);

        let back: DeviceStatus = serde_json::from_value(json).unwrap();
        assert_eq!(back, status);
    }
}
