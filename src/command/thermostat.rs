// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat commands.

use std::fmt;

use crate::types::{
    AwayDuration, OperationMode, Preset, Temperature, TemperatureOffset, WindowOpenDuration,
};

/// A command that can be sent to an eQ-3 thermostat.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum ThermostatCommand {
    /// Set the target temperature.
    SetTemperature(Temperature),
    /// Set the operating mode.
    SetMode(OperationMode),
    /// Activate a stored preset.
    SetPreset(Preset),
    /// Start or stop boost.
    SetBoost(bool),
    /// Enter or leave away mode.
    SetAway(bool),
    /// Lock or unlock the device buttons.
    SetLocked(bool),
    /// Store a new comfort temperature.
    ConfigureComfortTemperature(Temperature),
    /// Store a new eco temperature.
    ConfigureEcoTemperature(Temperature),
    /// Store a new window-open temperature.
    ConfigureWindowOpenTemperature(Temperature),
    /// Store a new window-open duration.
    ConfigureWindowOpenDuration(WindowOpenDuration),
    /// Store a new sensor offset.
    ConfigureTemperatureOffset(TemperatureOffset),
    /// Store a new away temperature.
    ConfigureAwayTemperature(Temperature),
    /// Store how long away mode lasts.
    ConfigureAwayHours(AwayDuration),
}

impl ThermostatCommand {
    /// Returns the command name as used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetTemperature(_) => "set_temperature",
            Self::SetMode(_) => "set_mode",
            Self::SetPreset(_) => "set_preset",
            Self::SetBoost(_) => "set_boost",
            Self::SetAway(_) => "set_away",
            Self::SetLocked(_) => "set_locked",
            Self::ConfigureComfortTemperature(_) => "configure_comfort_temperature",
            Self::ConfigureEcoTemperature(_) => "configure_eco_temperature",
            Self::ConfigureWindowOpenTemperature(_) => "configure_window_open_temperature",
            Self::ConfigureWindowOpenDuration(_) => "configure_window_open_duration",
            Self::ConfigureTemperatureOffset(_) => "configure_temperature_offset",
            Self::ConfigureAwayTemperature(_) => "configure_away_temperature",
            Self::ConfigureAwayHours(_) => "configure_away_hours",
        }
    }
}

impl fmt::Display for ThermostatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            Self::SetTemperature(t)
            | Self::ConfigureComfortTemperature(t)
            | Self::ConfigureEcoTemperature(t)
            | Self::ConfigureWindowOpenTemperature(t)
            | Self::ConfigureAwayTemperature(t) => write!(f, "{name} {t}"),
            Self::SetMode(mode) => write!(f, "{name} {mode}"),
            Self::SetPreset(preset) => write!(f, "{name} {preset}"),
            Self::SetBoost(on) | Self::SetAway(on) | Self::SetLocked(on) => {
                write!(f, "{name} {on}")
            }
            Self::ConfigureWindowOpenDuration(d) => write!(f, "{name} {d}"),
            Self::ConfigureTemperatureOffset(o) => write!(f, "{name} {o}"),
            Self::ConfigureAwayHours(h) => write!(f, "{name} {h}"),
        }
    }
}
