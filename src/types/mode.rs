// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation mode and preset types.

use std::fmt;

/// Operating mode reported by and sent to the thermostat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    /// Follows the thermostat's weekly schedule.
    #[default]
    Auto,
    /// Holds the manually set target temperature.
    Manual,
    /// Valve permanently open.
    On,
    /// Valve permanently closed.
    Off,
}

impl OperationMode {
    /// Returns the mode name as used in logs and configuration.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored temperature preset that can be activated on the thermostat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// The comfort temperature.
    Comfort,
    /// The eco (reduced) temperature.
    Eco,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comfort => f.write_str("comfort"),
            Self::Eco => f.write_str("eco"),
        }
    }
}
