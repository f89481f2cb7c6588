// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for thermostat control.
//!
//! Each type ensures values are within the range the thermostat accepts at
//! construction time, so commands built from them cannot be rejected for
//! being out of range.
//!
//! # Types
//!
//! - [`MacAddress`] - Bluetooth address of a thermostat
//! - [`Temperature`] - Setpoint on the 0.5 °C grid (4.5-30.0)
//! - [`TemperatureOffset`] - Sensor correction (-3.5-3.5)
//! - [`WindowOpenDuration`] - Window-open hold time (0-60 min, 5 min steps)
//! - [`AwayDuration`] - Away-mode length (0.5 h steps)
//! - [`OperationMode`] - Auto/Manual/On/Off
//! - [`Preset`] - Comfort/Eco

mod away_duration;
mod mac_address;
mod mode;
mod temperature;
mod window_open;

pub use away_duration::AwayDuration;
pub use mac_address::MacAddress;
pub use mode::{OperationMode, Preset};
pub use temperature::{Temperature, TemperatureOffset};
pub use window_open::WindowOpenDuration;
