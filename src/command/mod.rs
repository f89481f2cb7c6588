// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat command definitions.
//!
//! [`ThermostatCommand`] lists every command a
//! [`DeviceSession`](crate::session::DeviceSession) executes. Encoding a
//! command for the radio is the session's business; this crate only builds
//! validated commands and forwards them.
//!
//! # Available Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `SetTemperature` | Change the target temperature |
//! | `SetMode` | Switch between auto, manual, on and off |
//! | `SetPreset` | Activate the comfort or eco temperature |
//! | `SetBoost` / `SetAway` / `SetLocked` | Toggle boost, away mode and the child lock |
//! | `Configure*` | Change the temperatures and timings stored on the device |
//!
//! # Examples
//!
//! ```
//! use eq3bt_lib::command::ThermostatCommand;
//! use eq3bt_lib::types::Temperature;
//!
//! let cmd = ThermostatCommand::SetTemperature(Temperature::new(21.0).unwrap());
//! assert_eq!(cmd.name(), "set_temperature");
//! assert_eq!(cmd.to_string(), "set_temperature 21.0°C");
//! ```

mod thermostat;

pub use thermostat::ThermostatCommand;
