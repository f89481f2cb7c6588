// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat status types.
//!
//! [`DeviceStatus`] is an immutable snapshot produced by one status fetch.
//! [`DeviceData`] identifies the firmware and serial of a thermostat.
//! [`StatusCache`] holds the most recent snapshot for a thermostat and is
//! written only by the connection supervisor.
//!
//! # Examples
//!
//! ```
//! use eq3bt_lib::state::{DeviceStatus, StatusCache};
//! use eq3bt_lib::types::{OperationMode, Temperature};
//!
//! let cache = StatusCache::new();
//! assert!(cache.get().is_none());
//!
//! let status = DeviceStatus::new(OperationMode::Auto, Temperature::new(20.0).unwrap());
//! assert_eq!(status.mode(), OperationMode::Auto);
//! ```

mod device_data;
mod device_status;
mod status_cache;

pub use device_data::{DeviceData, MIN_FIRMWARE_FOR_PRESETS};
pub use device_status::{DeviceStatus, Presets};
pub use status_cache::StatusCache;
