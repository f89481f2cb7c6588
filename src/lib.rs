// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `eq3bt` Lib - connection supervision for eQ-3 Bluetooth thermostats.
//!
//! This library keeps eQ-3 radiator thermostats connected over Bluetooth Low
//! Energy, polls their status and tells the entities built on top of them
//! when something changes.
//!
//! # Supported Features
//!
//! - **Supervision**: Connect on start, poll periodically, reconnect after a
//!   lost link
//! - **Status cache**: The last known status, shared by all entities of a
//!   thermostat
//! - **Subscriptions**: Callbacks for status updates, connects and
//!   disconnects, plus an async event stream
//! - **Commands**: Target temperature, mode, presets, boost, away and lock
//! - **Device data**: Firmware version and serial, read on every connect
//! - **Options**: Per-device temperature source selection
//!
//! The Bluetooth stack itself is not part of this crate. A host implements
//! [`DeviceSession`](session::DeviceSession) on top of its radio and hands
//! sessions to the supervisor through a
//! [`DeviceResolver`](session::DeviceResolver).
//!
//! # Quick Start
//!
//! ```no_run
//! use eq3bt_lib::session::DeviceSession;
//! use eq3bt_lib::subscription::{SubscriberId, Subscription};
//! use eq3bt_lib::supervisor::{ConnectionSupervisor, SupervisorConfig};
//! use eq3bt_lib::types::{MacAddress, Temperature};
//!
//! # async fn example<S: DeviceSession>(lookup: impl Fn(&MacAddress) -> Option<S>)
//! #     -> eq3bt_lib::Result<()> {
//! let config = SupervisorConfig::new("00:1A:22:0C:4F:3B".parse()?);
//!
//! // Fails with `Error::NotReady` if the thermostat is out of range
//! let supervisor = ConnectionSupervisor::start(config, &lookup)?;
//!
//! supervisor.attach_subscriber(
//!     SubscriberId::new(),
//!     Subscription::new()
//!         .on_connected(|| println!("connected"))
//!         .on_status_updated(|| println!("new status")),
//! );
//!
//! supervisor.send_temperature(Temperature::setpoint(21.5)?).await?;
//!
//! supervisor.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod error;
pub mod event;
pub mod session;
pub mod state;
pub mod subscription;
pub mod supervisor;
pub mod types;

pub use command::ThermostatCommand;
pub use error::{Error, ParseError, Result, TransportError, ValueError};
pub use event::{EventBus, SupervisorEvent};
pub use session::{DeviceResolver, DeviceSession};
pub use state::{DeviceData, DeviceStatus, Presets, StatusCache};
pub use subscription::{SubscriberId, SubscriberRegistry, Subscription};
pub use supervisor::{ConnectionState, ConnectionSupervisor, DeviceOptions, SupervisorConfig};
pub use types::{
    AwayDuration, MacAddress, OperationMode, Preset, Temperature, TemperatureOffset,
    WindowOpenDuration,
};
