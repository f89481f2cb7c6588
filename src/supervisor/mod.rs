// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection supervision for one thermostat.
//!
//! A [`ConnectionSupervisor`] owns the link to a single thermostat. It runs a
//! background task that:
//!
//! - **connects** on start, retrying every
//!   [`reconnect_interval`](SupervisorConfig::reconnect_interval) until it
//!   succeeds;
//! - **polls** the status every
//!   [`poll_interval`](SupervisorConfig::poll_interval) and stores it in the
//!   status cache;
//! - **detects** a lost link after a failed fetch, clears the cache and
//!   starts reconnecting right away;
//! - **notifies** attached subscribers and event receivers of each
//!   transition and each new status.
//!
//! A failed fetch on a link that is still up is logged and otherwise
//! ignored: the cache keeps its last value and no event is emitted.
//!
//! # Event order
//!
//! For each supervisor, events are delivered in the order they happen, and
//! `Connected` and `Disconnected` alternate strictly, starting with
//! `Connected`. Every `StatusUpdated` falls between a `Connected` and the
//! next `Disconnected`.
//!
//! # Examples
//!
//! ```no_run
//! use eq3bt_lib::event::SupervisorEvent;
//! use eq3bt_lib::session::DeviceSession;
//! use eq3bt_lib::supervisor::{ConnectionSupervisor, SupervisorConfig};
//!
//! # async fn example<S: DeviceSession>(session: S) -> eq3bt_lib::Result<()> {
//! let config = SupervisorConfig::new("00:1A:22:0C:4F:3B".parse()?);
//! let supervisor = ConnectionSupervisor::with_session(config, session)?;
//!
//! let mut events = supervisor.subscribe_events();
//! while let Ok(event) = events.recv().await {
//!     if event == SupervisorEvent::StatusUpdated {
//!         let status = supervisor.status();
//!         println!("{status:?}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod connection_state;
mod connection_supervisor;
mod run_loop;

pub use config::{
    CurrentTemperatureSelector, DEFAULT_POLL_INTERVAL, DEFAULT_RECONNECT_INTERVAL, DeviceOptions,
    SupervisorConfig, TargetTemperatureSelector,
};
pub use connection_state::ConnectionState;
pub use connection_supervisor::ConnectionSupervisor;
