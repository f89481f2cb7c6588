// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The seam between the supervisor and the Bluetooth stack.
//!
//! The crate does not talk to the radio itself. A host provides:
//!
//! - a [`DeviceResolver`] that turns a [`MacAddress`] into a session for a
//!   reachable thermostat, or reports that none is in range;
//! - a [`DeviceSession`] that connects, disconnects, reads the device data
//!   and the status, and executes [`ThermostatCommand`]s on one thermostat.
//!
//! Every session operation fails with [`TransportError`].

use std::future::Future;

use crate::command::ThermostatCommand;
use crate::error::TransportError;
use crate::state::{DeviceData, DeviceStatus};
use crate::types::MacAddress;

/// One Bluetooth link to one thermostat.
///
/// The supervisor drives `connect`, `fetch_device_data`, `fetch_status` and
/// `disconnect` strictly sequentially; it never issues two of them concurrently.
/// `send_command` is called from whichever task holds the supervisor and
/// may overlap with a poll.
pub trait DeviceSession: Send + Sync + 'static {
    /// Establishes the link.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the thermostat could not be reached.
    fn connect(&self) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Releases the link.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the link could not be closed cleanly.
    fn disconnect(&self) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Reads the firmware version and serial number.
    ///
    /// Called right after every successful `connect`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on any failure; the supervisor then retries
    /// the connect.
    fn fetch_device_data(&self) -> impl Future<Output = Result<DeviceData, TransportError>> + Send;

    /// Reads the current status of the thermostat.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` on any failure. Whether the link survived
    /// the failure is reported by [`is_connected`](Self::is_connected).
    fn fetch_status(&self) -> impl Future<Output = Result<DeviceStatus, TransportError>> + Send;

    /// Executes one command.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the command could not be delivered.
    fn send_command(
        &self,
        command: ThermostatCommand,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Returns whether the underlying link is currently up.
    ///
    /// This reflects the transport's own view and may lag reality.
    fn is_connected(&self) -> bool;
}

/// Resolves a thermostat address to a session, if the thermostat is
/// reachable right now.
///
/// Closures of the form `Fn(&MacAddress) -> Option<S>` implement this trait.
pub trait DeviceResolver {
    /// The session type produced by this resolver.
    type Session: DeviceSession;

    /// Returns a session for `address`, or `None` if the radio has no handle
    /// for it.
    fn resolve(&self, address: &MacAddress) -> Option<Self::Session>;
}

impl<F, S> DeviceResolver for F
where
    F: Fn(&MacAddress) -> Option<S>,
    S: DeviceSession,
{
    type Session = S;

    fn resolve(&self, address: &MacAddress) -> Option<S> {
        self(address)
    }
}
