// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast stream of supervisor events.

use tokio::sync::broadcast;

use super::SupervisorEvent;

/// Number of events a receiver may fall behind before it lags.
pub const EVENT_BUS_CAPACITY: usize = 64;

/// Fans supervisor events out to any number of async receivers.
///
/// A receiver that falls more than the capacity behind gets
/// `RecvError::Lagged` with the number of skipped events, then resumes with
/// the oldest event still buffered. Events only say "re-read the state", so
/// a lagging receiver recovers by reading the supervisor directly.
///
/// Cloning the bus yields another handle to the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SupervisorEvent>,
}

impl EventBus {
    /// Creates a bus holding [`EVENT_BUS_CAPACITY`] events.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_CAPACITY)
    }

    /// Creates a bus holding `capacity` events.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns a receiver for events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SupervisorEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of live receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes `event` and returns how many receivers it reached.
    ///
    /// With no receivers the event is dropped and `0` is returned.
    pub fn publish(&self, event: SupervisorEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
