// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Background task that keeps one thermostat connected and polled.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::error::TransportError;
use crate::event::{EventBus, SupervisorEvent};
use crate::session::DeviceSession;
use crate::state::{DeviceData, StatusCache};
use crate::subscription::SubscriberRegistry;
use crate::types::MacAddress;

use super::ConnectionState;

/// Upper bound for the disconnect performed on teardown.
pub(super) const DISCONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// State shared between the supervisor handle and its task.
#[derive(Debug)]
pub(super) struct Shared {
    pub(super) cache: StatusCache,
    pub(super) device_data: RwLock<Option<DeviceData>>,
    pub(super) registry: SubscriberRegistry,
    pub(super) events: EventBus,
    pub(super) state: watch::Sender<ConnectionState>,
}

impl Shared {
    pub(super) fn new() -> Self {
        let (state, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            cache: StatusCache::new(),
            device_data: RwLock::new(None),
            registry: SubscriberRegistry::new(),
            events: EventBus::new(),
            state,
        }
    }

    /// Delivers an event to attached subscribers, then to bus receivers.
    fn emit(&self, event: SupervisorEvent) {
        self.registry.notify(event);
        self.events.publish(event);
    }
}

pub(super) struct RunLoop<S> {
    pub(super) address: MacAddress,
    pub(super) poll_interval: Duration,
    pub(super) reconnect_interval: Duration,
    pub(super) session: Arc<S>,
    pub(super) shared: Arc<Shared>,
    pub(super) cancel: CancellationToken,
}

impl<S: DeviceSession> RunLoop<S> {
    /// Runs until the cancellation token fires, then releases the link.
    pub(super) async fn run(self) {
        tracing::debug!(address = %self.address, "Supervisor started");

        let mut state = ConnectionState::Disconnected;
        loop {
            let next = match state {
                ConnectionState::Disconnected => Some(self.enter(ConnectionState::Connecting)),
                ConnectionState::Connecting => self.connect().await,
                ConnectionState::Connected => self.poll().await,
            };

            match next {
                Some(next) => state = next,
                None => break,
            }
        }

        self.release(state).await;
    }

    /// One connect attempt, including the device data read. Returns `None`
    /// when cancelled.
    async fn connect(&self) -> Option<ConnectionState> {
        tracing::debug!(address = %self.address, "Connecting to thermostat");

        match self.until_cancelled(self.establish()).await? {
            Ok(data) => {
                tracing::debug!(address = %self.address, device = %data, "Thermostat connected");
                *self.shared.device_data.write() = Some(data);
                let state = self.enter(ConnectionState::Connected);
                self.shared.emit(SupervisorEvent::Connected);
                Some(state)
            }
            Err(error) => {
                tracing::debug!(
                    address = %self.address,
                    %error,
                    retry_in = ?self.reconnect_interval,
                    "Connection to thermostat failed"
                );
                self.until_cancelled(tokio::time::sleep(self.reconnect_interval))
                    .await?;
                Some(ConnectionState::Connecting)
            }
        }
    }

    async fn establish(&self) -> Result<DeviceData, TransportError> {
        self.session.connect().await?;
        self.session.fetch_device_data().await
    }

    /// One poll cycle: fetch, then wait. Returns `None` when cancelled.
    async fn poll(&self) -> Option<ConnectionState> {
        match self.until_cancelled(self.session.fetch_status()).await? {
            Ok(status) => {
                tracing::debug!(address = %self.address, ?status, "Received thermostat status");
                self.shared.cache.set(status);
                self.shared.emit(SupervisorEvent::StatusUpdated);
            }
            Err(error) if !self.session.is_connected() => {
                tracing::error!(address = %self.address, %error, "Thermostat disconnected");
                self.shared.cache.clear();
                let state = self.enter(ConnectionState::Disconnected);
                self.shared.emit(SupervisorEvent::Disconnected);
                return Some(state);
            }
            Err(error) => {
                tracing::error!(address = %self.address, %error, "Error updating thermostat status");
            }
        }

        self.until_cancelled(tokio::time::sleep(self.poll_interval))
            .await?;
        Some(ConnectionState::Connected)
    }

    /// Closes the link if it is still up and leaves a disconnected state.
    async fn release(&self, state: ConnectionState) {
        tracing::debug!(address = %self.address, %state, "Supervisor stopping");

        if self.session.is_connected() {
            match tokio::time::timeout(DISCONNECT_TIMEOUT, self.session.disconnect()).await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    tracing::warn!(address = %self.address, %error, "Failed to disconnect thermostat");
                }
                Err(_) => {
                    tracing::warn!(address = %self.address, "Timed out disconnecting thermostat");
                }
            }
        }

        self.shared.cache.clear();
        self.enter(ConnectionState::Disconnected);
        if state.is_connected() {
            self.shared.emit(SupervisorEvent::Disconnected);
        }

        tracing::debug!(address = %self.address, "Supervisor stopped");
    }

    fn enter(&self, state: ConnectionState) -> ConnectionState {
        self.shared.state.send_replace(state);
        state
    }

    async fn until_cancelled<F: Future>(&self, future: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            output = future => Some(output),
        }
    }
}
