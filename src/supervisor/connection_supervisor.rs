// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Public handle of a supervised thermostat.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::command::ThermostatCommand;
use crate::error::{Error, TransportError};
use crate::event::SupervisorEvent;
use crate::session::{DeviceResolver, DeviceSession};
use crate::state::{DeviceData, DeviceStatus};
use crate::subscription::{SubscriberId, Subscription};
use crate::types::{MacAddress, OperationMode, Preset, Temperature};

use super::run_loop::{RunLoop, Shared};
use super::{ConnectionState, DeviceOptions, SupervisorConfig};

/// Keeps one thermostat connected, polls its status and fans out changes.
///
/// Starting a supervisor spawns a background task on the current Tokio
/// runtime. The task connects, polls every
/// [`poll_interval`](SupervisorConfig::poll_interval), and reconnects when
/// the link is lost. Entity adapters read the last status through
/// [`status`](Self::status) and learn about changes through subscriptions
/// or the event stream.
///
/// # Teardown
///
/// [`shutdown`](Self::shutdown) stops the task, closes the link and waits
/// for the task to finish. Dropping the supervisor only signals the task to
/// stop; it still releases the link, but nobody waits for it.
///
/// # Examples
///
/// ```no_run
/// use eq3bt_lib::session::DeviceSession;
/// use eq3bt_lib::subscription::{SubscriberId, Subscription};
/// use eq3bt_lib::supervisor::{ConnectionSupervisor, SupervisorConfig};
/// use eq3bt_lib::types::MacAddress;
///
/// # async fn example<S: DeviceSession>(lookup: impl Fn(&MacAddress) -> Option<S>)
/// #     -> eq3bt_lib::Result<()> {
/// let config = SupervisorConfig::new("00:1A:22:0C:4F:3B".parse()?);
/// let supervisor = ConnectionSupervisor::start(config, &lookup)?;
///
/// let id = SubscriberId::new();
/// supervisor.attach_subscriber(
///     id,
///     Subscription::new().on_status_updated(|| println!("status changed")),
/// );
///
/// // ...
///
/// supervisor.detach_subscriber(id);
/// supervisor.shutdown().await;
/// # Ok(())
/// # }
/// ```
pub struct ConnectionSupervisor<S: DeviceSession> {
    config: SupervisorConfig,
    session: Arc<S>,
    shared: Arc<Shared>,
    cancel: CancellationToken,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<S: DeviceSession> ConnectionSupervisor<S> {
    /// Resolves the thermostat and starts supervising it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotReady`] if the resolver has no session for the
    /// address; no task is started in that case. Returns [`Error::Value`] if
    /// the configuration has a zero interval.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn start<R>(config: SupervisorConfig, resolver: &R) -> crate::Result<Self>
    where
        R: DeviceResolver<Session = S> + ?Sized,
    {
        config.validate()?;

        let Some(session) = resolver.resolve(&config.address) else {
            tracing::debug!(address = %config.address, "Thermostat not found");
            return Err(Error::NotReady {
                address: config.address,
            });
        };

        Ok(Self::spawn(config, session))
    }

    /// Starts supervising an already resolved session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if the configuration has a zero interval.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn with_session(config: SupervisorConfig, session: S) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self::spawn(config, session))
    }

    fn spawn(config: SupervisorConfig, session: S) -> Self {
        let session = Arc::new(session);
        let shared = Arc::new(Shared::new());
        let cancel = CancellationToken::new();

        let run_loop = RunLoop {
            address: config.address,
            poll_interval: config.poll_interval,
            reconnect_interval: config.reconnect_interval,
            session: Arc::clone(&session),
            shared: Arc::clone(&shared),
            cancel: cancel.clone(),
        };
        let task = tokio::spawn(run_loop.run());

        Self {
            config,
            session,
            shared,
            cancel,
            task: Mutex::new(Some(task)),
        }
    }

    /// Returns the address of the supervised thermostat.
    #[must_use]
    pub fn address(&self) -> MacAddress {
        self.config.address
    }

    /// Returns the configuration the supervisor was started with.
    #[must_use]
    pub fn config(&self) -> &SupervisorConfig {
        &self.config
    }

    /// Returns the device options.
    #[must_use]
    pub fn options(&self) -> &DeviceOptions {
        &self.config.options
    }

    /// Registers callbacks under `id`.
    ///
    /// Registering an id that is already attached replaces its callbacks.
    /// Returns `true` in that case.
    pub fn attach_subscriber(&self, id: SubscriberId, subscription: Subscription) -> bool {
        self.shared.registry.subscribe(id, subscription)
    }

    /// Removes the callbacks registered under `id`.
    ///
    /// Once this returns, none of them is invoked again. Detaching an
    /// unknown id is a no-op that returns `false`.
    pub fn detach_subscriber(&self, id: SubscriberId) -> bool {
        self.shared.registry.unsubscribe(id)
    }

    /// Returns the last received status.
    ///
    /// `None` until the first successful fetch and after the link is lost.
    #[must_use]
    pub fn status(&self) -> Option<Arc<DeviceStatus>> {
        self.shared.cache.get()
    }

    /// Returns the firmware version and serial read on the latest connect.
    ///
    /// `None` until the first connect succeeds. Kept across disconnects.
    #[must_use]
    pub fn device_data(&self) -> Option<DeviceData> {
        self.shared.device_data.read().clone()
    }

    /// Returns the current connection state.
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        *self.shared.state.borrow()
    }

    /// Returns true if the thermostat is connected and a status is known.
    ///
    /// Entity adapters report themselves available exactly when this holds.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.connection_state().is_connected() && self.shared.cache.is_present()
    }

    /// Returns true while the background task is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Subscribes to the event stream.
    ///
    /// Receivers see the same events as attached subscribers, after them.
    #[must_use]
    pub fn subscribe_events(&self) -> broadcast::Receiver<SupervisorEvent> {
        self.shared.events.subscribe()
    }

    /// Returns a receiver that observes connection state changes.
    #[must_use]
    pub fn watch_connection(&self) -> watch::Receiver<ConnectionState> {
        self.shared.state.subscribe()
    }

    /// Returns a receiver that observes every status replacement.
    #[must_use]
    pub fn watch_status(&self) -> watch::Receiver<Option<Arc<DeviceStatus>>> {
        self.shared.cache.watch()
    }

    // ========== Commands ==========

    /// Forwards a command to the session.
    ///
    /// The cache is not touched; the next poll picks up the effect.
    ///
    /// # Errors
    ///
    /// Returns the session's `TransportError` unchanged.
    pub async fn send_command(&self, command: ThermostatCommand) -> Result<(), TransportError> {
        tracing::debug!(address = %self.config.address, %command, "Sending command");
        self.session.send_command(command).await
    }

    /// Sets the target temperature.
    ///
    /// # Errors
    ///
    /// Returns the session's `TransportError` unchanged.
    pub async fn send_temperature(&self, temperature: Temperature) -> Result<(), TransportError> {
        self.send_command(ThermostatCommand::SetTemperature(temperature))
            .await
    }

    /// Sets the operation mode.
    ///
    /// # Errors
    ///
    /// Returns the session's `TransportError` unchanged.
    pub async fn send_mode(&self, mode: OperationMode) -> Result<(), TransportError> {
        self.send_command(ThermostatCommand::SetMode(mode)).await
    }

    /// Activates a temperature preset.
    ///
    /// # Errors
    ///
    /// Returns the session's `TransportError` unchanged.
    pub async fn send_preset(&self, preset: Preset) -> Result<(), TransportError> {
        self.send_command(ThermostatCommand::SetPreset(preset)).await
    }

    /// Turns boost on or off.
    ///
    /// # Errors
    ///
    /// Returns the session's `TransportError` unchanged.
    pub async fn set_boost(&self, enabled: bool) -> Result<(), TransportError> {
        self.send_command(ThermostatCommand::SetBoost(enabled)).await
    }

    /// Turns away mode on or off.
    ///
    /// # Errors
    ///
    /// Returns the session's `TransportError` unchanged.
    pub async fn set_away(&self, enabled: bool) -> Result<(), TransportError> {
        self.send_command(ThermostatCommand::SetAway(enabled)).await
    }

    /// Locks or unlocks the thermostat's buttons.
    ///
    /// # Errors
    ///
    /// Returns the session's `TransportError` unchanged.
    pub async fn set_locked(&self, locked: bool) -> Result<(), TransportError> {
        self.send_command(ThermostatCommand::SetLocked(locked)).await
    }

    // ========== Teardown ==========

    /// Stops supervising and waits for the task to finish.
    ///
    /// Interrupts any pending connect, fetch or wait, disconnects the session
    /// if it is still connected, clears the status and emits a final
    /// `Disconnected` if the thermostat was connected. All subscribers are
    /// detached afterwards. Calling this again is a no-op.
    pub async fn shutdown(&self) {
        self.cancel.cancel();

        let task = self.task.lock().take();
        if let Some(task) = task {
            if let Err(error) = task.await {
                tracing::error!(address = %self.config.address, %error, "Supervisor task failed");
            }
            self.shared.registry.clear();
        }
    }
}

impl<S: DeviceSession> Drop for ConnectionSupervisor<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl<S: DeviceSession> fmt::Debug for ConnectionSupervisor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSupervisor")
            .field("address", &self.config.address)
            .field("state", &self.connection_state())
            .field("subscribers", &self.shared.registry.len())
            .finish_non_exhaustive()
    }
}
