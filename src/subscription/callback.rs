// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for supervisor subscriptions.
//!
//! This module provides the core types for managing subscription callbacks:
//!
//! - [`Subscription`] - The set of callbacks one subscriber registers
//! - [`SubscriberRegistry`] - Registry keyed by [`SubscriberId`] that dispatches events

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::SupervisorEvent;

use super::SubscriberId;

/// Type alias for event callbacks.
type Callback = Arc<dyn Fn() + Send + Sync>;

/// Callbacks registered by one subscriber.
///
/// Each callback is optional; a subscriber only hears about the events it
/// registered for.
///
/// # Examples
///
/// ```
/// use eq3bt_lib::subscription::Subscription;
///
/// let subscription = Subscription::new()
///     .on_status_updated(|| println!("re-read the status"))
///     .on_disconnected(|| println!("mark unavailable"));
/// ```
#[derive(Clone, Default)]
pub struct Subscription {
    on_status_updated: Option<Callback>,
    on_connected: Option<Callback>,
    on_disconnected: Option<Callback>,
}

impl Subscription {
    /// Creates a subscription with no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback for [`SupervisorEvent::StatusUpdated`].
    #[must_use]
    pub fn on_status_updated<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_status_updated = Some(Arc::new(callback));
        self
    }

    /// Sets the callback for [`SupervisorEvent::Connected`].
    #[must_use]
    pub fn on_connected<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_connected = Some(Arc::new(callback));
        self
    }

    /// Sets the callback for [`SupervisorEvent::Disconnected`].
    #[must_use]
    pub fn on_disconnected<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_disconnected = Some(Arc::new(callback));
        self
    }

    fn callback_for(&self, event: SupervisorEvent) -> Option<&Callback> {
        match event {
            SupervisorEvent::StatusUpdated => self.on_status_updated.as_ref(),
            SupervisorEvent::Connected => self.on_connected.as_ref(),
            SupervisorEvent::Disconnected => self.on_disconnected.as_ref(),
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("on_status_updated", &self.on_status_updated.is_some())
            .field("on_connected", &self.on_connected.is_some())
            .field("on_disconnected", &self.on_disconnected.is_some())
            .finish()
    }
}

/// Registry mapping subscriber identities to their callbacks.
///
/// Subscribers are notified in registration order. Re-subscribing an
/// existing id replaces its callbacks and keeps its position.
///
/// # Thread Safety
///
/// The registry uses `parking_lot::RwLock` internally. No lock is held while
/// callbacks run, so a callback may subscribe or unsubscribe without
/// deadlocking.
///
/// # Failure isolation
///
/// A panicking callback is caught and logged; the remaining subscribers are
/// still notified.
pub struct SubscriberRegistry {
    entries: RwLock<Vec<(SubscriberId, Subscription)>>,
}

impl SubscriberRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Registers callbacks under the given id.
    ///
    /// Returns `true` if the id was already registered and its callbacks
    /// were replaced.
    pub fn subscribe(&self, id: SubscriberId, subscription: Subscription) -> bool {
        let mut entries = self.entries.write();

        if let Some(entry) = entries.iter_mut().find(|(existing, _)| *existing == id) {
            entry.1 = subscription;
            return true;
        }

        entries.push((id, subscription));
        false
    }

    /// Removes the callbacks registered under the given id.
    ///
    /// Safe to call for ids that are not registered. Returns `true` if
    /// something was removed.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|(existing, _)| *existing != id);
        entries.len() != before
    }

    /// Returns `true` if the id is registered.
    #[must_use]
    pub fn contains(&self, id: SubscriberId) -> bool {
        self.entries.read().iter().any(|(existing, _)| *existing == id)
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if there are no registered subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes every subscriber.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Invokes every callback registered for `event`, in registration order.
    ///
    /// Returns the number of callbacks that completed without panicking.
    pub fn notify(&self, event: SupervisorEvent) -> usize {
        let callbacks: Vec<(SubscriberId, Callback)> = self
            .entries
            .read()
            .iter()
            .filter_map(|(id, subscription)| {
                subscription
                    .callback_for(event)
                    .map(|callback| (*id, Arc::clone(callback)))
            })
            .collect();

        let mut delivered = 0;
        for (id, callback) in callbacks {
            // An earlier callback in this round may have detached this one.
            if !self.contains(id) {
                continue;
            }

            if panic::catch_unwind(AssertUnwindSafe(|| callback())).is_ok() {
                delivered += 1;
            } else {
                tracing::error!(subscriber = %id, %event, "Subscriber callback panicked");
            }
        }

        delivered
    }
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("subscriber_count", &self.len())
            .finish()
    }
}
