// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last known thermostat status.

use std::sync::Arc;

use tokio::sync::watch;

use super::DeviceStatus;

/// Holds the latest [`DeviceStatus`] of one thermostat, or nothing.
///
/// Readers get a shared snapshot and never see a partially written value.
/// Only the connection supervisor writes to the cache; that is why the
/// mutating methods are crate-private.
///
/// The cache is backed by a `watch` channel, so async consumers can also
/// wait for the next value with [`watch`](Self::watch).
#[derive(Debug)]
pub struct StatusCache {
    tx: watch::Sender<Option<Arc<DeviceStatus>>>,
}

impl StatusCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Returns the current status, if one is held.
    ///
    /// Never blocks beyond the short read of the shared pointer.
    #[must_use]
    pub fn get(&self) -> Option<Arc<DeviceStatus>> {
        self.tx.borrow().clone()
    }

    /// Returns `true` if a status is held.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Creates a receiver that observes every replacement of the value.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Option<Arc<DeviceStatus>>> {
        self.tx.subscribe()
    }

    /// Replaces the held value and returns the new snapshot.
    pub(crate) fn set(&self, status: DeviceStatus) -> Arc<DeviceStatus> {
        let status = Arc::new(status);
        // send_replace updates the value even without receivers
        self.tx.send_replace(Some(Arc::clone(&status)));
        status
    }

    /// Drops the held value.
    pub(crate) fn clear(&self) {
        self.tx.send_replace(None);
    }
}

impl Default for StatusCache {
    fn default() -> Self {
        Self::new()
    }
}
