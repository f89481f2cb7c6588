// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection state of a supervised thermostat.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection state as seen by the supervisor.
///
/// A supervisor starts in `Disconnected`, moves to `Connecting` right away
/// and to `Connected` once a connect attempt succeeds. Losing the link sends
/// it back to `Disconnected`, from where the next attempt starts
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No link to the thermostat.
    #[default]
    Disconnected,
    /// Connect attempts are in progress.
    Connecting,
    /// The link is up and the status is being polled.
    Connected,
}

impl ConnectionState {
    /// Returns true if the thermostat is connected.
    #[must_use]
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Returns the state name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
