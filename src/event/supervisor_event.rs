// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Supervisor event type.

use std::fmt;

/// Events emitted by a connection supervisor.
///
/// Events carry no payload. A subscriber reacts by re-reading the status
/// cache or the availability flag of the supervisor.
///
/// # Examples
///
/// ```
/// use eq3bt_lib::event::SupervisorEvent;
///
/// let event = SupervisorEvent::Connected;
/// assert!(event.is_connection());
/// assert_eq!(event.to_string(), "connected");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupervisorEvent {
    /// The link to the thermostat was established.
    Connected,

    /// The link to the thermostat was lost or released.
    Disconnected,

    /// A new status snapshot is in the cache.
    StatusUpdated,
}

impl SupervisorEvent {
    /// Returns `true` for connectivity events.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connected | Self::Disconnected)
    }

    /// Returns the event name as used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::StatusUpdated => "status_updated",
        }
    }
}

impl fmt::Display for SupervisorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_events() {
        assert!(SupervisorEvent::Connected.is_connection());
        assert!(SupervisorEvent::Disconnected.is_connection());
        assert!(!SupervisorEvent::StatusUpdated.is_connection());
    }

    #[test]
    fn display_matches_serde() {
        for event in [
            SupervisorEvent::Connected,
            SupervisorEvent::Disconnected,
            SupervisorEvent::StatusUpdated,
        ] {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{event}\""));
        }
    }
}
