// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscriber identifier type.

use std::fmt;

use uuid::Uuid;

/// Identity of a subscriber attached to a supervisor.
///
/// An entity adapter creates its id once and uses it for both attach and
/// detach. Wrapping a UUID v4 keeps it distinct from other identifiers.
///
/// # Examples
///
/// ```
/// use eq3bt_lib::subscription::SubscriberId;
///
/// let id = SubscriberId::new();
/// assert_ne!(id, SubscriberId::new());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SubscriberId(Uuid);

impl SubscriberId {
    /// Creates a new unique subscriber identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a subscriber identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show only first 8 characters for readability
        let short = &self.0.to_string()[..8];
        write!(f, "SubscriberId({short}...)")
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SubscriberId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_unique_ids() {
        assert_ne!(SubscriberId::new(), SubscriberId::new());
    }

    #[test]
    fn from_uuid_keeps_value() {
        let uuid = Uuid::new_v4();
        assert_eq!(SubscriberId::from_uuid(uuid).as_uuid(), uuid);
        assert_eq!(SubscriberId::from(uuid), SubscriberId::from_uuid(uuid));
    }

    #[test]
    fn debug_is_shortened() {
        let debug = format!("{:?}", SubscriberId::new());
        assert!(debug.starts_with("SubscriberId("));
        assert!(debug.ends_with("...)"));
    }

    #[test]
    fn display_is_full_uuid() {
        let uuid = Uuid::parse_str("a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8").unwrap();
        assert_eq!(
            SubscriberId::from_uuid(uuid).to_string(),
            "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8"
        );
    }
}
