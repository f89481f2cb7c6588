// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Window-open duration type.

use std::fmt;
use std::time::Duration;

use crate::error::ValueError;

/// How long the window-open temperature is held after a window opening is
/// detected, in minutes (0-60, 5-minute steps).
///
/// # Examples
///
/// ```
/// use eq3bt_lib::types::WindowOpenDuration;
///
/// let duration = WindowOpenDuration::from_minutes(15).unwrap();
/// assert_eq!(duration.minutes(), 15);
///
/// assert!(WindowOpenDuration::from_minutes(7).is_err());
/// assert!(WindowOpenDuration::from_minutes(65).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct WindowOpenDuration(u8);

impl WindowOpenDuration {
    /// Maximum duration in minutes.
    pub const MAX_MINUTES: u8 = 60;

    /// Step in minutes.
    pub const STEP_MINUTES: u8 = 5;

    /// Creates a duration from minutes.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value exceeds 60 and
    /// `ValueError::InvalidStep` if it is not a multiple of 5.
    pub fn from_minutes(minutes: u8) -> Result<Self, ValueError> {
        if minutes > Self::MAX_MINUTES {
            return Err(ValueError::OutOfRange {
                min: 0.0,
                max: f32::from(Self::MAX_MINUTES),
                actual: f32::from(minutes),
            });
        }
        if minutes % Self::STEP_MINUTES != 0 {
            return Err(ValueError::InvalidStep {
                step: f32::from(Self::STEP_MINUTES),
                actual: f32::from(minutes),
            });
        }
        Ok(Self(minutes))
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.0) * 60)
    }
}

impl fmt::Display for WindowOpenDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl TryFrom<u8> for WindowOpenDuration {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_minutes(value)
    }
}

impl From<WindowOpenDuration> for u8 {
    fn from(value: WindowOpenDuration) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values() {
        for v in [0, 5, 15, 60] {
            assert_eq!(WindowOpenDuration::from_minutes(v).unwrap().minutes(), v);
        }
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            WindowOpenDuration::from_minutes(65),
            Err(ValueError::OutOfRange { .. })
        ));
        assert!(matches!(
            WindowOpenDuration::from_minutes(12),
            Err(ValueError::InvalidStep { .. })
        ));
    }

    #[test]
    fn as_duration() {
        let d = WindowOpenDuration::from_minutes(15).unwrap();
        assert_eq!(d.as_duration(), Duration::from_secs(900));
        assert_eq!(d.to_string(), "15m");
    }
}
