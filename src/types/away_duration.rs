// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Away-mode duration type.

use std::fmt;
use std::time::Duration;

use crate::error::ValueError;

/// How long away mode lasts once it is switched on, in hours
/// (0.5-1000000, half-hour steps).
///
/// # Examples
///
/// ```
/// use eq3bt_lib::types::AwayDuration;
///
/// let duration = AwayDuration::from_hours(12.5).unwrap();
/// assert_eq!(duration.hours(), 12.5);
/// assert_eq!(duration.to_string(), "12.5h");
///
/// assert!(AwayDuration::from_hours(0.0).is_err());
/// assert!(AwayDuration::from_hours(1.25).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct AwayDuration(u32);

impl AwayDuration {
    /// Shortest duration in hours.
    pub const MIN_HOURS: f64 = 0.5;

    /// Longest duration in hours.
    pub const MAX_HOURS: f64 = 1_000_000.0;

    /// Creates a duration from hours.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside
    /// [0.5, 1000000] and `ValueError::InvalidStep` if it is not a multiple
    /// of 0.5.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_hours(hours: f64) -> Result<Self, ValueError> {
        if !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN_HOURS as f32,
                max: Self::MAX_HOURS as f32,
                actual: hours as f32,
            });
        }

        let half_hours = hours * 2.0;
        if half_hours.fract() != 0.0 {
            return Err(ValueError::InvalidStep {
                step: 0.5,
                actual: hours as f32,
            });
        }

        Ok(Self(half_hours as u32))
    }

    /// Returns the duration in hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Returns the duration as a [`Duration`].
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.0) * 30 * 60)
    }
}

impl fmt::Display for AwayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

impl TryFrom<f64> for AwayDuration {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_hours(value)
    }
}

impl From<AwayDuration> for f64 {
    fn from(value: AwayDuration) -> Self {
        value.hours()
    }
}
