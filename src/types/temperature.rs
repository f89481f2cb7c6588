// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature types for setpoints and sensor offsets.
//!
//! The thermostat works on a 0.5 °C grid. Both types store the value as a
//! count of half degrees so that equality and ordering are exact.

use std::fmt;

use crate::error::ValueError;

/// Grid step used by the thermostat, in degrees Celsius.
const STEP: f32 = 0.5;

/// Converts a Celsius value to half degrees, checking range and grid.
#[allow(clippy::cast_possible_truncation)]
fn to_half_degrees(celsius: f32, min: f32, max: f32) -> Result<i16, ValueError> {
    if !(min..=max).contains(&celsius) {
        return Err(ValueError::OutOfRange {
            min,
            max,
            actual: celsius,
        });
    }

    let doubled = celsius * 2.0;
    if doubled.fract() != 0.0 {
        return Err(ValueError::InvalidStep {
            step: STEP,
            actual: celsius,
        });
    }

    Ok(doubled as i16)
}

/// A thermostat temperature in degrees Celsius (4.5-30.0, 0.5 steps).
///
/// The two ends of the range are special: 4.5 °C means the valve is closed
/// ("off") and 30.0 °C means it is fully open ("on"). Everything in between
/// is a regular setpoint.
///
/// # Examples
///
/// ```
/// use eq3bt_lib::types::Temperature;
///
/// let t = Temperature::new(21.5).unwrap();
/// assert_eq!(t.celsius(), 21.5);
///
/// assert!(Temperature::new(21.3).is_err());
/// assert!(Temperature::OFF.is_off());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "f32", into = "f32")]
pub struct Temperature(u8);

impl Temperature {
    /// Lowest representable value; the valve is closed.
    pub const OFF: Self = Self(9);

    /// Highest representable value; the valve is fully open.
    pub const ON: Self = Self(60);

    /// Lowest regular setpoint (5.0 °C).
    pub const MIN_SETPOINT: Self = Self(10);

    /// Highest regular setpoint (29.5 °C).
    pub const MAX_SETPOINT: Self = Self(59);

    /// Creates a temperature from degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [4.5, 30.0]
    /// and `ValueError::InvalidStep` if it is not a multiple of 0.5.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn new(celsius: f32) -> Result<Self, ValueError> {
        let half = to_half_degrees(celsius, Self::OFF.celsius(), Self::ON.celsius())?;
        Ok(Self(half as u8))
    }

    /// Creates a regular setpoint (5.0-29.5 °C).
    ///
    /// Preset temperatures must be regular setpoints; the off/on markers are
    /// only meaningful as a target temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [5.0, 29.5]
    /// and `ValueError::InvalidStep` if it is not a multiple of 0.5.
    pub fn setpoint(celsius: f32) -> Result<Self, ValueError> {
        let min = Self::MIN_SETPOINT.celsius();
        let max = Self::MAX_SETPOINT.celsius();
        if !(min..=max).contains(&celsius) {
            return Err(ValueError::OutOfRange {
                min,
                max,
                actual: celsius,
            });
        }
        Self::new(celsius)
    }

    /// Returns the value in degrees Celsius.
    #[must_use]
    pub fn celsius(&self) -> f32 {
        f32::from(self.0) / 2.0
    }

    /// Returns `true` for the "valve closed" marker.
    #[must_use]
    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }

    /// Returns `true` for the "valve fully open" marker.
    #[must_use]
    pub fn is_on(&self) -> bool {
        *self == Self::ON
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.celsius())
    }
}

impl TryFrom<f32> for Temperature {
    type Error = ValueError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f32 {
    fn from(value: Temperature) -> Self {
        value.celsius()
    }
}

/// Correction applied to the thermostat's internal sensor (-3.5-3.5 °C).
///
/// # Examples
///
/// ```
/// use eq3bt_lib::types::TemperatureOffset;
///
/// let offset = TemperatureOffset::new(-1.5).unwrap();
/// assert_eq!(offset.celsius(), -1.5);
/// assert!(TemperatureOffset::new(4.0).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "f32", into = "f32")]
pub struct TemperatureOffset(i8);

impl TemperatureOffset {
    /// Smallest allowed offset.
    pub const MIN: f32 = -3.5;

    /// Largest allowed offset.
    pub const MAX: f32 = 3.5;

    /// Creates an offset from degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is outside [-3.5, 3.5]
    /// and `ValueError::InvalidStep` if it is not a multiple of 0.5.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(celsius: f32) -> Result<Self, ValueError> {
        let half = to_half_degrees(celsius, Self::MIN, Self::MAX)?;
        Ok(Self(half as i8))
    }

    /// Returns the offset in degrees Celsius.
    #[must_use]
    pub fn celsius(&self) -> f32 {
        f32::from(self.0) / 2.0
    }
}

impl fmt::Display for TemperatureOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.1}°C", self.celsius())
    }
}

impl TryFrom<f32> for TemperatureOffset {
    type Error = ValueError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemperatureOffset> for f32 {
    fn from(value: TemperatureOffset) -> Self {
        value.celsius()
    }
}
