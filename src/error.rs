// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `eq3bt` library.
//!
//! This module provides the error hierarchy used across the library: value
//! validation, option parsing, Bluetooth transport failures, and the setup
//! failure raised when a thermostat cannot be found on the radio.

use std::time::Duration;

use thiserror::Error;

use crate::types::MacAddress;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The thermostat could not be resolved to a reachable radio handle.
    ///
    /// This is a setup failure: nothing has been started and the caller is
    /// expected to retry the whole setup later.
    #[error("device {address} could not be found")]
    NotReady {
        /// The address that failed to resolve.
        address: MacAddress,
    },

    /// Error reported by the device session.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing configuration options.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns `true` if this is the "device not found yet" setup failure.
    #[must_use]
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }
}

/// Failure raised by a [`DeviceSession`](crate::session::DeviceSession).
///
/// Every session operation reports failures with this single type. The
/// supervisor never inspects the variant to choose a recovery path; it asks
/// the session whether the link is still up instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The operation did not complete in time.
    #[error("operation timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// The link to the thermostat is down.
    #[error("device is not connected")]
    NotConnected,

    /// Establishing the link failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The thermostat answered with something unexpected.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
        /// The actual value that was provided.
        actual: f32,
    },

    /// A value does not sit on the device's step grid.
    #[error("value {actual} is not a multiple of {step}")]
    InvalidStep {
        /// The required step.
        step: f32,
        /// The actual value that was provided.
        actual: f32,
    },

    /// A MAC address could not be parsed.
    #[error("invalid MAC address: {0}")]
    InvalidMacAddress(String),

    /// A timing interval was zero.
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}

/// Errors related to parsing configuration options.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An option was present but not usable.
    #[error("invalid {field}: {message}")]
    InvalidValue {
        /// The option that failed validation.
        field: String,
        /// Description of the failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
