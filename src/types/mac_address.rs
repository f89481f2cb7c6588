// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bluetooth device address type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Bluetooth MAC address of a thermostat.
///
/// Parsing accepts colon- or dash-separated pairs as well as twelve bare hex
/// digits, in any case. The canonical display form is lowercase and
/// colon-separated; the radio lookup uses the uppercase form.
///
/// # Examples
///
/// ```
/// use eq3bt_lib::types::MacAddress;
///
/// let mac: MacAddress = "00-1A-22-0A-91-CF".parse().unwrap();
/// assert_eq!(mac.to_string(), "00:1a:22:0a:91:cf");
/// assert_eq!(mac.to_uppercase(), "00:1A:22:0A:91:CF");
///
/// assert!("00:1A:22:0A:91".parse::<MacAddress>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Creates an address from raw octets.
    #[must_use]
    pub const fn from_octets(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Returns the raw octets.
    #[must_use]
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Returns the uppercase colon-separated form.
    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl FromStr for MacAddress {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidMacAddress(s.to_string());

        let trimmed = s.trim();
        let digits: String = if trimmed.len() == 12 {
            trimmed.to_string()
        } else if trimmed.len() == 17 {
            let separator = trimmed.as_bytes()[2];
            if separator != b':' && separator != b'-' {
                return Err(invalid());
            }
            let parts: Vec<&str> = trimmed.split(char::from(separator)).collect();
            if parts.len() != 6 || parts.iter().any(|p| p.len() != 2) {
                return Err(invalid());
            }
            parts.concat()
        } else {
            return Err(invalid());
        };

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }

        Ok(Self(octets))
    }
}

impl TryFrom<String> for MacAddress {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MacAddress> for String {
    fn from(value: MacAddress) -> Self {
        value.to_string()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({self})")
    }
}
