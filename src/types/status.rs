// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch status values understood by elsock appliances.

use std::fmt;

/// The status of a switch, or the status request itself.
///
/// Each status carries a one-character wire id used in the request query.
///
/// # Examples
///
/// ```
/// use elsock_lib::types::Status;
///
/// assert_eq!(Status::Off.wire_id(), '0');
/// assert_eq!(Status::On.wire_id(), '1');
/// assert_eq!(Status::Toggle.wire_id(), 't');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Switch is (or should be turned) off.
    Off,
    /// Switch is (or should be turned) on.
    On,
    /// Toggle the current switch state.
    Toggle,
    /// Request the current status.
    GetStatus,
    /// Status not known, e.g. not reported by the appliance.
    Unknown,
}

impl Status {
    /// Returns the one-character id used on the wire.
    #[must_use]
    pub const fn wire_id(&self) -> char {
        match self {
            Self::Off => '0',
            Self::On => '1',
            Self::Toggle => 't',
            Self::GetStatus => 's',
            Self::Unknown => '-',
        }
    }

    /// Returns the symbolic name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
            Self::Toggle => "TOGGLE",
            Self::GetStatus => "GET_STATUS",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
