// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Devices addressable on an elsock appliance.

use std::fmt;

/// A switch on the appliance, or the `All` group addressing every switch.
///
/// Each device carries a one-character wire id used in the request query.
/// The ten physical devices are ordered; response decoding maps status
/// tokens onto them positionally in this order.
///
/// # Examples
///
/// ```
/// use elsock_lib::types::Device;
///
/// assert_eq!(Device::All.wire_id(), 'A');
/// assert!(Device::All.is_group());
/// assert_eq!(Device::Device0.wire_id(), 'a');
/// assert_eq!(Device::physical_devices().len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// All devices (group).
    All,
    /// Device #0.
    Device0,
    /// Device #1.
    Device1,
    /// Device #2.
    Device2,
    /// Device #3.
    Device3,
    /// Device #4.
    Device4,
    /// Device #5.
    Device5,
    /// Device #6.
    Device6,
    /// Device #7.
    Device7,
    /// Device #8.
    Device8,
    /// Device #9.
    Device9,
}

impl Device {
    /// Returns the one-character id used on the wire.
    #[must_use]
    pub const fn wire_id(&self) -> char {
        match self {
            Self::All => 'A',
            Self::Device0 => 'a',
            Self::Device1 => 'b',
            Self::Device2 => 'c',
            Self::Device3 => 'd',
            Self::Device4 => 'e',
            Self::Device5 => 'f',
            Self::Device6 => 'g',
            Self::Device7 => 'h',
            Self::Device8 => 'i',
            Self::Device9 => 'j',
        }
    }

    /// Returns whether this is a group value rather than a physical device.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns the physical (non-group) devices in declaration order.
    ///
    /// This order is the positional order used when decoding a status
    /// response.
    #[must_use]
    pub const fn physical_devices() -> [Self; 10] {
        [
            Self::Device0,
            Self::Device1,
            Self::Device2,
            Self::Device3,
            Self::Device4,
            Self::Device5,
            Self::Device6,
            Self::Device7,
            Self::Device8,
            Self::Device9,
        ]
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            device => write!(f, "device {}", *device as usize - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids() {
        assert_eq!(Device::All.wire_id(), 'A');
        assert_eq!(Device::Device0.wire_id(), 'a');
        assert_eq!(Device::Device9.wire_id(), 'j');
    }

    #[test]
    fn only_all_is_a_group() {
        assert!(Device::All.is_group());
        for device in Device::physical_devices() {
            assert!(!device.is_group());
        }
    }

    #[test]
    fn physical_devices_excludes_all_and_keeps_order() {
        let devices = Device::physical_devices();
        assert_eq!(devices.len(), 10);
        assert!(!devices.contains(&Device::All));
        assert_eq!(devices[0], Device::Device0);
        assert_eq!(devices[9], Device::Device9);
        // Wire ids run a..j in the same order.
        let ids: String = devices.iter().map(Device::wire_id).collect();
        assert_eq!(ids, "abcdefghij");
    }

    #[test]
    fn display() {
        assert_eq!(Device::All.to_string(), "all");
        assert_eq!(Device::Device0.to_string(), "device 0");
        assert_eq!(Device::Device9.to_string(), "device 9");
    }
}
