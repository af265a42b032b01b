// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory model of device/status collections.
//!
//! An [`ElsockData`] describes the payload of one request (which devices to
//! address, with which status) or the decoded content of one response (the
//! status reported for every physical device). Insertion order is
//! significant: it determines the order pairs are written to the wire and
//! the positional order response tokens are mapped back onto devices.

use std::slice;

use crate::types::{Device, Status};

/// One device paired with its status.
///
/// The device is fixed at construction; the status may be updated in place,
/// which is how response decoding populates a collection element by element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElsockElement {
    device: Device,
    status: Status,
}

impl ElsockElement {
    /// Creates a new element.
    #[must_use]
    pub const fn new(device: Device, status: Status) -> Self {
        Self { device, status }
    }

    /// Returns the device.
    #[must_use]
    pub const fn device(&self) -> Device {
        self.device
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Sets the status.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

/// An ordered collection of [`ElsockElement`]s.
///
/// Not limited to the physical devices, and device uniqueness is not
/// enforced; [`ElsockData::find`] returns the first match only. Callers
/// relying on positional response decoding should keep devices unique.
///
/// # Examples
///
/// ```
/// use elsock_lib::{Device, ElsockData, Status};
///
/// let mut data = ElsockData::new();
/// data.insert(Device::Device0, Status::On);
/// data.insert(Device::Device1, Status::Off);
///
/// assert_eq!(data.len(), 2);
/// assert_eq!(data.status(Device::Device0), Status::On);
/// assert_eq!(data.status(Device::Device9), Status::Unknown);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElsockData {
    elements: Vec<ElsockElement>,
}

impl ElsockData {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a collection holding a single device/status pair.
    #[must_use]
    pub fn single(device: Device, status: Status) -> Self {
        let mut data = Self::new();
        data.insert(device, status);
        data
    }

    /// Creates a collection with one element per device, all sharing the
    /// same initial status.
    #[must_use]
    pub fn with_status(devices: &[Device], status: Status) -> Self {
        Self {
            elements: devices
                .iter()
                .map(|&device| ElsockElement::new(device, status))
                .collect(),
        }
    }

    /// Appends an element consisting of the given device and status.
    pub fn insert(&mut self, device: Device, status: Status) {
        self.insert_element(ElsockElement::new(device, status));
    }

    /// Appends the element.
    pub fn insert_element(&mut self, element: ElsockElement) {
        self.elements.push(element);
    }

    /// Returns the element at `pos`, or `None` if `pos` is out of range.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&ElsockElement> {
        self.elements.get(pos)
    }

    /// Returns a mutable reference to the element at `pos`.
    #[must_use]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut ElsockElement> {
        self.elements.get_mut(pos)
    }

    /// Returns the first element for `device`, or `None` if absent.
    #[must_use]
    pub fn find(&self, device: Device) -> Option<&ElsockElement> {
        self.elements
            .iter()
            .find(|element| element.device() == device)
    }

    /// Returns the status of `device`, or [`Status::Unknown`] if the device
    /// has no element in this collection.
    #[must_use]
    pub fn status(&self, device: Device) -> Status {
        self.find(device)
            .map_or(Status::Unknown, ElsockElement::status)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the collection contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice, in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[ElsockElement] {
        &self.elements
    }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, ElsockElement> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a ElsockData {
    type Item = &'a ElsockElement;
    type IntoIter = slice::Iter<'a, ElsockElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let data = ElsockData::new();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
    }

    #[test]
    fn single_holds_one_pair() {
        let data = ElsockData::single(Device::All, Status::Toggle);
        assert_eq!(data.len(), 1);
        let element = data.get(0).unwrap();
        assert_eq!(element.device(), Device::All);
        assert_eq!(element.status(), Status::Toggle);
    }

    #[test]
    fn with_status_seeds_every_device() {
        let data = ElsockData::with_status(&Device::physical_devices(), Status::Unknown);
        assert_eq!(data.len(), 10);
        for device in Device::physical_devices() {
            assert_eq!(data.status(device), Status::Unknown);
        }
    }

    #[test]
    fn insert_preserves_order() {
        let mut data = ElsockData::new();
        data.insert(Device::Device2, Status::On);
        data.insert(Device::Device0, Status::Off);
        assert_eq!(data.get(0).unwrap().device(), Device::Device2);
        assert_eq!(data.get(1).unwrap().device(), Device::Device0);
    }

    #[test]
    fn get_out_of_range() {
        let data = ElsockData::single(Device::Device0, Status::On);
        assert!(data.get(1).is_none());
    }

    #[test]
    fn find_returns_first_match() {
        let mut data = ElsockData::new();
        data.insert(Device::Device1, Status::On);
        data.insert(Device::Device1, Status::Off);
        assert_eq!(data.find(Device::Device1).unwrap().status(), Status::On);
    }

    #[test]
    fn status_defaults_to_unknown_for_absent_device() {
        let mut data = ElsockData::new();
        data.insert(Device::Device0, Status::On);
        assert_eq!(data.status(Device::Device0), Status::On);
        assert_eq!(data.status(Device::Device1), Status::Unknown);
    }

    #[test]
    fn set_status_updates_in_place() {
        let mut data = ElsockData::single(Device::Device4, Status::Unknown);
        data.get_mut(0).unwrap().set_status(Status::On);
        assert_eq!(data.status(Device::Device4), Status::On);
    }

    #[test]
    fn equality_is_order_and_value_sensitive() {
        let mut a = ElsockData::new();
        a.insert(Device::Device0, Status::On);
        a.insert(Device::Device1, Status::Off);

        let mut b = ElsockData::new();
        b.insert(Device::Device0, Status::On);
        b.insert(Device::Device1, Status::Off);
        assert_eq!(a, b);

        let mut c = ElsockData::new();
        c.insert(Device::Device1, Status::Off);
        c.insert(Device::Device0, Status::On);
        assert_ne!(a, c);
    }
}
