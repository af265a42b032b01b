// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for elsock appliance control.
//!
//! The elsock wire protocol is built from closed vocabularies; each value
//! carries the single-character id it is written as on the wire.
//!
//! # Types
//!
//! - [`Device`] - The `All` group plus the ten physical switches (`A`, `a`..`j`)
//! - [`Status`] - Off/On/Toggle/GetStatus/Unknown (`0`, `1`, `t`, `s`, `-`)
//! - [`Protocol`] - Transport scheme used to reach the appliance

mod device;
mod protocol;
mod status;

pub use device::Device;
pub use protocol::Protocol;
pub use status::Status;
