// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Elsock Lib - A Rust library to control elsock switch appliances.
//!
//! Elsock appliances are small HTTP switch controllers with up to ten
//! switchable devices. Commands are encoded as `L<device>=<status>` pairs in
//! a `/q?` query; status responses come back as a comma-delimited `0`/`1`
//! token stream mapped positionally onto the physical devices.
//!
//! # Quick Start
//!
//! ```no_run
//! use elsock_lib::{Device, ElsockController, Protocol};
//!
//! #[tokio::main]
//! async fn main() -> elsock_lib::Result<()> {
//!     let controller = ElsockController::new(Protocol::Http, "192.168.1.50")?;
//!
//!     // Toggle a single device, then all of them.
//!     controller.send_toggle(Device::Device3).await?;
//!     controller.send_toggle_all().await?;
//!
//!     // Query every physical device; `None` means the appliance sent no data.
//!     if let Some(status) = controller.get_status().await? {
//!         for element in &status {
//!             println!("{}: {}", element.device(), element.status());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Timeout
//!
//! The timeout bounds connection establishment only; reading the response is
//! unbounded.
//!
//! ```no_run
//! use std::time::Duration;
//! use elsock_lib::{ElsockController, Protocol};
//!
//! # fn main() -> elsock_lib::Result<()> {
//! let controller = ElsockController::with_timeout(
//!     Protocol::Http,
//!     "elsock.local:8080",
//!     Duration::from_secs(2),
//! )?;
//! # Ok(())
//! # }
//! ```

mod controller;
mod data;
pub mod error;
pub mod types;
pub mod wire;

pub use controller::ElsockController;
pub use data::{ElsockData, ElsockElement};
pub use error::{Error, Result};
pub use types::{Device, Protocol, Status};
