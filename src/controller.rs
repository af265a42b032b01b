// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller for elsock appliances.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::data::ElsockData;
use crate::error::{Error, Result};
use crate::types::{Device, Protocol, Status};
use crate::wire;

/// Provides access to one elsock appliance.
///
/// Each call performs a single synchronous request/response cycle; there is
/// no retry or recovery. The configured timeout bounds connection
/// establishment only - reading the response body is unbounded. A controller
/// holds no shared state; for concurrent use, construct independent
/// instances.
///
/// # Examples
///
/// ```no_run
/// use elsock_lib::{Device, ElsockController, Protocol};
///
/// # async fn example() -> elsock_lib::Result<()> {
/// let controller = ElsockController::new(Protocol::Http, "192.168.1.50")?;
/// controller.send_toggle(Device::Device3).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ElsockController {
    protocol: Protocol,
    address: String,
    connect_timeout: Duration,
    client: Client,
}

impl ElsockController {
    /// Default connect timeout.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

    /// Creates a controller for the appliance at `address` (`host` or
    /// `host:port`), using the default connect timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be created.
    pub fn new(protocol: Protocol, address: impl Into<String>) -> Result<Self> {
        Self::with_timeout(protocol, address, Self::DEFAULT_CONNECT_TIMEOUT)
    }

    /// Creates a controller with a custom connect timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be created.
    pub fn with_timeout(
        protocol: Protocol,
        address: impl Into<String>,
        connect_timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            protocol,
            address: address.into(),
            connect_timeout,
            client: build_client(connect_timeout)?,
        })
    }

    /// Returns the protocol used for the connection.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns the host address used for the connection.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the timeout used for connection establishment.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Sets the timeout used for connection establishment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be rebuilt; the
    /// previous timeout stays in effect in that case.
    pub fn set_connect_timeout(&mut self, connect_timeout: Duration) -> Result<()> {
        self.client = build_client(connect_timeout)?;
        self.connect_timeout = connect_timeout;
        Ok(())
    }

    /// Changes the status of `device` to `status`.
    ///
    /// This method does not return a response; to receive status information
    /// use [`get_status`](Self::get_status) instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on a network failure or timeout, or
    /// [`Error::InvalidAddress`] if the configured address does not form a
    /// valid URL.
    pub async fn send_command(&self, device: Device, status: Status) -> Result<()> {
        self.execute(&ElsockData::single(device, status)).await?;
        Ok(())
    }

    /// Toggles `device`.
    ///
    /// # Errors
    ///
    /// Same as [`send_command`](Self::send_command).
    pub async fn send_toggle(&self, device: Device) -> Result<()> {
        self.send_command(device, Status::Toggle).await
    }

    /// Toggles all devices.
    ///
    /// # Errors
    ///
    /// Same as [`send_command`](Self::send_command).
    pub async fn send_toggle_all(&self) -> Result<()> {
        self.send_command(Device::All, Status::Toggle).await
    }

    /// Returns the status of all physical devices.
    ///
    /// Returns `Ok(None)` when the appliance answers with an empty or
    /// whitespace-only body, its "no data" signal.
    ///
    /// # Errors
    ///
    /// Same as [`send_command`](Self::send_command).
    pub async fn get_status(&self) -> Result<Option<ElsockData>> {
        self.execute(&ElsockData::single(Device::All, Status::GetStatus))
            .await
    }

    /// Executes one request/response cycle for `data`.
    async fn execute(&self, data: &ElsockData) -> Result<Option<ElsockData>> {
        let url = self.request_url(data)?;

        tracing::debug!(url = %url, "sending elsock query");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        tracing::debug!(body = %body, "received elsock response");

        Ok(wire::decode_response(&body))
    }

    /// Builds the request URL for `data`.
    fn request_url(&self, data: &ElsockData) -> Result<Url> {
        let raw = format!(
            "{}://{}{}",
            self.protocol.scheme(),
            self.address,
            wire::encode_query(data)
        );
        Url::parse(&raw).map_err(|err| Error::InvalidAddress(format!("{raw}: {err}")))
    }
}

fn build_client(connect_timeout: Duration) -> Result<Client> {
    // Only connection establishment is bounded; reading the body is not.
    Client::builder()
        .connect_timeout(connect_timeout)
        .build()
        .map_err(Error::from)
}
