// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the elsock library.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed: connection refused, connect timeout, or an I/O
    /// error while reading the response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The protocol/address combination does not form a valid request URL.
    ///
    /// Raised before any network I/O happens, distinct from [`Error::Http`].
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
