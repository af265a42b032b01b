// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Codec for the elsock wire format.
//!
//! Requests are encoded as a query path of concatenated `L<device>=<status>`
//! pairs. The appliance's query grammar does not use `&` between pairs;
//! consecutive pairs are written back to back.
//!
//! Responses are a comma-delimited token stream. The tokens `0` and `1` map
//! positionally onto [`Device::physical_devices`] in declaration order;
//! anything else is skipped without consuming a position.

use crate::data::ElsockData;
use crate::types::{Device, Status};

/// Path prefix of every elsock query.
const QUERY_PREFIX: &str = "/q?";

/// Token stream delimiter in status responses.
const RESPONSE_DELIMITER: char = ',';

/// Encodes the device/status pairs of `data` into the request query path.
///
/// Pairs are emitted in insertion order, each as `L<device id>=<status id>`
/// with no separator in between.
///
/// # Examples
///
/// ```
/// use elsock_lib::wire::encode_query;
/// use elsock_lib::{Device, ElsockData, Status};
///
/// let mut data = ElsockData::new();
/// data.insert(Device::Device0, Status::Toggle);
/// data.insert(Device::Device1, Status::On);
///
/// assert_eq!(encode_query(&data), "/q?La=tLb=1");
/// ```
#[must_use]
pub fn encode_query(data: &ElsockData) -> String {
    let mut query = String::with_capacity(QUERY_PREFIX.len() + data.len() * 4);
    query.push_str(QUERY_PREFIX);

    for element in data {
        query.push('L');
        query.push(element.device().wire_id());
        query.push('=');
        query.push(element.status().wire_id());
    }

    query
}

/// Decodes a raw status response body.
///
/// Returns `None` for an empty or whitespace-only body, the appliance's
/// "no data" signal. Otherwise returns a collection covering every physical
/// device: positions matched by a recognized token carry the decoded status,
/// all others stay [`Status::Unknown`]. Recognized tokens beyond the last
/// physical device are ignored.
///
/// # Examples
///
/// ```
/// use elsock_lib::wire::decode_response;
/// use elsock_lib::{Device, Status};
///
/// let data = decode_response("1,0").unwrap();
/// assert_eq!(data.status(Device::Device0), Status::On);
/// assert_eq!(data.status(Device::Device1), Status::Off);
/// assert_eq!(data.status(Device::Device2), Status::Unknown);
///
/// assert!(decode_response("  \n").is_none());
/// ```
#[must_use]
pub fn decode_response(body: &str) -> Option<ElsockData> {
    if body.trim().is_empty() {
        return None;
    }

    let mut result = ElsockData::with_status(&Device::physical_devices(), Status::Unknown);
    let mut pos = 0;

    for token in body.split(RESPONSE_DELIMITER) {
        let Some(element) = result.get_mut(pos) else {
            break;
        };

        match token.trim() {
            "0" => {
                element.set_status(Status::Off);
                pos += 1;
            }
            "1" => {
                element.set_status(Status::On);
                pos += 1;
            }
            _ => {}
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_single_pair() {
        let data = ElsockData::single(Device::All, Status::Toggle);
        assert_eq!(encode_query(&data), "/q?LA=t");
    }

    #[test]
    fn encode_status_request() {
        let data = ElsockData::single(Device::All, Status::GetStatus);
        assert_eq!(encode_query(&data), "/q?LA=s");
    }

    #[test]
    fn encode_empty_collection() {
        assert_eq!(encode_query(&ElsockData::new()), "/q?");
    }

    #[test]
    fn encode_emits_all_pairs_in_order() {
        let mut data = ElsockData::new();
        data.insert(Device::Device0, Status::Off);
        data.insert(Device::Device3, Status::On);
        data.insert(Device::Device9, Status::Toggle);
        assert_eq!(encode_query(&data), "/q?La=0Ld=1Lj=t");
    }

    #[test]
    fn encode_round_trips_textually() {
        // Scanning the query back yields the same pairs in the same order.
        let mut data = ElsockData::new();
        for (index, device) in Device::physical_devices().into_iter().enumerate() {
            let status = if index % 2 == 0 { Status::On } else { Status::Off };
            data.insert(device, status);
        }

        let query = encode_query(&data);
        let pairs: Vec<&str> = query
            .strip_prefix("/q?")
            .unwrap()
            .split('L')
            .filter(|pair| !pair.is_empty())
            .collect();

        assert_eq!(pairs.len(), data.len());
        for (pair, element) in pairs.iter().zip(&data) {
            let expected = format!(
                "{}={}",
                element.device().wire_id(),
                element.status().wire_id()
            );
            assert_eq!(*pair, expected);
        }
    }

    #[test]
    fn decode_empty_body_is_no_data() {
        assert!(decode_response("").is_none());
        assert!(decode_response(" ").is_none());
        assert!(decode_response(" \t\r\n ").is_none());
    }

    #[test]
    fn decode_full_status_line() {
        let data = decode_response("0,1,0,1,0,1,0,1,0,1").unwrap();
        let expected = [
            (Device::Device0, Status::Off),
            (Device::Device1, Status::On),
            (Device::Device2, Status::Off),
            (Device::Device3, Status::On),
            (Device::Device4, Status::Off),
            (Device::Device5, Status::On),
            (Device::Device6, Status::Off),
            (Device::Device7, Status::On),
            (Device::Device8, Status::Off),
            (Device::Device9, Status::On),
        ];
        for (device, status) in expected {
            assert_eq!(data.status(device), status);
        }
    }

    #[test]
    fn decode_skips_unrecognized_tokens_without_advancing() {
        let data = decode_response("1,x,0").unwrap();
        assert_eq!(data.status(Device::Device0), Status::On);
        assert_eq!(data.status(Device::Device1), Status::Off);
        for device in &Device::physical_devices()[2..] {
            assert_eq!(data.status(*device), Status::Unknown);
        }
    }

    #[test]
    fn decode_trims_token_whitespace() {
        let data = decode_response(" 1 , 0 ").unwrap();
        assert_eq!(data.status(Device::Device0), Status::On);
        assert_eq!(data.status(Device::Device1), Status::Off);
    }

    #[test]
    fn decode_short_response_leaves_tail_unknown() {
        let data = decode_response("1,1").unwrap();
        assert_eq!(data.status(Device::Device0), Status::On);
        assert_eq!(data.status(Device::Device1), Status::On);
        assert_eq!(data.status(Device::Device2), Status::Unknown);
        assert_eq!(data.status(Device::Device9), Status::Unknown);
    }

    #[test]
    fn decode_ignores_tokens_past_the_last_device() {
        let data = decode_response("0,0,0,0,0,0,0,0,0,0,1,1").unwrap();
        assert_eq!(data.len(), 10);
        for device in Device::physical_devices() {
            assert_eq!(data.status(device), Status::Off);
        }
    }

    #[test]
    fn decode_always_covers_every_physical_device() {
        let data = decode_response("garbage").unwrap();
        assert_eq!(data.len(), 10);
        for device in Device::physical_devices() {
            assert_eq!(data.status(device), Status::Unknown);
        }
    }
}
