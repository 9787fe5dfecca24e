// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Canonical forms of a request payload.

use std::fmt::Write;

use dmsign_core::{Error, Result};
use percent_encoding::utf8_percent_encode;
use serde_json::Value;

use crate::constants::DMARKET_QUERY_ENCODE_SET;

/// Payload is an insertion ordered map of request parameters.
///
/// The order is part of the signature, so it must never be sorted or hashed.
pub type Payload = serde_json::Map<String, Value>;

/// Render payload as a query string, without the leading `?`.
///
/// ```text
/// {gameId: "a8db", limit: 1} => "gameId=a8db&limit=1"
/// ```
///
/// Only strings, numbers, bools and null are allowed; null renders as an
/// empty value.
pub fn canonical_query(payload: &Payload) -> Result<String> {
    let mut s = String::with_capacity(16);

    for (idx, (k, v)) in payload.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }

        let value = match v {
            Value::String(v) => v.clone(),
            Value::Number(v) => v.to_string(),
            Value::Bool(v) => v.to_string(),
            Value::Null => String::new(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::request_invalid(format!(
                    "query parameter {k} must be a primitive value"
                )))
            }
        };

        write!(
            s,
            "{}={}",
            utf8_percent_encode(k, &DMARKET_QUERY_ENCODE_SET),
            utf8_percent_encode(&value, &DMARKET_QUERY_ENCODE_SET)
        )?;
    }

    Ok(s)
}

/// Render payload as a compact json object.
pub fn canonical_body(payload: &Payload) -> Result<String> {
    Ok(serde_json::to_string(payload)?)
}
