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

//! Hex encoding utils shared by all signers.

use crate::Error;
use crate::Result;

/// Lowercase hex encode.
pub fn hex_encode(content: &[u8]) -> String {
    hex::encode(content)
}

/// Hex decode.
///
/// Both lowercase and uppercase digits are accepted. Odd length input or
/// non-hex characters fail with `InvalidKeyEncoding`.
pub fn hex_decode(content: &str) -> Result<Vec<u8>> {
    hex::decode(content)
        .map_err(|e| Error::invalid_key_encoding(format!("hex decode failed: {e}")).with_source(e))
}

/// Hex decode into a fixed size array.
///
/// Fails with `InvalidKeyEncoding` if the decoded length is not `N`.
pub fn hex_decode_array<const N: usize>(content: &str) -> Result<[u8; N]> {
    let bs = hex_decode(content)?;
    let len = bs.len();
    bs.try_into().map_err(|_| {
        Error::invalid_key_encoding(format!("expected {N} bytes after hex decode, got {len}"))
    })
}
