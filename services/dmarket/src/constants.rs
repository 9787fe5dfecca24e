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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Headers used by the dmarket signing scheme.
pub const X_API_KEY: &str = "x-api-key";
pub const X_REQUEST_SIGN: &str = "x-request-sign";
pub const X_SIGN_DATE: &str = "x-sign-date";

/// Prefix of the `X-Request-Sign` header value, followed by the hex signature.
pub const SIGNATURE_PREFIX: &str = "dmar ed25519 ";

/// Root of the production API.
pub const DMARKET_API_ENDPOINT: &str = "https://api.dmarket.com";

// Env values used by dmarket credential providers.
pub const DMARKET_PUBLIC_KEY: &str = "DMARKET_PUBLIC_KEY";
pub const DMARKET_SECRET_KEY: &str = "DMARKET_SECRET_KEY";

/// AsciiSet for query keys and values.
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - Space is encoded as `%20`, never `+`.
pub static DMARKET_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
