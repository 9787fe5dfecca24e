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

//! Signer and client for the dmarket trading API.
//!
//! ```
//! use dmsign_core::time::from_unix_timestamp;
//! use dmsign_dmarket::{Credential, RequestSigner};
//! use http::Method;
//! use serde_json::json;
//!
//! # fn main() -> dmsign_core::Result<()> {
//! let signer = RequestSigner::new(&Credential::new(
//!     "17e78b6022d5470402674c551ac8ad6d572deee3d753a1c9eda25394fee6e528",
//!     "1ba46e6a980c6fa4767ff03d8e33ff158f21f980945ca2eb37eeb6eaeb1d41d0",
//! ))?;
//!
//! let payload = json!({"a": 1});
//! let req = signer.build(
//!     &Method::POST,
//!     "/x",
//!     payload.as_object(),
//!     from_unix_timestamp(1_700_000_000).unwrap(),
//! )?;
//! assert_eq!(req.string_to_sign(), r#"POST/x{"a":1}1700000000"#);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{DMARKET_API_ENDPOINT, SIGNATURE_PREFIX};

mod credential;
pub use credential::Credential;

mod payload;
pub use payload::{canonical_body, canonical_query, Payload};

mod sign_request;
pub use sign_request::{RequestSigner, SignedRequest};

mod provide_credential;
pub use provide_credential::*;

mod client;
pub use client::Client;
