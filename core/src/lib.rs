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

//! Core components for signing API requests.
//!
//! This crate provides the foundational types and traits shared by dmsign
//! signers and clients.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and credential validation (`SigningCredential`)
//! - **Error**: One error type with an [`ErrorKind`] every signer and client reports through
//!
//! ## Example
//!
//! ```
//! use dmsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct FixedKey;
//!
//! #[async_trait]
//! impl ProvideCredential for FixedKey {
//!     type Credential = String;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
//!         Ok(Some("my-public-key".to_string()))
//!     }
//! }
//!
//! let chain = ProvideCredentialChain::new().push(FixedKey);
//! assert_eq!(chain.len(), 1);
//! ```
//!
//! ## Utilities
//!
//! - [`encoding`]: Hex encoding helpers
//! - [`time`]: Time helpers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod encoding;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};
