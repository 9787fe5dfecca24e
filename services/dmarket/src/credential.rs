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

use std::fmt::{Debug, Formatter};

use dmsign_core::{utils::Redact, SigningCredential};

/// Credential for the dmarket trading API.
///
/// Both fields are kept as handed out by dmarket. `secret_key` is only hex
/// decoded when a [`RequestSigner`](crate::RequestSigner) is built from it.
#[derive(Clone, Default)]
pub struct Credential {
    /// Public key id, sent as-is in `X-Api-Key`.
    pub public_key: String,
    /// Hex encoded ed25519 signing key.
    ///
    /// Either the 32 byte seed or the 64 byte `seed || public key` pair.
    pub secret_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("public_key", &Redact::from(&self.public_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.public_key.is_empty() && !self.secret_key.is_empty()
    }
}
