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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use dmsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads dmarket credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `DMARKET_PUBLIC_KEY`: The dmarket public key
/// - `DMARKET_SECRET_KEY`: The hex encoded dmarket secret key
///
/// Empty values are treated as missing.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let public_key = ctx.env_var(DMARKET_PUBLIC_KEY).filter(|v| !v.is_empty());
        let secret_key = ctx.env_var(DMARKET_SECRET_KEY).filter(|v| !v.is_empty());

        match (public_key, secret_key) {
            (Some(pk), Some(sk)) => Ok(Some(Credential::new(pk, sk))),
            _ => Ok(None),
        }
    }
}
