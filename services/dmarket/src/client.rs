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

//! Client for the dmarket trading API.

use dmsign_core::{Context, Error, ProvideCredential, Result};
use http::Method;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::DMARKET_API_ENDPOINT;
use crate::payload::Payload;
use crate::{Credential, RequestSigner};

/// Client sends signed requests to the dmarket API.
///
/// Credentials are taken once at construction and never reloaded. The
/// client doesn't retry: a failing call is returned to the caller as-is.
///
/// ```no_run
/// use dmsign_core::Context;
/// use dmsign_dmarket::{Client, Credential};
/// use dmsign_http_send_reqwest::ReqwestHttpSend;
/// use http::Method;
/// use serde_json::json;
///
/// # async fn example() -> dmsign_core::Result<()> {
/// let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
/// let client = Client::new(ctx, &Credential::new("public_key", "secret_key_hex"))?;
///
/// let params = json!({"gameId": "a8db", "limit": 1, "currency": "USD"});
/// let items = client
///     .call(Method::GET, "/exchange/v1/market/items", params.as_object())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    ctx: Context,
    endpoint: String,
    signer: RequestSigner,
}

impl Client {
    /// Create a new client from credential.
    pub fn new(ctx: Context, cred: &Credential) -> Result<Self> {
        Ok(Self {
            ctx,
            endpoint: DMARKET_API_ENDPOINT.to_string(),
            signer: RequestSigner::new(cred)?,
        })
    }

    /// Create a new client with credential loaded by provider.
    ///
    /// Fails with `InvalidCredentials` if the provider has nothing to offer.
    pub async fn from_provider(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .ok_or_else(|| Error::invalid_credentials("no credential found"))?;

        Self::new(ctx, &cred)
    }

    /// Specify the API endpoint, `https://api.dmarket.com` by default.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(Error::config_invalid(format!(
                "endpoint must start with http:// or https://, got {endpoint:?}"
            )));
        }

        self.endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// The signer used by this client.
    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Send a signed request and return the json response.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Payload>,
    ) -> Result<Value> {
        self.call_as(method, path, payload).await
    }

    /// Send a signed request and deserialize the json response into `T`.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Payload>,
    ) -> Result<T> {
        let req = self
            .signer
            .sign_now(&method, path, payload)?
            .into_http_request(&self.endpoint)?;
        debug!("sending {} {}", req.method(), req.uri());

        let resp = self.ctx.http_send_as_string(req).await?;
        let status = resp.status();
        let body = resp.into_body();

        if status.is_client_error() || status.is_server_error() {
            return Err(Error::unexpected(format!(
                "api call failed with status {status}: {body}"
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::unexpected(format!("failed to decode response: {body}")).with_source(e)
        })
    }
}
