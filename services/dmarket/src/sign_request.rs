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

//! Dmarket request signer.

use std::fmt::{Debug, Formatter};

use bytes::Bytes;
use dmsign_core::encoding::{hex_decode, hex_encode};
use dmsign_core::time::{format_unix_timestamp, now, DateTime};
use dmsign_core::utils::Redact;
use dmsign_core::{Error, Result, SigningCredential};
use ed25519_dalek::{Signer, SigningKey, VerifyingKey, KEYPAIR_LENGTH, SECRET_KEY_LENGTH};
use http::header::{HeaderName, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method};
use log::debug;

use crate::constants::*;
use crate::payload::{canonical_body, canonical_query, Payload};
use crate::Credential;

/// RequestSigner that implements the dmarket API request signature.
///
/// ```text
/// StringToSign = Method + PathAndQuery + Body + Timestamp
/// X-Request-Sign = "dmar ed25519 " + HexEncode(Ed25519Sign(StringToSign))
/// ```
///
/// The signer holds the decoded key for its whole lifetime and never reads
/// the clock on its own: [`RequestSigner::build`] takes the signing time as
/// input, so the same input always yields the same request.
pub struct RequestSigner {
    public_key: String,
    signing_key: SigningKey,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("public_key", &Redact::from(&self.public_key))
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a signer from credential.
    ///
    /// Fails with `InvalidCredentials` if either key is empty and with
    /// `InvalidKeyEncoding` if the secret key is not a valid hex encoded
    /// ed25519 seed or keypair.
    pub fn new(cred: &Credential) -> Result<Self> {
        if !cred.is_valid() {
            return Err(Error::invalid_credentials(
                "public key and secret key must be provided",
            ));
        }

        Ok(Self {
            public_key: cred.public_key.clone(),
            signing_key: parse_signing_key(&cred.secret_key)?,
        })
    }

    /// The verifying key derived from the signing key.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Sign the string and return the lowercase hex encoded detached signature.
    pub fn sign(&self, string_to_sign: &str) -> Result<String> {
        let signature = self
            .signing_key
            .try_sign(string_to_sign.as_bytes())
            .map_err(|e| Error::signing_failure("failed to sign request").with_source(e))?;

        Ok(hex_encode(&signature.to_bytes()))
    }

    /// Build a signed request at current time.
    pub fn sign_now(
        &self,
        method: &Method,
        path: &str,
        payload: Option<&Payload>,
    ) -> Result<SignedRequest> {
        self.build(method, path, payload, now())
    }

    /// Build a signed request.
    ///
    /// - `GET` folds the payload into the query string and sends no body.
    /// - Other methods send the payload as a compact json body.
    pub fn build(
        &self,
        method: &Method,
        path: &str,
        payload: Option<&Payload>,
        now: DateTime,
    ) -> Result<SignedRequest> {
        if !path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "path must be absolute, got {path:?}"
            )));
        }

        let method = Method::from_bytes(method.as_str().to_ascii_uppercase().as_bytes())
            .map_err(|e| Error::request_invalid("invalid http method").with_source(e))?;
        let payload = payload.filter(|v| !v.is_empty());

        let (path_and_query, body) = match payload {
            Some(payload) if method == Method::GET => {
                (format!("{path}?{}", canonical_query(payload)?), None)
            }
            Some(payload) => (path.to_string(), Some(canonical_body(payload)?)),
            None => (path.to_string(), None),
        };

        let timestamp = format_unix_timestamp(now);
        let string_to_sign = string_to_sign(&method, &path_and_query, body.as_deref(), &timestamp);
        debug!("string to sign: {string_to_sign}");

        let signature = self.sign(&string_to_sign)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(X_API_KEY),
            HeaderValue::from_str(&self.public_key)?,
        );
        headers.insert(HeaderName::from_static(X_REQUEST_SIGN), {
            let mut value = HeaderValue::from_str(&format!("{SIGNATURE_PREFIX}{signature}"))?;
            value.set_sensitive(true);

            value
        });
        headers.insert(
            HeaderName::from_static(X_SIGN_DATE),
            HeaderValue::from_str(&timestamp)?,
        );
        if let Some(body) = &body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        }

        Ok(SignedRequest {
            method,
            path_and_query,
            body,
            timestamp,
            string_to_sign,
            signature,
            headers,
        })
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// Method + PathAndQuery + Body + Timestamp
/// ```
///
/// No separators. The method is upper case and the timestamp is decimal Unix
/// seconds.
fn string_to_sign(
    method: &Method,
    path_and_query: &str,
    body: Option<&str>,
    timestamp: &str,
) -> String {
    let body = body.unwrap_or_default();
    let mut s = String::with_capacity(
        method.as_str().len() + path_and_query.len() + body.len() + timestamp.len(),
    );
    s.push_str(method.as_str());
    s.push_str(path_and_query);
    s.push_str(body);
    s.push_str(timestamp);
    s
}

fn parse_signing_key(secret_key: &str) -> Result<SigningKey> {
    let bs = hex_decode(secret_key)?;

    match bs.len() {
        SECRET_KEY_LENGTH => {
            let mut seed = [0u8; SECRET_KEY_LENGTH];
            seed.copy_from_slice(&bs);
            Ok(SigningKey::from_bytes(&seed))
        }
        KEYPAIR_LENGTH => {
            let mut keypair = [0u8; KEYPAIR_LENGTH];
            keypair.copy_from_slice(&bs);
            SigningKey::from_keypair_bytes(&keypair).map_err(|e| {
                Error::invalid_key_encoding("public half of secret key does not match its seed")
                    .with_source(e)
            })
        }
        n => Err(Error::invalid_key_encoding(format!(
            "secret key must be {SECRET_KEY_LENGTH} or {KEYPAIR_LENGTH} bytes, got {n}"
        ))),
    }
}

/// SignedRequest is one outbound call, ready to be sent.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    method: Method,
    path_and_query: String,
    body: Option<String>,
    timestamp: String,
    string_to_sign: String,
    signature: String,
    headers: HeaderMap,
}

impl SignedRequest {
    /// HTTP method, upper case.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path with the query string appended for `GET` payloads.
    pub fn path_and_query(&self) -> &str {
        &self.path_and_query
    }

    /// Json body, present only for non-`GET` requests with a payload.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Signing time as decimal Unix seconds.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The exact input that has been signed.
    pub fn string_to_sign(&self) -> &str {
        &self.string_to_sign
    }

    /// Lowercase hex encoded signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Headers to attach.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Convert into an [`http::Request`] against the given endpoint.
    ///
    /// The endpoint is the API root like `https://api.dmarket.com`, without
    /// trailing path.
    pub fn into_http_request(self, endpoint: &str) -> Result<http::Request<Bytes>> {
        let uri = format!(
            "{}{}",
            endpoint.trim_end_matches('/'),
            self.path_and_query
        );

        let mut req = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(self.body.map(Bytes::from).unwrap_or_default())?;
        *req.headers_mut() = self.headers;

        Ok(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmsign_core::time::from_unix_timestamp;
    use dmsign_core::ErrorKind;
    use ed25519_dalek::{Signature, Verifier};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    const PUBLIC_KEY: &str = "17e78b6022d5470402674c551ac8ad6d572deee3d753a1c9eda25394fee6e528";
    const SECRET_KEY: &str = "1ba46e6a980c6fa4767ff03d8e33ff158f21f980945ca2eb37eeb6eaeb1d41d017e78b6022d5470402674c551ac8ad6d572deee3d753a1c9eda25394fee6e528";

    fn signer() -> RequestSigner {
        RequestSigner::new(&Credential::new(PUBLIC_KEY, SECRET_KEY)).expect("must be valid")
    }

    fn at(secs: i64) -> DateTime {
        from_unix_timestamp(secs).expect("in range")
    }

    #[test]
    fn test_keypair_and_seed_sign_identically() {
        let seed_only = RequestSigner::new(&Credential::new(PUBLIC_KEY, &SECRET_KEY[..64]))
            .expect("seed must be valid");

        let msg = "GET/x1700000000";
        assert_eq!(seed_only.sign(msg).unwrap(), signer().sign(msg).unwrap());
        assert_eq!(hex_encode(signer().verifying_key().as_bytes()), PUBLIC_KEY);
    }

    #[test]
    fn test_empty_credentials() {
        for cred in [
            Credential::new("", SECRET_KEY),
            Credential::new(PUBLIC_KEY, ""),
            Credential::default(),
        ] {
            let err = RequestSigner::new(&cred).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
        }
    }

    #[test]
    fn test_invalid_key_encoding() {
        let cases = [
            // odd length
            "abc",
            // non hex
            "zz",
            // 16 bytes
            "00112233445566778899aabbccddeeff",
            // keypair with a public half that doesn't belong to the seed
            "1ba46e6a980c6fa4767ff03d8e33ff158f21f980945ca2eb37eeb6eaeb1d41d0\
             0000000000000000000000000000000000000000000000000000000000000000",
        ];

        for key in cases {
            let err = RequestSigner::new(&Credential::new(PUBLIC_KEY, key)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidKeyEncoding, "key: {key}");
        }
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let err = signer()
            .build(&Method::GET, "exchange/v1/market/items", None, at(1_700_000_000))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_method_is_upper_cased() {
        let method = Method::from_bytes(b"post").unwrap();
        let payload = json!({"a": 1}).as_object().cloned();

        let req = signer()
            .build(&method, "/x", payload.as_ref(), at(1_700_000_000))
            .unwrap();
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.string_to_sign(), r#"POST/x{"a":1}1700000000"#);
    }

    #[test]
    fn test_lowercase_get_uses_query() {
        let method = Method::from_bytes(b"get").unwrap();
        let payload = json!({"limit": 1}).as_object().cloned();

        let req = signer()
            .build(&method, "/x", payload.as_ref(), at(1_700_000_000))
            .unwrap();
        assert_eq!(req.path_and_query(), "/x?limit=1");
        assert_eq!(req.body(), None);
    }

    #[test]
    fn test_empty_payload_is_no_payload() {
        let empty = Payload::new();
        let a = signer()
            .build(&Method::POST, "/x", Some(&empty), at(1_700_000_000))
            .unwrap();
        let b = signer()
            .build(&Method::POST, "/x", None, at(1_700_000_000))
            .unwrap();

        assert_eq!(a.body(), None);
        assert_eq!(a.string_to_sign(), "POST/x1700000000");
        assert_eq!(a.signature(), b.signature());
        assert!(a.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_into_http_request() {
        let payload = json!({"a": 1}).as_object().cloned();
        let req = signer()
            .build(&Method::POST, "/x", payload.as_ref(), at(1_700_000_000))
            .unwrap()
            .into_http_request("https://api.dmarket.com/")
            .unwrap();

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri().to_string(), "https://api.dmarket.com/x");
        assert_eq!(&req.body()[..], br#"{"a":1}"#);
        assert_eq!(req.headers()[CONTENT_LENGTH], "7");
        assert_eq!(req.headers()[X_SIGN_DATE], "1700000000");
    }

    #[test]
    fn test_debug_hides_signing_key() {
        let output = format!("{:?}", signer());
        assert_eq!(output, "RequestSigner { public_key: 17e***528, .. }");
    }

    proptest! {
        #[test]
        fn signature_verifies_and_detects_tampering(
            msg in "[ -~]{1,128}",
            idx in any::<prop::sample::Index>(),
            flip in 1u8..=255,
        ) {
            let signer = signer();
            let signature = signer.sign(&msg).unwrap();
            prop_assert_eq!(signature.len(), 128);

            let bs: [u8; 64] = dmsign_core::encoding::hex_decode_array(&signature).unwrap();
            let signature = Signature::from_bytes(&bs);
            let vk = signer.verifying_key();
            prop_assert!(vk.verify(msg.as_bytes(), &signature).is_ok());

            let mut tampered = msg.into_bytes();
            let i = idx.index(tampered.len());
            tampered[i] ^= flip;
            prop_assert!(vk.verify(&tampered, &signature).is_err());
        }

        #[test]
        fn build_is_deterministic(secs in 0i64..4_000_000_000, limit in 0u32..1000) {
            let payload = json!({"gameId": "a8db", "limit": limit}).as_object().cloned();
            let a = signer().build(&Method::GET, "/exchange/v1/market/items", payload.as_ref(), at(secs)).unwrap();
            let b = signer().build(&Method::GET, "/exchange/v1/market/items", payload.as_ref(), at(secs)).unwrap();

            prop_assert_eq!(a.headers(), b.headers());
            prop_assert_eq!(a.path_and_query(), b.path_and_query());
            prop_assert_eq!(a.body(), b.body());
        }
    }
}
