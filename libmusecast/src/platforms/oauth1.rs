//! OAuth 1.0a request signing
//!
//! The X v2 posting endpoint still authenticates with OAuth 1.0a user
//! context. Requests carry a JSON body, so only the `oauth_*` protocol
//! parameters participate in the signature.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;

/// Everything outside the RFC 3986 unreserved set gets escaped.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Signs requests with a fixed set of OAuth 1.0a user-context credentials.
#[derive(Debug, Clone)]
pub struct Oauth1Signer {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    token_secret: String,
}

impl Oauth1Signer {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Build the `Authorization` header value for a request whose parameters
    /// all live in a JSON body (and therefore stay out of the signature).
    pub fn authorization_header(&self, method: &str, url: &str) -> String {
        self.header_with(method, url, &[], chrono::Utc::now().timestamp(), &nonce())
    }

    fn header_with(
        &self,
        method: &str,
        url: &str,
        request_params: &[(String, String)],
        timestamp: i64,
        nonce: &str,
    ) -> String {
        let oauth_params: Vec<(String, String)> = vec![
            ("oauth_consumer_key".to_string(), self.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.access_token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let mut all_params = oauth_params.clone();
        all_params.extend_from_slice(request_params);

        let base = signature_base_string(method, url, &all_params);
        let signature = sign(&base, &self.consumer_secret, &self.token_secret);

        let mut header_params = oauth_params;
        header_params.push(("oauth_signature".to_string(), signature));
        header_params.sort();

        let fields = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("OAuth {}", fields)
    }
}

fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Parameters are percent-encoded, sorted by encoded key, then joined `k=v`
/// with `&`.
fn parameter_string(params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

fn signature_base_string(method: &str, url: &str, params: &[(String, String)]) -> String {
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&parameter_string(params))
    )
}

fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    BASE64.encode(hmac_sha1(key.as_bytes(), base_string.as_bytes()))
}

fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    type HmacSha1 = Hmac<Sha1>;
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}
