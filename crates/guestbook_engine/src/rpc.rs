use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use engine_logging::{engine_debug, engine_trace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ProviderError, ProviderErrorKind};

/// EIP-1193 "User Rejected Request".
const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Clone)]
pub struct RpcSettings {
    pub url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for RpcSettings {
    fn default() -> Self {
        Self {
            url: Url::parse("http://127.0.0.1:8545").expect("static url"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: serde_json::Value,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC 2.0 client for a wallet-backed node endpoint.
#[derive(Debug)]
pub struct RpcClient {
    url: Url,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(settings: &RpcSettings) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ProviderError::new(ProviderErrorKind::Network, err.to_string()))?;
        Ok(Self {
            url: settings.url.clone(),
            http,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R, ProviderError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        engine_debug!("rpc -> {} id={}", method, id);

        let response = self
            .http
            .post(self.url.clone())
            .json(&RpcRequest {
                jsonrpc: "2.0",
                id,
                method,
                params,
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::new(
                ProviderErrorKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: RpcResponse = response.json().await.map_err(|err| {
            if err.is_timeout() {
                map_reqwest_error(err)
            } else {
                ProviderError::invalid_response(err.to_string())
            }
        })?;

        if let Some(error) = body.error {
            engine_debug!("rpc <- {} id={} error code={}", method, id, error.code);
            let kind = if error.code == USER_REJECTED_CODE {
                ProviderErrorKind::Rejected
            } else {
                ProviderErrorKind::Rpc { code: error.code }
            };
            return Err(ProviderError::new(kind, error.message));
        }

        engine_trace!("rpc <- {} id={} result={}", method, id, body.result);
        serde_json::from_value(body.result)
            .map_err(|err| ProviderError::invalid_response(format!("{method}: {err}")))
    }
}

/// Parses a JSON-RPC hex quantity such as `"0x2105"`.
pub(crate) fn parse_quantity(raw: &str) -> Result<u64, ProviderError> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| ProviderError::invalid_response(format!("quantity without 0x: {raw}")))?;
    u64::from_str_radix(digits, 16)
        .map_err(|err| ProviderError::invalid_response(format!("bad quantity {raw}: {err}")))
}

fn map_reqwest_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        return ProviderError::new(ProviderErrorKind::Timeout, err.to_string());
    }
    ProviderError::new(ProviderErrorKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities_parse_as_hex() {
        assert_eq!(parse_quantity("0x2105").unwrap(), 8453);
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
    }

    #[test]
    fn quantities_require_prefix() {
        let err = parse_quantity("2105").unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::InvalidResponse);
        assert!(parse_quantity("0xzz").is_err());
    }
}
