//! Storefront cart endpoints: add-to-cart and cart quantity.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::guard::InFlightGuard;
use crate::core::quantity::MIN_QUANTITY;

const ADD_TO_CART_PATH: &str = "/shop/cart/update_json";
const CART_QUANTITY_PATH: &str = "/shop/cart/quantity";

/// Default client-side timeout for a single cart request.
pub const DEFAULT_CART_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the cart endpoints.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CartError {
    /// Another add-to-cart call from this client is still in flight.
    #[error("an add-to-cart request is already in flight")]
    Busy,
    /// The request did not complete within the configured timeout.
    #[error("cart request timed out after {0:?}")]
    Timeout(Duration),
    /// Connection or transport error.
    #[error("cart network error: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status.
    #[error("cart endpoint returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The JSON-RPC endpoint reported an error.
    #[error("cart RPC error: {0}")]
    Rpc(String),
    /// The response body could not be understood.
    #[error("cart parse error: {0}")]
    Parse(String),
    /// The client could not be configured.
    #[error("cart config error: {0}")]
    Config(String),
}

/// Cart client configuration.
///
/// Requests are attempted once, bounded by `timeout_ms`, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Storefront origin, e.g. "https://tienda.example.pe".
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8069".into(),
            timeout_ms: DEFAULT_CART_TIMEOUT.as_millis() as u64,
        }
    }
}

impl CartConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Successful add-to-cart response.
#[derive(Debug, Clone, PartialEq)]
pub struct CartUpdate {
    /// Cart size reported by the endpoint, when it sent one.
    pub cart_quantity: Option<u32>,
    /// Raw JSON-RPC result; `Null` when the endpoint returned none.
    pub result: serde_json::Value,
}

#[derive(Serialize)]
struct RpcRequest {
    jsonrpc: &'static str,
    method: &'static str,
    params: serde_json::Value,
}

impl RpcRequest {
    fn call(params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "call",
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: serde_json::Value,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    message: Option<String>,
    data: Option<RpcErrorData>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorData {
    message: Option<String>,
}

/// Unwrap a JSON-RPC envelope, turning an `error` member into `CartError::Rpc`.
fn parse_rpc_result(body: &str) -> Result<serde_json::Value, CartError> {
    let resp: RpcResponse =
        serde_json::from_str(body).map_err(|e| CartError::Parse(format!("{e}: {body}")))?;
    if let Some(err) = resp.error {
        let msg = err
            .data
            .and_then(|d| d.message)
            .or(err.message)
            .unwrap_or_else(|| "unknown error".into());
        return Err(CartError::Rpc(msg));
    }
    Ok(resp.result)
}

fn saturating_count(value: &serde_json::Value) -> Option<u32> {
    value.as_u64().map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// Cart size inside a result: a bare integer or `{ "cart_quantity": n }`.
fn cart_quantity_of(result: &serde_json::Value) -> Option<u32> {
    saturating_count(result).or_else(|| result.get("cart_quantity").and_then(saturating_count))
}

/// Parse a cart-quantity body: a bare integer, or a JSON-RPC envelope whose
/// result holds the count. A missing quantity counts as 0.
fn parse_quantity(body: &str) -> Result<u32, CartError> {
    if let Ok(n) = body.trim().parse::<u32>() {
        return Ok(n);
    }
    let result = parse_rpc_result(body)?;
    Ok(cart_quantity_of(&result).unwrap_or(0))
}

/// Async client for the storefront cart endpoints.
///
/// Cloning shares the underlying connection pool and the in-flight flag.
#[derive(Debug, Clone)]
pub struct CartClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    in_flight: Arc<AtomicBool>,
}

impl CartClient {
    pub fn new(config: &CartConfig) -> Result<Self, CartError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CartError::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                config.base_url
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CartError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            timeout: config.timeout(),
            in_flight: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Whether an add-to-cart call is currently in flight; the page keeps
    /// the submit control disabled while this is `true`.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> CartError {
        if e.is_timeout() {
            CartError::Timeout(self.timeout)
        } else {
            CartError::Network(e.to_string())
        }
    }

    /// POST a JSON-RPC call and return the body of a successful response.
    async fn post_rpc(&self, path: &str, params: serde_json::Value) -> Result<String, CartError> {
        let resp = self
            .http
            .post(self.url(path))
            .json(&RpcRequest::call(params))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.map_send_error(e))?;
        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "cart request failed");
            return Err(CartError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Add a product to the cart without leaving the page.
    ///
    /// # Errors
    ///
    /// `CartError::Busy` if a previous call from this client has not finished;
    /// otherwise the single attempt's failure.
    pub async fn add_to_cart(&self, product_id: u64, quantity: u32) -> Result<CartUpdate, CartError> {
        let _guard = InFlightGuard::try_acquire(&self.in_flight).ok_or(CartError::Busy)?;
        let quantity = quantity.max(MIN_QUANTITY);

        let params = serde_json::json!({ "product_id": product_id, "add_qty": quantity });
        let body = self.post_rpc(ADD_TO_CART_PATH, params).await?;
        let result = parse_rpc_result(&body)?;
        let cart_quantity = result.get("cart_quantity").and_then(saturating_count);
        tracing::debug!(product_id, quantity, ?cart_quantity, "added to cart");
        Ok(CartUpdate {
            cart_quantity,
            result,
        })
    }

    /// Fetch the number of items in the current cart.
    pub async fn cart_quantity(&self) -> Result<u32, CartError> {
        let body = self
            .post_rpc(CART_QUANTITY_PATH, serde_json::Value::Object(serde_json::Map::new()))
            .await?;
        parse_quantity(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_request_serialization() {
        let req = RpcRequest::call(serde_json::json!({}));
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"jsonrpc":"2.0","method":"call","params":{}}"#);
    }

    #[test]
    fn add_to_cart_params_shape() {
        let req = RpcRequest::call(serde_json::json!({ "product_id": 42_u64, "add_qty": 2_u32 }));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["params"]["product_id"], 42);
        assert_eq!(json["params"]["add_qty"], 2);
        assert_eq!(json["method"], "call");
    }

    #[test]
    fn rpc_result_passthrough() {
        let body = r#"{"jsonrpc":"2.0","id":null,"result":{"cart_quantity":5,"line_id":9}}"#;
        let result = parse_rpc_result(body).unwrap();
        assert_eq!(cart_quantity_of(&result), Some(5));
        assert_eq!(result["line_id"], 9);
    }

    #[test]
    fn oversized_count_saturates() {
        assert_eq!(
            parse_quantity(r#"{"result":{"cart_quantity":99999999999}}"#).unwrap(),
            u32::MAX
        );
    }

    #[test]
    fn quantity_from_object_result() {
        let body = r#"{"jsonrpc":"2.0","id":null,"result":{"cart_quantity":3}}"#;
        assert_eq!(parse_quantity(body).unwrap(), 3);
    }

    #[test]
    fn quantity_from_bare_result() {
        assert_eq!(parse_quantity(r#"{"jsonrpc":"2.0","result":7}"#).unwrap(), 7);
    }

    #[test]
    fn quantity_from_plain_body() {
        assert_eq!(parse_quantity(" 4\n").unwrap(), 4);
    }

    #[test]
    fn missing_quantity_is_zero() {
        assert_eq!(parse_quantity(r#"{"result":{}}"#).unwrap(), 0);
        assert_eq!(parse_quantity(r#"{"result":null}"#).unwrap(), 0);
    }

    #[test]
    fn rpc_error_surfaces_message() {
        let body = r#"{"error":{"message":"Odoo Server Error","data":{"message":"boom"}}}"#;
        match parse_quantity(body) {
            Err(CartError::Rpc(msg)) => assert_eq!(msg, "boom"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn garbage_is_parse_error() {
        assert!(matches!(parse_quantity("<html>"), Err(CartError::Parse(_))));
    }

    #[test]
    fn rejects_non_http_base_url() {
        assert!(matches!(
            CartClient::new(&CartConfig::new("ftp://shop")),
            Err(CartError::Config(_))
        ));
    }

    #[test]
    fn config_defaults() {
        let config: CartConfig = serde_json::from_str(r#"{"base_url":"https://shop.pe"}"#).unwrap();
        assert_eq!(config.timeout(), DEFAULT_CART_TIMEOUT);
    }
}
