//! # HTTP Backend Client
//!
//! The reqwest implementation of [`CheckoutApi`].
//!
//! ## Call Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      HttpBackend Calls                                  │
//! │                                                                         │
//! │  fetch_product("4901777300446")                                         │
//! │    GET {base}/product/4901777300446                                     │
//! │    2xx + {id,code,name,price} ──► Ok(Some(Product))                     │
//! │    2xx + empty or null body   ──► Ok(None)      "not registered"       │
//! │    non-2xx                    ──► Err(Status)                           │
//! │    malformed body             ──► Err(Decode)                           │
//! │                                                                         │
//! │  submit_purchase(request)                                               │
//! │    POST {base}/purchase                                                 │
//! │    2xx + {ok,total}           ──► Ok(PurchaseResponse)                  │
//! │                                                                         │
//! │  No retries, no cancellation. One per-request timeout so a hung        │
//! │  backend cannot leave the terminal frozen forever.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;

use regi_core::Product;

use crate::api::CheckoutApi;
use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};
use crate::wire::{PurchaseRequest, PurchaseResponse};

/// HTTP client for the product-master and transaction endpoints.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// Builds a client from the backend configuration.
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(HttpBackend { client, base_url })
    }

    /// Builds `{base}/<segments...>` without the trailing-slash pitfalls of
    /// `Url::join`. Segments are percent-encoded, so a scan code with odd
    /// characters cannot break the path.
    fn endpoint(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| BackendError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl CheckoutApi for HttpBackend {
    async fn fetch_product(&self, code: &str) -> BackendResult<Option<Product>> {
        let url = self.endpoint(&["product", code])?;
        debug!(%url, code, "product lookup");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(code, status = status.as_u16(), "product lookup failed");
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        // An empty or null body is the backend's "not found"
        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            info!(code, "product not registered in master");
            return Ok(None);
        }

        let product: Product = serde_json::from_str(body)?;
        info!(code, product_id = product.id, "product resolved");
        Ok(Some(product))
    }

    async fn submit_purchase(&self, request: &PurchaseRequest) -> BackendResult<PurchaseResponse> {
        let url = self.endpoint(&["purchase"])?;
        debug!(%url, lines = request.items.len(), "purchase submission");

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "purchase submission failed");
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: PurchaseResponse = serde_json::from_str(&body)?;
        info!(
            ok = parsed.ok,
            total = parsed.total.map(|t| t.yen()),
            "purchase response received"
        );
        Ok(parsed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(&BackendConfig {
            base_url: base.to_string(),
            timeout: Duration::from_secs(30),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let backend = backend("http://localhost:8000/api");
        let url = backend.endpoint(&["product", "4901777300446"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/product/4901777300446"
        );
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let backend = backend("http://localhost:8000/api/");
        let url = backend.endpoint(&["purchase"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/purchase");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let backend = backend("http://localhost:8000");
        let url = backend.endpoint(&["product", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/product/a%20b%2Fc");
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        let result = HttpBackend::new(&BackendConfig {
            base_url: "not a url".to_string(),
            timeout: Duration::from_secs(30),
        });
        assert!(matches!(result, Err(BackendError::InvalidBaseUrl(_))));
    }
}
