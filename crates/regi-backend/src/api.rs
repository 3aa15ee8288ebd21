//! # Backend API Seam
//!
//! The trait the terminal app depends on instead of a concrete HTTP
//! client. Production wires in [`crate::HttpBackend`]; tests wire in an
//! in-memory fake with canned responses.

use async_trait::async_trait;

use regi_core::Product;

use crate::error::BackendResult;
use crate::wire::{PurchaseRequest, PurchaseResponse};

/// The two backend operations the checkout client consumes.
#[async_trait]
pub trait CheckoutApi: Send + Sync {
    /// Looks up the master record for a scan code.
    ///
    /// `Ok(None)` means the backend answered but has no product for the
    /// code; `Err` is a transport or decode failure.
    async fn fetch_product(&self, code: &str) -> BackendResult<Option<Product>>;

    /// Submits a purchase transaction.
    ///
    /// The response's `ok` flag carries the backend's verdict; transport
    /// and decode failures are `Err`.
    async fn submit_purchase(&self, request: &PurchaseRequest) -> BackendResult<PurchaseResponse>;
}
