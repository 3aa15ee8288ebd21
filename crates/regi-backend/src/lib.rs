//! # regi-backend: Backend HTTP Client for Regi POS
//!
//! The checkout client consumes exactly two endpoints of an external
//! backend. This crate owns their wire contracts and the HTTP transport:
//!
//! - **Product lookup** - `GET {base}/product/{code}`, returning the master
//!   record for a scan code, or an empty/`null` body for "not found"
//! - **Purchase submission** - `POST {base}/purchase` with the terminal
//!   identity and the purchase lines, returning the settled total
//!
//! ## Modules
//!
//! - [`api`] - the [`CheckoutApi`] trait the app depends on (fakeable)
//! - [`client`] - [`HttpBackend`], the reqwest implementation
//! - [`wire`] - request/response body types with exact wire field names
//! - [`config`] - base URL and timeout resolution (env → file → defaults)
//! - [`error`] - transport/decode error taxonomy
//!
//! There are no retries and no cancellation: a failed call is surfaced to
//! the operator, who re-triggers it manually.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod wire;

pub use api::CheckoutApi;
pub use client::HttpBackend;
pub use config::BackendConfig;
pub use error::{BackendError, BackendResult};
pub use wire::{PurchaseLine, PurchaseRequest, PurchaseResponse};
