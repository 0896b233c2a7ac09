//! HTTP server for Tally, the receipt points service.
//!
//! Accepts purchase receipts over a small REST API, scores them with the
//! pure rule engine, and serves the score back by content-derived
//! identifier. Submission is idempotent: byte-identical receipt content
//! always maps to the same identifier and the first stored score wins.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod service;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::TallyServer;
pub use service::ReceiptService;
