//! Foundation types for Tally, the receipt points service.
//!
//! This crate provides the domain types shared by every other Tally crate.
//!
//! # Key Types
//!
//! - [`Receipt`] / [`Item`] — a submitted purchase receipt and its line items
//! - [`Price`] — exact fixed-point monetary value (integer cents)
//! - [`ReceiptId`] — content-derived identifier (domain-separated BLAKE3)
//! - [`TypeError`] — parse and encoding failures

pub mod error;
pub mod price;
pub mod receipt;
pub mod token;

pub use error::TypeError;
pub use price::Price;
pub use receipt::{Item, Receipt};
pub use token::ReceiptId;
