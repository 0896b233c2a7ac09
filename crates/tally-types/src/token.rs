use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::receipt::Receipt;

/// Domain tag prepended to every identifier derivation. Prevents a receipt
/// hash from colliding with any other hash of the same bytes.
const DOMAIN: &[u8] = b"tally-receipt-v1:";

/// Content-derived identifier for a receipt.
///
/// A `ReceiptId` is the domain-separated BLAKE3 hash of the receipt's
/// canonical JSON encoding. Identical receipt content (including item
/// order) always produces the same identifier, which is what makes
/// resubmission idempotent; distinct content collides with
/// cryptographically negligible probability.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReceiptId([u8; 32]);

impl ReceiptId {
    /// Derive the identifier for a receipt from its full content.
    ///
    /// The canonical encoding is the receipt's JSON form with fields in
    /// struct declaration order, so the same logical receipt always
    /// serializes to the same bytes.
    pub fn derive(receipt: &Receipt) -> Result<Self, TypeError> {
        let canonical =
            serde_json::to_vec(receipt).map_err(|e| TypeError::Serialization(e.to_string()))?;
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN);
        hasher.update(&canonical);
        Ok(Self(*hasher.finalize().as_bytes()))
    }

    /// Create from a pre-computed 32-byte hash.
    pub const fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The public token form: 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters), for logs.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse a token back into an identifier.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.short_hex())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
