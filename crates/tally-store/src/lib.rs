//! Score storage for Tally.
//!
//! This crate binds content-derived receipt identifiers to their computed
//! point totals. The mapping is insert-once: a score recorded for an
//! identifier is never overwritten, which is what gives receipt
//! submission its idempotent semantics.
//!
//! # Storage Backends
//!
//! All backends implement the [`ScoreStore`] trait:
//!
//! - [`InMemoryScoreStore`] -- `HashMap`-based store; the process-lifetime
//!   backend, also used for tests and embedding
//!
//! # Design Rules
//!
//! 1. Records are immutable once written; there is no update or delete.
//! 2. Concurrent inserts for the same identifier serialize: exactly one
//!    wins and is visible to all subsequent readers.
//! 3. The store never interprets receipt content -- it is a pure
//!    key-value mapping.
//! 4. Backend I/O errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryScoreStore;
pub use record::ScoredReceipt;
pub use traits::ScoreStore;
