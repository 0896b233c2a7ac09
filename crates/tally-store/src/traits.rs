use tally_types::ReceiptId;

use crate::error::StoreResult;
use crate::record::ScoredReceipt;

/// Keyed mapping from receipt identifiers to scored records.
///
/// All implementations must satisfy these invariants:
/// - A stored score never changes: `put_if_absent` never overwrites an
///   existing entry.
/// - Concurrent `put_if_absent` calls for the same identifier serialize,
///   so exactly one insert wins and is visible to all later readers.
/// - There is no update or delete; entries live as long as the store.
/// - All I/O errors are propagated, never silently ignored.
pub trait ScoreStore: Send + Sync {
    /// Insert a record unless one already exists for its identifier.
    ///
    /// Returns `true` if the record was inserted, `false` if an entry was
    /// already present. The existing entry is left untouched either way.
    fn put_if_absent(&self, record: ScoredReceipt) -> StoreResult<bool>;

    /// Read a record by identifier.
    ///
    /// Returns `Ok(None)` if no record exists for `id`.
    /// Returns `Err` on backend failure.
    fn get(&self, id: &ReceiptId) -> StoreResult<Option<ScoredReceipt>>;
}
