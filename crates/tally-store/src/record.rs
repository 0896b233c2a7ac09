use serde::{Deserialize, Serialize};

use tally_types::ReceiptId;

/// A receipt identifier bound to its computed point score.
///
/// Created exactly once, at first submission of a given receipt content,
/// and never modified afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredReceipt {
    /// Content-derived identifier of the receipt.
    pub id: ReceiptId,
    /// Point total computed by the scoring rules.
    pub points: u64,
}

impl ScoredReceipt {
    pub fn new(id: ReceiptId, points: u64) -> Self {
        Self { id, points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let record = ScoredReceipt::new(ReceiptId::from_hash([1; 32]), 28);
        assert_eq!(record.points, 28);
        assert_eq!(record.id, ReceiptId::from_hash([1; 32]));
    }
}
