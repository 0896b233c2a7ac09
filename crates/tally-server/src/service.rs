use std::sync::Arc;

use tally_store::{ScoreStore, ScoredReceipt};
use tally_types::{Receipt, ReceiptId};

use crate::error::{ServerError, ServerResult};

/// Submit/lookup facade over the scoring engine and the score store.
///
/// This is the surface the HTTP handlers call into. The deriver and the
/// scoring rules are pure; the store handle is the only shared state.
pub struct ReceiptService {
    store: Arc<dyn ScoreStore>,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }

    /// Score a receipt and record the result under its derived identifier.
    ///
    /// Resubmitting identical content returns the same identifier and
    /// leaves the originally stored score untouched. Malformed prices,
    /// dates, and times inside the receipt degrade to zero values during
    /// scoring; they never make submission fail.
    pub fn submit(&self, receipt: &Receipt) -> ServerResult<ReceiptId> {
        let id = ReceiptId::derive(receipt)?;
        let points = tally_score::score(receipt);
        let inserted = self.store.put_if_absent(ScoredReceipt::new(id, points))?;
        if inserted {
            tracing::debug!(id = %id.short_hex(), points, "scored receipt");
        } else {
            tracing::debug!(id = %id.short_hex(), "receipt already scored");
        }
        Ok(id)
    }

    /// Look up the stored score for an identifier token.
    ///
    /// A token that is not a valid identifier cannot name a stored
    /// receipt, so it is reported as not found like any unknown id.
    pub fn lookup(&self, token: &str) -> ServerResult<u64> {
        let id = ReceiptId::from_hex(token)
            .map_err(|_| ServerError::ReceiptNotFound(token.to_string()))?;
        match self.store.get(&id)? {
            Some(record) => Ok(record.points),
            None => Err(ServerError::ReceiptNotFound(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_store::InMemoryScoreStore;
    use tally_types::Item;

    fn service() -> ReceiptService {
        ReceiptService::new(Arc::new(InMemoryScoreStore::new()))
    }

    fn gatorade_receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".into(),
            purchase_date: "2022-03-20".into(),
            purchase_time: "14:33".into(),
            items: vec![Item::new("Gatorade", "2.25"); 4],
            total: "9.00".into(),
        }
    }

    #[test]
    fn submit_then_lookup() {
        let service = service();
        let id = service.submit(&gatorade_receipt()).unwrap();
        assert_eq!(service.lookup(&id.to_hex()).unwrap(), 109);
    }

    #[test]
    fn submit_is_idempotent() {
        let service = service();
        let first = service.submit(&gatorade_receipt()).unwrap();
        let second = service.submit(&gatorade_receipt()).unwrap();
        assert_eq!(first, second);
        assert_eq!(service.lookup(&first.to_hex()).unwrap(), 109);
    }

    #[test]
    fn lookup_unknown_id_is_not_found() {
        let service = service();
        let missing = ReceiptId::from_hash([5; 32]).to_hex();
        assert!(matches!(
            service.lookup(&missing),
            Err(ServerError::ReceiptNotFound(_))
        ));
    }

    #[test]
    fn lookup_invalid_token_is_not_found() {
        let service = service();
        assert!(matches!(
            service.lookup("definitely-not-a-token"),
            Err(ServerError::ReceiptNotFound(_))
        ));
    }

    #[test]
    fn malformed_fields_do_not_fail_submission() {
        let service = service();
        let receipt = Receipt {
            retailer: "Target".into(),
            purchase_date: "garbage".into(),
            purchase_time: "garbage".into(),
            items: vec![Item::new("x", "garbage")],
            total: "garbage".into(),
        };
        let id = service.submit(&receipt).unwrap();
        // Retailer 6 + whole-dollar/quarter bonuses from the zero total.
        assert_eq!(service.lookup(&id.to_hex()).unwrap(), 81);
    }
}
