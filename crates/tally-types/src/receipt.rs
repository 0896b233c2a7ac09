use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted by a client.
///
/// Field order is canonical: [`crate::ReceiptId`] hashes the serialized
/// form of this struct, so reordering fields changes derived identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,
    /// Calendar date of purchase, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Time of purchase, 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Line items, in the order they appear on the receipt.
    pub items: Vec<Item>,
    /// Grand total as a decimal string, e.g. `"35.35"`.
    pub total: String,
}

/// A single line entry on a receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description.
    pub short_description: String,
    /// Item price as a decimal string, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Receipt {
        Receipt {
            retailer: "Target".into(),
            purchase_date: "2022-01-01".into(),
            purchase_time: "13:01".into(),
            items: vec![Item::new("Mountain Dew 12PK", "6.49")],
            total: "6.49".into(),
        }
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("retailer"));
        assert!(obj.contains_key("purchaseDate"));
        assert!(obj.contains_key("purchaseTime"));
        assert!(obj.contains_key("items"));
        assert!(obj.contains_key("total"));
        assert!(json["items"][0].as_object().unwrap().contains_key("shortDescription"));
    }

    #[test]
    fn serde_roundtrip() {
        let receipt = sample();
        let json = serde_json::to_string(&receipt).unwrap();
        let parsed: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, parsed);
    }

    #[test]
    fn deserializes_wire_payload() {
        let payload = r#"{
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [{"shortDescription": "Gatorade", "price": "2.25"}],
            "total": "2.25"
        }"#;
        let receipt: Receipt = serde_json::from_str(payload).unwrap();
        assert_eq!(receipt.retailer, "M&M Corner Market");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].price, "2.25");
    }

    #[test]
    fn canonical_serialization_is_stable() {
        let a = serde_json::to_vec(&sample()).unwrap();
        let b = serde_json::to_vec(&sample()).unwrap();
        assert_eq!(a, b);
    }
}
