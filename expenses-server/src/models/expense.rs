//! Expense record and request body
//!
//! `Expense` is what the store returns and what clients receive.
//! `ExpenseInput` is the body of create/update requests; any `id` sent by the
//! client is ignored, and missing fields decode to their zero value.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Stored expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: i32,
    pub title: String,
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

/// Create/update request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: f64,
    pub note: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl ExpenseInput {
    /// Attach a store-assigned id, producing the full record.
    pub fn into_expense(self, id: i32) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            note: self.note,
            tags: self.tags,
        }
    }
}

impl From<Expense> for ExpenseInput {
    fn from(e: Expense) -> Self {
        Self {
            title: e.title,
            amount: e.amount,
            note: e.note,
            tags: e.tags,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_body_and_ignores_id() {
        let input: ExpenseInput = serde_json::from_str(
            r#"{"id": 99, "title": "New Stuff", "amount": 70, "note": "Bunny", "tags": ["rabbit", "young"]}"#,
        )
        .unwrap();

        assert_eq!(input.title, "New Stuff");
        assert_eq!(input.amount, 70.0);
        assert_eq!(input.note, "Bunny");
        assert_eq!(input.tags, vec!["rabbit", "young"]);
    }

    #[test]
    fn missing_fields_default_to_zero_values() {
        let input: ExpenseInput = serde_json::from_str(r#"{"title": "only title"}"#).unwrap();
        assert_eq!(input.amount, 0.0);
        assert!(input.note.is_empty());
        assert!(input.tags.is_empty());
    }

    #[test]
    fn null_tags_become_empty() {
        let input: ExpenseInput = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(input.tags.is_empty());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(serde_json::from_str::<ExpenseInput>(r#"{"amount": "seventy"}"#).is_err());
        assert!(serde_json::from_str::<ExpenseInput>(r#"{"tags": "rabbit"}"#).is_err());
    }

    #[test]
    fn serializes_with_id() {
        let expense = ExpenseInput {
            title: "Coffee".into(),
            amount: 3.5,
            note: "morning".into(),
            tags: vec!["food".into()],
        }
        .into_expense(7);

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["amount"], 3.5);
        assert_eq!(json["tags"][0], "food");
    }
}
