use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Number of items returned by `/head` and `/tail` when no count is given
pub const DEFAULT_NUM_SAMPLES: i64 = 10;

/// A stored string and its server-generated identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Opaque identifier (UUID v4)
    #[schema(example = "5f0c7a52-3b1e-4a8e-9d55-0f2b6f5f8e21")]
    pub id: String,
    /// Stored payload
    #[schema(example = "String1")]
    pub value: String,
}

/// Single-entry map `{id: value}` returned when fetching one item
pub type ItemEntry = HashMap<String, String>;

impl Item {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Wire shape used by `GET /items/{id}`
    pub fn into_entry(self) -> ItemEntry {
        HashMap::from([(self.id, self.value)])
    }
}

/// Request body for creating or replacing an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemValue {
    #[schema(example = "NewItem")]
    pub value: String,
}

/// Response body for a created item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedItem {
    pub id: String,
}

/// Response body for the item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemCount {
    pub count: usize,
}

/// Query parameters for `/head` and `/tail`
#[derive(Debug, Clone, Copy, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SampleQuery {
    /// How many items to return
    #[serde(default = "default_num_samples")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 10)]
    pub num_samples: i64,
}

fn default_num_samples() -> i64 {
    DEFAULT_NUM_SAMPLES
}

impl Default for SampleQuery {
    fn default() -> Self {
        Self {
            num_samples: default_num_samples(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_entry_is_single_key_map() {
        let entry = Item::new("abc", "hello").into_entry();
        assert_eq!(entry.len(), 1);
        assert_eq!(entry.get("abc").map(String::as_str), Some("hello"));
    }

    #[test]
    fn test_sample_query_defaults_to_ten() {
        let query: SampleQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.num_samples, 10);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_sample_query_rejects_zero() {
        let query = SampleQuery { num_samples: 0 };
        assert!(query.validate().is_err());
    }
}
