use serde_derive::{Deserialize, Serialize};

use super::Object;

/// Pagination metadata shared by every list response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListMeta {
    pub has_more: bool,
    pub url: String,
    /// Only present when the request asked for `total_count`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

/// One page of a list endpoint: `{"object": "list", "data": [...], "has_more": ..}`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct List<T> {
    #[serde(default = "list_object")]
    pub object: String,
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(flatten)]
    pub meta: ListMeta,
}

fn list_object() -> String {
    "list".to_string()
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List {
            object: list_object(),
            data: Vec::new(),
            meta: ListMeta::default(),
        }
    }
}

impl<T> List<T> {
    pub fn has_more(&self) -> bool {
        self.meta.has_more
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Object> List<T> {
    pub fn first_id(&self) -> Option<&str> {
        self.data.first().map(Object::id)
    }

    pub fn last_id(&self) -> Option<&str> {
        self.data.last().map(Object::id)
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
