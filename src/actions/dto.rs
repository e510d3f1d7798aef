//! JSON records written by the actions.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// A code and the URL it resolves to (`add`, `get`, list items).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub short_code: String,
    pub raw_url: String,
}

impl From<UrlMapping> for ResultResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            short_code: mapping.short_code,
            raw_url: mapping.original_url,
        }
    }
}

/// One page of mappings with the pagination that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<ResultResponse>,
    pub count: usize,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: bool,
    pub short_code: String,
}
