use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every list response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PageInfo {
    pub count: i64,
    pub pages: i64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of a list endpoint.
///
/// Both fields fall back to their empty values: the upstream answers a filtered
/// query without matches with a bare `{"error": "..."}` object.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageEnvelope<T> {
    #[serde(default)]
    pub info: PageInfo,
    #[serde(default)]
    pub results: Vec<T>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub data: T,
}
