use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameter names reserved for paging and sorting.
pub const PARAM_PAGE: &str = "page";
pub const PARAM_SIZE: &str = "size";
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_SORT: &str = "sort";

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Flattened page/sort/filter parameters sent to a list endpoint.
///
/// `filters` only ever holds constrained keys: blank values are dropped
/// before the query is built, so the server never sees `status=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub size: usize,
    pub sort_by: String,
    pub sort: SortOrder,
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    /// All query parameters, reserved keys overriding filters of the same name.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = self.filters.clone();
        params.insert(PARAM_PAGE.to_string(), self.page.to_string());
        params.insert(PARAM_SIZE.to_string(), self.size.to_string());
        params.insert(PARAM_SORT_BY.to_string(), self.sort_by.clone());
        params.insert(PARAM_SORT.to_string(), self.sort.as_str().to_string());
        params
    }
}

/// Pagination block of a list response.
///
/// Field names differ a little between resources, the aliases cover the
/// variants the API emits. Missing fields read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMeta {
    #[serde(alias = "page", alias = "currentPage")]
    pub page_number: usize,
    #[serde(alias = "size")]
    pub page_size: usize,
    #[serde(alias = "totalPages")]
    pub total_page: usize,
    #[serde(alias = "totalItems", alias = "totalElements")]
    pub total_item: usize,
}

/// One page of records as returned by a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(alias = "data", alias = "content")]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: PageMeta,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>, pagination: PageMeta) -> Self {
        Self { items, pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_params_override_filters() {
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), "active".to_string());
        filters.insert("page".to_string(), "99".to_string());
        let query = ListQuery {
            page: 2,
            size: 20,
            sort_by: "createdAt".to_string(),
            sort: SortOrder::Desc,
            filters,
        };

        let params = query.to_params();
        assert_eq!(params.get("page").map(String::as_str), Some("2"));
        assert_eq!(params.get("size").map(String::as_str), Some("20"));
        assert_eq!(params.get("sortBy").map(String::as_str), Some("createdAt"));
        assert_eq!(params.get("sort").map(String::as_str), Some("desc"));
        assert_eq!(params.get("status").map(String::as_str), Some("active"));
    }

    #[test]
    fn test_response_with_canonical_names() {
        let json = r#"{
            "items": [1, 2, 3],
            "pagination": { "pageNumber": 2, "pageSize": 3, "totalPage": 4, "totalItem": 11 }
        }"#;
        let response: ListResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(response.items, vec![1, 2, 3]);
        assert_eq!(
            response.pagination,
            PageMeta {
                page_number: 2,
                page_size: 3,
                total_page: 4,
                total_item: 11
            }
        );
    }

    #[test]
    fn test_response_with_aliased_names() {
        let json = r#"{
            "data": ["a"],
            "pagination": { "currentPage": 1, "size": 10, "totalPages": 1, "totalElements": 1 }
        }"#;
        let response: ListResponse<String> = serde_json::from_str(json).unwrap();
        assert_eq!(response.items, vec!["a".to_string()]);
        assert_eq!(response.pagination.total_page, 1);
        assert_eq!(response.pagination.total_item, 1);
    }

    #[test]
    fn test_missing_pagination_defaults_to_zero() {
        let response: ListResponse<u8> = serde_json::from_str(r#"{ "items": [] }"#).unwrap();
        assert_eq!(response.pagination, PageMeta::default());
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }
}
