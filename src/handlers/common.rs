use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::ApiResponse;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Standard success response
pub fn success_response<T: Serialize>(data: T, message: &str) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data, message))).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T, message: &str) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::success(data, message))).into_response()
}

/// Success envelope without a payload
pub fn acknowledged_response(message: &str) -> Response {
    (StatusCode::OK, Json(ApiResponse::<()>::acknowledged(message))).into_response()
}

/// Raw pagination query parameters.
///
/// Kept as text so that malformed values fall back to defaults instead of
/// failing the request.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

impl PaginationParams {
    /// Picks `page` and `limit` out of the raw query pairs. Each key is read
    /// on its own and a repeated key keeps its last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |mut params, (key, value)| {
                match key.as_str() {
                    "page" => params.page = Some(value),
                    "limit" => params.limit = Some(value),
                    _ => {}
                }
                params
            })
    }
}

/// Resolved page number and size, both at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn from_params(params: &PaginationParams) -> Self {
        Self {
            page: parse_positive(params.page.as_deref(), DEFAULT_PAGE),
            limit: parse_positive(params.limit.as_deref(), DEFAULT_LIMIT),
        }
    }

    /// Calculate zero-based offset for pagination
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Parses the leading integer of `raw`, accepting trailing garbage
/// (`"3abc"` is 3, `"2.9"` is 2). Anything that does not yield a positive
/// integer returns `default`.
pub fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    let Some(raw) = raw else {
        return default;
    };
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if negative || digits.is_empty() {
        return default;
    }
    match digits.parse::<i64>() {
        Ok(value) if value > 0 => value as u64,
        _ => default,
    }
}

/// Pagination summary returned alongside every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    pub fn new(total: u64, request: PageRequest) -> Self {
        let limit = request.limit.max(1);
        let total_pages = total.div_ceil(limit);
        Self {
            total,
            total_pages,
            current_page: request.page,
            limit,
            has_next_page: request.page < total_pages,
            has_previous_page: request.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 10)]
    #[case(Some(""), 10)]
    #[case(Some("abc"), 10)]
    #[case(Some("0"), 10)]
    #[case(Some("-5"), 10)]
    #[case(Some("3abc"), 3)]
    #[case(Some("2.9"), 2)]
    #[case(Some("  7"), 7)]
    #[case(Some("+4"), 4)]
    #[case(Some("25"), 25)]
    #[case(Some("99999999999999999999999"), 10)]
    fn parse_positive_falls_back_to_default(#[case] raw: Option<&str>, #[case] expected: u64) {
        assert_eq!(parse_positive(raw, 10), expected);
    }

    #[test]
    fn page_request_uses_defaults_for_garbage() {
        let params = PaginationParams {
            page: Some("zero".into()),
            limit: Some("-1".into()),
        };
        assert_eq!(PageRequest::from_params(&params), PageRequest::default());
    }

    #[test]
    fn repeated_keys_keep_last_value() {
        let pairs = vec![
            ("page".to_string(), "1".to_string()),
            ("sort".to_string(), "name".to_string()),
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "3".to_string()),
        ];
        let params = PaginationParams::from_pairs(pairs);
        assert_eq!(params.page.as_deref(), Some("2"));
        assert_eq!(params.limit.as_deref(), Some("3"));
        assert_eq!(
            PageRequest::from_params(&params),
            PageRequest { page: 2, limit: 3 }
        );
    }

    #[test]
    fn offset_saturates() {
        let request = PageRequest {
            page: u64::MAX,
            limit: u64::MAX,
        };
        assert_eq!(request.offset(), u64::MAX);
        assert_eq!(PageRequest { page: 3, limit: 10 }.offset(), 20);
    }

    #[rstest]
    #[case(0, 1, 10, 0, false, false)]
    #[case(25, 1, 10, 3, true, false)]
    #[case(25, 3, 10, 3, false, true)]
    #[case(25, 5, 10, 3, false, true)]
    #[case(30, 2, 10, 3, true, true)]
    fn pagination_summary(
        #[case] total: u64,
        #[case] page: u64,
        #[case] limit: u64,
        #[case] total_pages: u64,
        #[case] has_next: bool,
        #[case] has_previous: bool,
    ) {
        let p = Pagination::new(total, PageRequest { page, limit });
        assert_eq!(p.total_pages, total_pages);
        assert_eq!(p.has_next_page, has_next);
        assert_eq!(p.has_previous_page, has_previous);
        assert_eq!(p.current_page, page);
    }

    #[test]
    fn pagination_serializes_camel_case() {
        let json = serde_json::to_value(Pagination::new(5, PageRequest::default())).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["hasNextPage"], false);
        assert_eq!(json["hasPreviousPage"], false);
    }
}
