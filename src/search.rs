//! Scholarly search endpoint.

use crate::client::LensClient;
use crate::error::{LensError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

/// Largest result count the API accepts per request.
pub const MAX_RESULT_SIZE: u32 = 1_000;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// One sort criterion, e.g. `relevance desc` or `year_published asc`.
#[derive(Debug, Clone)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

impl Sort {
    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }

    fn to_value(&self) -> Value {
        json!({ (self.field.as_str()): self.order.as_api_str() })
    }
}

/// Optional request parameters for [`LensClient::scholar_request_with_options`].
///
/// Everything here is passed through to the API verbatim; unset members are
/// omitted from the request body.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    sort: Vec<Sort>,
    include: Vec<String>,
    exclude: Vec<String>,
    from: Option<u32>,
    stemming: Option<bool>,
    regex: Option<bool>,
    min_score: Option<f64>,
    scroll: Option<String>,
    scroll_id: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sort criterion (applied in insertion order).
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    /// Add a response field to include.
    pub fn include(mut self, field: impl Into<String>) -> Self {
        self.include.push(field.into());
        self
    }

    /// Add a response field to exclude.
    pub fn exclude(mut self, field: impl Into<String>) -> Self {
        self.exclude.push(field.into());
        self
    }

    /// Result offset for offset-based pagination.
    pub fn from(mut self, offset: u32) -> Self {
        self.from = Some(offset);
        self
    }

    /// Enable or disable stemming in text search.
    pub fn stemming(mut self, enabled: bool) -> Self {
        self.stemming = Some(enabled);
        self
    }

    /// Allow regular-expression queries.
    pub fn regex(mut self, enabled: bool) -> Self {
        self.regex = Some(enabled);
        self
    }

    /// Minimum relevance score for returned records.
    pub fn min_score(mut self, score: f64) -> Self {
        self.min_score = Some(score);
        self
    }

    /// Keep-alive window for cursor pagination, e.g. `"1m"`.
    pub fn scroll(mut self, window: impl Into<String>) -> Self {
        self.scroll = Some(window.into());
        self
    }

    /// Cursor returned by a previous scrolled request.
    pub fn scroll_id(mut self, id: impl Into<String>) -> Self {
        self.scroll_id = Some(id.into());
        self
    }
}

impl LensClient {
    /// Search the scholarly database.
    ///
    /// `query` is a JSON query document, typically
    /// [`QueryBuilder::query_string`](crate::QueryBuilder::query_string)
    /// output. Returns the decoded response body as-is.
    pub fn scholar_request(&self, query: &str, size: u32) -> Result<Value> {
        self.scholar_request_with_options(query, size, &SearchOptions::default())
    }

    /// Search with full control over sorting, projections, and pagination.
    pub fn scholar_request_with_options(
        &self,
        query: &str,
        size: u32,
        options: &SearchOptions,
    ) -> Result<Value> {
        let body = build_request_body(query, size, options)?;
        debug!(size, "scholar search");
        let text = self.post_json("/scholarly/search", &body)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Assemble the request body. The query string must be valid JSON; a document
/// already carrying a top-level `"query"` key (the builder's output) is used
/// as the base, anything else is wrapped under `"query"`.
fn build_request_body(query: &str, size: u32, options: &SearchOptions) -> Result<Value> {
    if size > MAX_RESULT_SIZE {
        return Err(LensError::Validation(format!(
            "size {size} exceeds the API maximum of {MAX_RESULT_SIZE}"
        )));
    }

    let parsed: Value = serde_json::from_str(query)
        .map_err(|e| LensError::Validation(format!("query is not valid JSON: {e}")))?;

    let mut body = match parsed {
        Value::Object(map) if map.contains_key("query") => map,
        other => {
            let mut map = Map::new();
            map.insert("query".to_string(), other);
            map
        }
    };

    body.insert("size".to_string(), json!(size));
    if !options.sort.is_empty() {
        let sorts: Vec<Value> = options.sort.iter().map(Sort::to_value).collect();
        body.insert("sort".to_string(), Value::Array(sorts));
    }
    if !options.include.is_empty() {
        body.insert("include".to_string(), json!(options.include));
    }
    if !options.exclude.is_empty() {
        body.insert("exclude".to_string(), json!(options.exclude));
    }
    if let Some(from) = options.from {
        body.insert("from".to_string(), json!(from));
    }
    if let Some(stemming) = options.stemming {
        body.insert("stemming".to_string(), json!(stemming));
    }
    if let Some(regex) = options.regex {
        body.insert("regex".to_string(), json!(regex));
    }
    if let Some(min_score) = options.min_score {
        body.insert("min_score".to_string(), json!(min_score));
    }
    if let Some(scroll) = &options.scroll {
        body.insert("scroll".to_string(), json!(scroll));
    }
    if let Some(scroll_id) = &options.scroll_id {
        body.insert("scroll_id".to_string(), json!(scroll_id));
    }

    Ok(Value::Object(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryBuilder;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> LensClient {
        LensClient::new("test-key")
            .unwrap()
            .with_base_url(server.url())
            .unwrap()
    }

    #[test]
    fn test_body_uses_builder_document_as_base() {
        let query = QueryBuilder::new().query_string();
        let body = build_request_body(&query, 10, &SearchOptions::default()).unwrap();
        assert_eq!(body["query"], json!({"match_all": {}}));
        assert_eq!(body["size"], json!(10));
    }

    #[test]
    fn test_body_wraps_bare_clause() {
        let body =
            build_request_body(r#"{"match":{"title":"crispr"}}"#, 5, &SearchOptions::default())
                .unwrap();
        assert_eq!(body["query"], json!({"match": {"title": "crispr"}}));
    }

    #[test]
    fn test_body_rejects_invalid_json() {
        let err = build_request_body("title:crispr", 5, &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_options_pass_through() {
        let options = SearchOptions::new()
            .sort(Sort::desc("relevance"))
            .sort(Sort::asc("year_published"))
            .include("lens_id")
            .include("title")
            .from(40)
            .stemming(false)
            .min_score(0.5)
            .scroll("1m")
            .scroll_id("cursor-abc");
        let body = build_request_body(r#"{"query":{"match_all":{}}}"#, 100, &options).unwrap();

        assert_eq!(
            body["sort"],
            json!([{"relevance": "desc"}, {"year_published": "asc"}])
        );
        assert_eq!(body["include"], json!(["lens_id", "title"]));
        assert!(body.get("exclude").is_none());
        assert_eq!(body["from"], json!(40));
        assert_eq!(body["stemming"], json!(false));
        assert!(body.get("regex").is_none());
        assert_eq!(body["min_score"], json!(0.5));
        assert_eq!(body["scroll"], json!("1m"));
        assert_eq!(body["scroll_id"], json!("cursor-abc"));
    }

    #[test]
    fn test_oversize_fails_before_any_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/scholarly/search")
            .expect(0)
            .create();
        let client = client_for(&server);

        let err = client
            .scholar_request(r#"{"query":{"match_all":{}}}"#, MAX_RESULT_SIZE + 1)
            .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
        mock.assert();
    }

    #[test]
    fn test_search_returns_decoded_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/scholarly/search")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "query": {"match_all": {}},
                "size": 5,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"total": 0, "data": []}"#)
            .create();
        let client = client_for(&server);

        let response = client
            .scholar_request(&QueryBuilder::new().query_string(), 5)
            .unwrap();
        assert_eq!(response, json!({"total": 0, "data": []}));
        mock.assert();
    }

    #[test]
    fn test_unauthorized_maps_to_api_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/scholarly/search")
            .with_status(401)
            .with_body(r#"{"message": "invalid api key"}"#)
            .create();
        let client = client_for(&server);

        let err = client
            .scholar_request(r#"{"query":{"match_all":{}}}"#, 10)
            .unwrap_err();
        match err {
            LensError::Api { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("invalid api key"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
