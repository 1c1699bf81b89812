//! Typed Elasticsearch query construction for the Lens Scholar API.
//!
//! A [`FieldQuery`] describes one field's match condition; a [`QueryBuilder`]
//! partitions any number of them into the boolean occurrence buckets and
//! serializes the result as the request's query document.
//!
//! # Example
//!
//! ```
//! use lens_scholar_client::{Field, FieldQuery, MatchType, Occurrence, QueryBuilder, RangeBounds};
//!
//! let title = FieldQuery::new(
//!     Field::Title,
//!     Occurrence::Must,
//!     MatchType::MatchPhrase,
//!     "machine learning",
//! ).unwrap();
//! let years = FieldQuery::range(
//!     Field::YearPublished,
//!     Occurrence::Filter,
//!     RangeBounds::new().gte("2019").lte("2021"),
//! ).unwrap();
//!
//! let query = QueryBuilder::new().with(title).with(years).query_string();
//! assert!(query.contains("match_phrase"));
//! ```

use crate::error::{LensError, Result};
use crate::fields::{Field, FieldKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::trace;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Boolean-query role of a clause: how it affects scoring and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occurrence {
    Must,
    Should,
    Filter,
    MustNot,
}

impl Occurrence {
    /// The occurrence bucket name in the emitted bool query.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Must => "must",
            Self::Should => "should",
            Self::Filter => "filter",
            Self::MustNot => "must_not",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "must" => Some(Self::Must),
            "should" => Some(Self::Should),
            "filter" => Some(Self::Filter),
            "must_not" => Some(Self::MustNot),
            _ => None,
        }
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// Clause shape applied to a field's value.
///
/// Range clauses are built separately through [`FieldQuery::range`] since
/// their value is a set of bounds rather than a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Exact term match. Avoid on free-text fields.
    Term,
    /// Match any of a list of terms; requires a non-empty list value.
    Terms,
    /// Analyzed full-text match.
    Match,
    /// Analyzed phrase match.
    MatchPhrase,
}

impl MatchType {
    /// The clause key in the emitted query.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::Terms => "terms",
            Self::Match => "match",
            Self::MatchPhrase => "match_phrase",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "term" => Some(Self::Term),
            "terms" => Some(Self::Terms),
            "match" => Some(Self::Match),
            "match_phrase" => Some(Self::MatchPhrase),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// Bounds for a range clause. At most one lower bound (`gte` or `gt`) and at
/// most one upper bound (`lte` or `lt`) may be set; at least one bound is
/// required overall.
#[derive(Debug, Clone, Default)]
pub struct RangeBounds {
    gte: Option<Value>,
    gt: Option<Value>,
    lte: Option<Value>,
    lt: Option<Value>,
}

impl RangeBounds {
    /// Create empty bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Greater-than-or-equal bound.
    pub fn gte(mut self, value: impl Into<Value>) -> Self {
        self.gte = Some(value.into());
        self
    }

    /// Strict greater-than bound.
    pub fn gt(mut self, value: impl Into<Value>) -> Self {
        self.gt = Some(value.into());
        self
    }

    /// Less-than-or-equal bound.
    pub fn lte(mut self, value: impl Into<Value>) -> Self {
        self.lte = Some(value.into());
        self
    }

    /// Strict less-than bound.
    pub fn lt(mut self, value: impl Into<Value>) -> Self {
        self.lt = Some(value.into());
        self
    }

    fn lower(&self) -> Option<&Value> {
        self.gte.as_ref().or(self.gt.as_ref())
    }

    fn upper(&self) -> Option<&Value> {
        self.lte.as_ref().or(self.lt.as_ref())
    }

    fn validate(&self, field: Field) -> Result<()> {
        if self.gte.is_some() && self.gt.is_some() {
            return Err(LensError::Validation(format!(
                "{field}: only one of 'gte' or 'gt' may be set"
            )));
        }
        if self.lte.is_some() && self.lt.is_some() {
            return Err(LensError::Validation(format!(
                "{field}: only one of 'lte' or 'lt' may be set"
            )));
        }
        if self.lower().is_none() && self.upper().is_none() {
            return Err(LensError::Validation(format!(
                "{field}: range requires at least one bound"
            )));
        }
        for bound in [&self.gte, &self.gt, &self.lte, &self.lt].into_iter().flatten() {
            validate_scalar(field, bound)?;
        }
        if let (Some(lower), Some(upper)) = (self.lower(), self.upper()) {
            if bound_exceeds(lower, upper) {
                return Err(LensError::Validation(format!(
                    "{field}: lower bound {lower} exceeds upper bound {upper}"
                )));
            }
        }
        Ok(())
    }

    fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(v) = &self.gte {
            map.insert("gte".to_string(), v.clone());
        }
        if let Some(v) = &self.gt {
            map.insert("gt".to_string(), v.clone());
        }
        if let Some(v) = &self.lte {
            map.insert("lte".to_string(), v.clone());
        }
        if let Some(v) = &self.lt {
            map.insert("lt".to_string(), v.clone());
        }
        Value::Object(map)
    }
}

/// True when `lower` is strictly greater than `upper`, for comparable bounds.
/// Mixed-type bounds are left to the API to reject.
fn bound_exceeds(lower: &Value, upper: &Value) -> bool {
    match (lower, upper) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        },
        (Value::String(a), Value::String(b)) => a > b,
        _ => false,
    }
}

/// Check one literal against the field's accepted kind and restrictions.
fn validate_scalar(field: Field, value: &Value) -> Result<()> {
    let ok = match field.kind() {
        FieldKind::Text => value.is_string(),
        FieldKind::Integer => value.is_i64() || value.is_u64(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Year => match value {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => s.parse::<i32>().is_ok(),
            _ => false,
        },
        FieldKind::Date => value
            .as_str()
            .map(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok())
            .unwrap_or(false),
    };
    if !ok {
        return Err(LensError::Validation(format!(
            "{field}: value {value} does not match the field's {:?} kind",
            field.kind()
        )));
    }
    if let (Some(allowed), Some(s)) = (field.restrictions(), value.as_str()) {
        if !allowed.contains(&s) {
            return Err(LensError::Validation(format!(
                "{field}: '{s}' is not an accepted value"
            )));
        }
    }
    Ok(())
}

/// One field's match condition, validated at construction and immutable.
#[derive(Debug, Clone)]
pub struct FieldQuery {
    field: Field,
    occurrence: Occurrence,
    clause: Value,
}

impl FieldQuery {
    /// Build a term/terms/match/match_phrase condition for `field`.
    ///
    /// `Terms` requires a non-empty array of literals; the other match types
    /// require a single literal. Literals are checked against the field's
    /// kind and restriction list.
    pub fn new(
        field: Field,
        occurrence: Occurrence,
        match_type: MatchType,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let value = value.into();
        match match_type {
            MatchType::Terms => {
                let items = value.as_array().ok_or_else(|| {
                    LensError::Validation(format!("{field}: 'terms' requires a list of values"))
                })?;
                if items.is_empty() {
                    return Err(LensError::Validation(format!(
                        "{field}: 'terms' requires a non-empty list"
                    )));
                }
                for item in items {
                    validate_scalar(field, item)?;
                }
            }
            _ => {
                if value.is_array() || value.is_object() {
                    return Err(LensError::Validation(format!(
                        "{field}: '{match_type}' requires a single value"
                    )));
                }
                validate_scalar(field, &value)?;
            }
        }

        trace!(%field, %occurrence, %match_type, "built field query");
        Ok(Self {
            field,
            occurrence,
            clause: json!({ (match_type.as_api_str()): { (field.as_api_str()): value } }),
        })
    }

    /// Build a range condition for a numeric or date `field`.
    pub fn range(field: Field, occurrence: Occurrence, bounds: RangeBounds) -> Result<Self> {
        if !field.supports_range() {
            return Err(LensError::Validation(format!(
                "{field}: range queries apply only to numeric and date fields"
            )));
        }
        bounds.validate(field)?;

        trace!(%field, %occurrence, "built range query");
        Ok(Self {
            field,
            occurrence,
            clause: json!({ "range": { (field.as_api_str()): bounds.to_value() } }),
        })
    }

    /// Build a condition on a boolean filter field.
    ///
    /// Under `filter` occurrence the flag is emitted as a `term` clause
    /// (no scoring); under the others as a `match` clause.
    pub fn boolean(field: Field, occurrence: Occurrence, value: bool) -> Result<Self> {
        if field.kind() != FieldKind::Boolean {
            return Err(LensError::Validation(format!(
                "{field}: not a boolean filter field"
            )));
        }
        let match_type = if occurrence == Occurrence::Filter {
            MatchType::Term
        } else {
            MatchType::Match
        };
        Self::new(field, occurrence, match_type, value)
    }

    /// The queried field.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The occurrence bucket this condition lands in.
    pub fn occurrence(&self) -> Occurrence {
        self.occurrence
    }

    /// The emitted clause, e.g. `{"match_phrase": {"title": "..."}}`.
    pub fn clause(&self) -> &Value {
        &self.clause
    }
}

/// Combines [`FieldQuery`] conditions into one boolean query document.
///
/// Conditions are partitioned by occurrence; empty buckets are omitted from
/// the output. With no conditions at all the builder emits a `match_all`
/// query. Serialization is deterministic: repeated [`query_string`] calls on
/// the same builder yield byte-identical output.
///
/// [`query_string`]: QueryBuilder::query_string
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    must: Vec<Value>,
    should: Vec<Value>,
    must_not: Vec<Value>,
    filter: Vec<Value>,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one condition.
    pub fn with(mut self, query: FieldQuery) -> Self {
        self.push(query);
        self
    }

    fn push(&mut self, query: FieldQuery) {
        let bucket = match query.occurrence {
            Occurrence::Must => &mut self.must,
            Occurrence::Should => &mut self.should,
            Occurrence::MustNot => &mut self.must_not,
            Occurrence::Filter => &mut self.filter,
        };
        bucket.push(query.clause);
    }

    /// The query document: `{"query": {"bool": {...}}}` with only the
    /// non-empty occurrence buckets, or `{"query": {"match_all": {}}}` when
    /// the builder holds no conditions.
    pub fn to_value(&self) -> Value {
        let mut buckets = Map::new();
        for (name, clauses) in [
            ("must", &self.must),
            ("should", &self.should),
            ("must_not", &self.must_not),
            ("filter", &self.filter),
        ] {
            if !clauses.is_empty() {
                buckets.insert(name.to_string(), Value::Array(clauses.clone()));
            }
        }

        if buckets.is_empty() {
            json!({ "query": { "match_all": {} } })
        } else {
            json!({ "query": { "bool": buckets } })
        }
    }

    /// Serialized query document, ready to pass to
    /// [`scholar_request`](crate::LensClient::scholar_request).
    pub fn query_string(&self) -> String {
        self.to_value().to_string()
    }
}

impl Extend<FieldQuery> for QueryBuilder {
    fn extend<T: IntoIterator<Item = FieldQuery>>(&mut self, iter: T) {
        for query in iter {
            self.push(query);
        }
    }
}

impl FromIterator<FieldQuery> for QueryBuilder {
    fn from_iter<T: IntoIterator<Item = FieldQuery>>(iter: T) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

impl std::fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_phrase() -> FieldQuery {
        FieldQuery::new(
            Field::Title,
            Occurrence::Must,
            MatchType::MatchPhrase,
            "machine learning",
        )
        .unwrap()
    }

    #[test]
    fn test_example_document_byte_exact() {
        let years = FieldQuery::range(
            Field::YearPublished,
            Occurrence::Filter,
            RangeBounds::new().gte("2019").lte("2021"),
        )
        .unwrap();
        let query = QueryBuilder::new().with(title_phrase()).with(years);

        assert_eq!(
            query.query_string(),
            r#"{"query":{"bool":{"must":[{"match_phrase":{"title":"machine learning"}}],"filter":[{"range":{"year_published":{"gte":"2019","lte":"2021"}}}]}}}"#
        );
    }

    #[test]
    fn test_clause_lands_in_named_bucket() {
        for (occurrence, bucket) in [
            (Occurrence::Must, "must"),
            (Occurrence::Should, "should"),
            (Occurrence::Filter, "filter"),
            (Occurrence::MustNot, "must_not"),
        ] {
            let q = FieldQuery::new(Field::Abstract, occurrence, MatchType::Match, "virus")
                .unwrap();
            let doc = QueryBuilder::new().with(q).to_value();
            let bool_query = &doc["query"]["bool"];
            let clauses = bool_query[bucket].as_array().unwrap();
            assert_eq!(clauses.len(), 1);
            assert_eq!(clauses[0], json!({"match": {"abstract": "virus"}}));
            // exactly one bucket present
            assert_eq!(bool_query.as_object().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_no_empty_buckets_emitted() {
        let must = title_phrase();
        let not = FieldQuery::new(
            Field::PublicationType,
            Occurrence::MustNot,
            MatchType::Term,
            "preprint",
        )
        .unwrap();
        let doc = QueryBuilder::new().with(must).with(not).to_value();
        let buckets = doc["query"]["bool"].as_object().unwrap();
        assert!(buckets.contains_key("must"));
        assert!(buckets.contains_key("must_not"));
        assert!(!buckets.contains_key("should"));
        assert!(!buckets.contains_key("filter"));
    }

    #[test]
    fn test_query_string_idempotent() {
        let builder = QueryBuilder::new().with(title_phrase());
        assert_eq!(builder.query_string(), builder.query_string());
    }

    #[test]
    fn test_empty_builder_emits_match_all() {
        let builder = QueryBuilder::new();
        assert_eq!(builder.query_string(), r#"{"query":{"match_all":{}}}"#);
    }

    #[test]
    fn test_terms_accepts_list() {
        let q = FieldQuery::new(
            Field::AuthorCount,
            Occurrence::Must,
            MatchType::Terms,
            json!([1, 2, 3]),
        )
        .unwrap();
        assert_eq!(q.clause(), &json!({"terms": {"author_count": [1, 2, 3]}}));
    }

    #[test]
    fn test_terms_rejects_empty_list() {
        let err = FieldQuery::new(
            Field::Keyword,
            Occurrence::Should,
            MatchType::Terms,
            json!([]),
        )
        .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_terms_rejects_scalar() {
        let err =
            FieldQuery::new(Field::Keyword, Occurrence::Must, MatchType::Terms, "crispr")
                .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_term_rejects_list() {
        let err = FieldQuery::new(
            Field::Keyword,
            Occurrence::Must,
            MatchType::Term,
            json!(["a", "b"]),
        )
        .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_value_kind_enforced() {
        // integer field given a string
        assert!(FieldQuery::new(Field::AuthorCount, Occurrence::Must, MatchType::Term, "three")
            .is_err());
        // text field given a number
        assert!(
            FieldQuery::new(Field::Title, Occurrence::Must, MatchType::Match, 42).is_err()
        );
    }

    #[test]
    fn test_restricted_values_enforced() {
        assert!(FieldQuery::new(
            Field::PublicationType,
            Occurrence::Filter,
            MatchType::Term,
            "journal article",
        )
        .is_ok());
        let err = FieldQuery::new(
            Field::PublicationType,
            Occurrence::Filter,
            MatchType::Term,
            "blog post",
        )
        .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_date_format_enforced() {
        assert!(FieldQuery::new(
            Field::DatePublished,
            Occurrence::Must,
            MatchType::Term,
            "2020-02-29",
        )
        .is_ok());
        assert!(FieldQuery::new(
            Field::DatePublished,
            Occurrence::Must,
            MatchType::Term,
            "02/29/2020",
        )
        .is_err());
    }

    #[test]
    fn test_range_requires_rangeable_field() {
        let err = FieldQuery::range(
            Field::Title,
            Occurrence::Filter,
            RangeBounds::new().gte("a"),
        )
        .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_range_rejects_conflicting_bounds() {
        let err = FieldQuery::range(
            Field::YearPublished,
            Occurrence::Filter,
            RangeBounds::new().gte(2019).gt(2018),
        )
        .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_range_rejects_no_bounds() {
        let err = FieldQuery::range(Field::AuthorCount, Occurrence::Filter, RangeBounds::new())
            .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = FieldQuery::range(
            Field::AuthorCount,
            Occurrence::Filter,
            RangeBounds::new().gte(10).lte(2),
        )
        .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));

        let err = FieldQuery::range(
            Field::DatePublished,
            Occurrence::Filter,
            RangeBounds::new().gte("2021-01-01").lte("2019-01-01"),
        )
        .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_range_validates_date_bounds() {
        let err = FieldQuery::range(
            Field::Created,
            Occurrence::Must,
            RangeBounds::new().gte("2019-13-01"),
        )
        .unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_boolean_filter_emits_term_under_filter() {
        let q = FieldQuery::boolean(Field::IsOpenAccess, Occurrence::Filter, true).unwrap();
        assert_eq!(q.clause(), &json!({"term": {"is_open_access": true}}));

        let q = FieldQuery::boolean(Field::HasAbstract, Occurrence::Must, false).unwrap();
        assert_eq!(q.clause(), &json!({"match": {"has_abstract": false}}));
    }

    #[test]
    fn test_boolean_requires_flag_field() {
        let err = FieldQuery::boolean(Field::Title, Occurrence::Filter, true).unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }

    #[test]
    fn test_from_iterator() {
        let queries = vec![
            title_phrase(),
            FieldQuery::new(
                Field::Abstract,
                Occurrence::Should,
                MatchType::Terms,
                json!(["deep learning", "neural network"]),
            )
            .unwrap(),
        ];
        let builder: QueryBuilder = queries.into_iter().collect();
        let doc = builder.to_value();
        assert_eq!(doc["query"]["bool"]["must"].as_array().unwrap().len(), 1);
        assert_eq!(doc["query"]["bool"]["should"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_occurrence_and_match_type_parsing() {
        assert_eq!(Occurrence::from_str_loose("MUST_NOT"), Some(Occurrence::MustNot));
        assert_eq!(Occurrence::from_str_loose("maybe"), None);
        assert_eq!(
            MatchType::from_str_loose("match_phrase"),
            Some(MatchType::MatchPhrase)
        );
        assert_eq!(MatchType::from_str_loose("fuzzy"), None);
    }

    #[test]
    fn test_year_accepts_int_or_digit_string() {
        assert!(FieldQuery::new(Field::YearPublished, Occurrence::Must, MatchType::Term, 2020)
            .is_ok());
        assert!(FieldQuery::new(
            Field::YearPublished,
            Occurrence::Must,
            MatchType::Term,
            "2020"
        )
        .is_ok());
        assert!(FieldQuery::new(
            Field::YearPublished,
            Occurrence::Must,
            MatchType::Term,
            "twenty-twenty"
        )
        .is_err());
    }
}
