//! # lens-scholar-client
//!
//! A Rust client for The Lens Scholar API.
//!
//! Provides:
//! - **Query builder**: typed construction of Elasticsearch boolean queries
//!   over the catalogued searchable fields, validated before anything is sent
//! - **Client**: blocking HTTP client for search, record lookup, and usage
//!
//! ## Quick Start
//!
//! ```no_run
//! # fn example() -> lens_scholar_client::Result<()> {
//! use lens_scholar_client::{
//!     Field, FieldQuery, LensClient, MatchType, Occurrence, QueryBuilder, RangeBounds,
//! };
//!
//! // Create client from the LENS_SCHOLAR_API_KEY environment variable
//! let client = LensClient::from_env()?;
//!
//! let query = QueryBuilder::new()
//!     .with(FieldQuery::new(
//!         Field::Title,
//!         Occurrence::Must,
//!         MatchType::MatchPhrase,
//!         "machine learning",
//!     )?)
//!     .with(FieldQuery::range(
//!         Field::YearPublished,
//!         Occurrence::Filter,
//!         RangeBounds::new().gte("2019").lte("2021"),
//!     )?)
//!     .query_string();
//!
//! let response = client.scholar_request(&query, 10)?;
//! println!("{} results", response["total"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Query Builder
//!
//! ```
//! use lens_scholar_client::{Field, FieldQuery, MatchType, Occurrence, QueryBuilder};
//!
//! let author = FieldQuery::new(
//!     Field::AuthorLastName,
//!     Occurrence::Must,
//!     MatchType::Term,
//!     "Smith",
//! ).unwrap();
//! let query = QueryBuilder::new().with(author).query_string();
//! assert_eq!(
//!     query,
//!     r#"{"query":{"bool":{"must":[{"term":{"author.last_name":"Smith"}}]}}}"#
//! );
//! ```

pub mod client;
pub mod error;
pub mod fields;
pub mod query;
pub mod records;
pub mod search;
pub mod usage;

// Re-export key types at the crate root.
pub use client::{LensClient, API_KEY_ENV, DEFAULT_BASE_URL};
pub use error::{LensError, Result};
pub use fields::{Field, FieldGroup, FieldKind};
pub use query::{FieldQuery, MatchType, Occurrence, QueryBuilder, RangeBounds};
pub use search::{SearchOptions, Sort, SortOrder, MAX_RESULT_SIZE};
