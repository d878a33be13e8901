//! Elasticsearch Search Request Builders
//!
//! This crate builds Elasticsearch `_search` and `_msearch` request bodies
//! through small fluent handles instead of hand-written nested JSON. Every DSL
//! field it models can be written at most once, so a clause configured in one
//! place cannot be silently overwritten somewhere else.
//!
//! # Architecture
//!
//! ```text
//! MultiSearchBuilder ─┐
//!                     ├──► SearchBodyBuilder ──► SuggestBuilder
//!      SearchBuilder ─┘            │
//!                                  ▼
//!                            QueryBuilder ──► BoolQueryBuilder ──► Filter / Must / Should
//!                                  ▲                                  │
//!                                  └──── create_query / create_nested_query
//! ```
//!
//! Each factory (`create_*` / `add_*`) inserts an empty object into the body
//! and returns a handle over it. All handles created from one root share that
//! root's tree, so the order in which clauses are configured does not matter;
//! `build()` always renders the current state.
//!
//! # Set-once semantics
//!
//! - Leaf setters (`set_*`) fail with [`BuilderError::AlreadySet`] on a second
//!   call for the same field.
//! - Singleton factories (`create_query`, `create_bool_query`,
//!   `create_nested_query`) fail with [`BuilderError::AlreadyExists`];
//!   `create_suggest` fails with [`BuilderError::SuggestExists`] for a
//!   repeated name.
//! - `add_filter`, `add_must`, `add_should`, `create_search` and
//!   `set_minimum_should_match` never fail.
//!
//! # Multi-search
//!
//! ```
//! use es_search_builder::MultiSearchBuilder;
//! use serde_json::json;
//!
//! # fn main() -> es_search_builder::BuilderResult<()> {
//! let mut msearch = MultiSearchBuilder::new();
//!
//! let patients = msearch.create_search(json!({ "index": "patients" }));
//! patients.set_search_take(20)?;
//! let bool_query = patients.create_query()?.create_bool_query()?;
//! bool_query.add_filter().set_term(json!({ "status": "Active" }))?;
//! bool_query.add_must().set_match(json!({ "name": "smith" }))?;
//!
//! let names = msearch.create_search(json!({ "index": "names" }));
//! names
//!     .create_suggest("name-suggest")?
//!     .set_suggest_text("smi")?
//!     .set_suggest_completion(json!({ "field": "name.suggest", "size": 5 }))?;
//!
//! let payload = msearch.build();
//! assert_eq!(payload.len(), 4);
//! assert_eq!(payload[2], json!({ "index": "names" }));
//! # Ok(())
//! # }
//! ```

pub mod clause;
pub mod error;
pub mod multi_search;
mod node;
pub mod query;
pub mod search;
pub mod suggest;

pub use clause::{Filter, Must, Should};
pub use error::{BuilderError, BuilderResult};
pub use multi_search::MultiSearchBuilder;
pub use query::{BoolQueryBuilder, QueryBuilder};
pub use search::{SearchBodyBuilder, SearchBuilder};
pub use suggest::SuggestBuilder;
