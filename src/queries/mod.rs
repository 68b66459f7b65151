//! Saved query management
//!
//! Saved queries persist a term and category under a memorable name so a
//! search can be recalled later.
//!
//! # Storage
//!
//! Queries are stored in TOML format at `~/.config/planfind/queries.toml` by
//! default. The location can be changed with the `queries_file` setting.

pub mod error;
pub mod operations;
pub mod types;

pub use error::QueryError;
pub use operations::QueryManager;
pub use types::{QueryStorage, SavedQuery, validate_query_name};
