//! # regeng-query
//!
//! Key-addressed read cache and mutation layer over [`regeng_client`].
//!
//! Reads are cached by `(operation, parameters)` with per-operation staleness
//! windows and stale-while-revalidate semantics: a stale hit serves the last
//! known value while a background refetch replaces it. Concurrent reads for
//! the same key collapse into one in-flight request. Mutations never populate
//! the cache; on success they invalidate the entries they affect.
//!
//! Health checks poll on their own fixed interval, outside the cache: a poll
//! failure is a status value, never an error.

mod cache;
mod error;
mod health;
mod key;
mod mutations;
mod queries;

pub use cache::{QueryCache, QueryState};
pub use error::QueryError;
pub use health::{HealthMonitor, POLL_INTERVAL};
pub use key::{QueryKey, QueryOp};
pub use queries::Queries;
