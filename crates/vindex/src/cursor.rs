//! Execution cursor consumed by vindexes
//!
//! A [`VCursor`] executes queries in the context and session of the
//! current routing request. Lookup-backed vindexes use it to read, create
//! and delete their stored id -> keyspace id associations.
//!
//! ## Contract
//!
//! - The cursor is request-scoped. A vindex borrows it for the duration of
//!   one capability call and never stores it.
//! - Each `execute` is a single attempt. There is no retry policy here;
//!   callers above the vindex decide whether to retry.
//! - Implementations must honour the [`ExecContext`] they are given: a
//!   cancelled or expired context should fail with `Cancelled` or
//!   `DeadlineExceeded` instead of blocking on storage.

use shardmap_core::{BindVars, ExecContext, QueryResult, VindexResult};

/// Executes lookup queries against the storage cluster
///
/// Implemented by the session/execution layer. Thread safety: a cursor is
/// handed out per request, but the same vindex instance may be driven
/// from many requests at once, so implementations must be `Send + Sync`.
pub trait VCursor: Send + Sync {
    /// Execute one query with its bind variables
    ///
    /// # Errors
    ///
    /// `Storage` for failures on the storage side; `Cancelled` or
    /// `DeadlineExceeded` when `ctx` no longer permits the call.
    fn execute(
        &self,
        ctx: &ExecContext,
        query: &str,
        bind_vars: &BindVars,
    ) -> VindexResult<QueryResult>;
}
