//! # Repository Module
//!
//! Database repository implementations for vendas.
//!
//! ## Two Faces per Repository
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository API                                       │
//! │                                                                         │
//! │  Typed (errors visible)          Sentinel (errors logged, swallowed)   │
//! │  ──────────────────────          ─────────────────────────────────     │
//! │  list()    → DbResult<Vec<T>>    list_all()     → Option<Vec<T>>       │
//! │  create(T) → DbResult<T>         insert(&mut T) → bool                 │
//! │  get_by_id → DbResult<Option<T>>                                       │
//! │  count()   → DbResult<i64>                                             │
//! │                                                                         │
//! │  create() consumes a transient record and returns the persisted copy. │
//! │  insert() writes the new id into the caller's record on success and   │
//! │  leaves it untouched on failure.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statement binds its values as parameters.
//!
//! ## Available Repositories
//!
//! - [`car::CarRepository`] - `carro` table
//! - [`sale_order::SaleOrderRepository`] - `pedido_venda` table

pub mod car;
pub mod sale_order;

use tracing::error;

use crate::error::DbResult;

/// Collapses a typed result into the sentinel form, logging the failure.
pub(crate) fn log_failure<T>(result: DbResult<T>, message: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!(error = %e, "{}", message);
            None
        }
    }
}
