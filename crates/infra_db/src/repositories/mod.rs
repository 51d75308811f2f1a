//! PostgreSQL store adapters
//!
//! One adapter per port trait, each owning a handle to the shared pool.
//! SQLx errors are classified by [`crate::error::DatabaseError`] before
//! crossing into the domain as `StoreError`.

pub mod cars;
pub mod claims;
pub mod policies;

pub use cars::PgCarStore;
pub use claims::PgClaimStore;
pub use policies::PgPolicyStore;

use core_kernel::StoreError;

use crate::error::DatabaseError;

pub(crate) fn store_err(error: sqlx::Error) -> StoreError {
    DatabaseError::from(error).into()
}
