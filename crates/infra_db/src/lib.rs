//! Infrastructure Database Layer
//!
//! PostgreSQL implementations of the insurance store ports using SQLx.
//!
//! # Architecture
//!
//! Each port trait from `domain_insurance` gets one adapter backed by a
//! shared connection pool. Queries are plain runtime-checked SQL; row structs
//! derive `FromRow` and convert into domain entities at the adapter boundary,
//! so the domain layer never sees SQLx types.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PgCarStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/carins")).await?;
//! let cars = PgCarStore::new(pool.clone());
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{PgCarStore, PgClaimStore, PgPolicyStore};
