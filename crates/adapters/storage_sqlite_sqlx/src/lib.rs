//! # catchup-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the storage port traits defined in `catchup-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows (`cars` table, snake_case columns)
//! - Maintain `created_at` / `updated_at` on every insert and update
//!
//! ## Dependency rule
//! Depends on `catchup-app` (for port traits) and `catchup-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod car_repo;
mod context;
mod error;
mod pool;

pub use car_repo::SqliteCarRepository;
pub use context::{SqliteContext, SqliteUnitOfWork};
pub use error::StorageError;
pub use pool::Database;
