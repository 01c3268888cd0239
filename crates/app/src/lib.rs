//! # catchup-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Repository<T>` / `CarRepository`: staged CRUD over an aggregate
//!   - `UnitOfWork`: flushes staged changes in one transaction
//!   - `PersistenceContext`: hands out one unit of work per operation
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CarCommandService`: create, update, delete
//!   - `CarQueryService`: get by id, list
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `catchup-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
