//! # catchup-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the versioned JSON API under `/api/v1/cars`
//! - Map wire resources into commands and queries (assemblers) and back
//! - Map application results into HTTP status codes: absent → 404,
//!   invalid input → 400, storage failure → 500
//! - Trace every request through `tower-http`
//!
//! ## Dependency rule
//! Depends on `catchup-app` (for port traits and services) and `catchup-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
