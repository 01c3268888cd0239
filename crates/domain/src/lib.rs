//! # catchup-domain
//!
//! Pure domain model for the car catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Car** aggregate and its not-yet-persisted draft (`NewCar`)
//! - Define **Commands** (create, update) and **Queries** (get by id)
//! - Define the [`aggregate::Aggregate`] contract that generic repositories build on
//! - Contain all invariant enforcement (non-empty model and color)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod aggregate;
pub mod car;
