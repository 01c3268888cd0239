//! Application services: use-case implementations.
//!
//! Each service struct accepts a [`PersistenceContext`](crate::ports::PersistenceContext)
//! via a generic parameter (constructor injection), keeping this layer
//! decoupled from concrete adapters. Commands and queries are split into
//! separate services.

pub mod car_command_service;
pub mod car_query_service;

#[cfg(test)]
mod in_memory;
