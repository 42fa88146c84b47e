//! Remote database access for the Shop Hunt catalog.
//!
//! All durable state lives in a hosted relational database exposed over
//! a PostgREST-style REST API. This crate provides the [`DbStore`] trait
//! (the narrow seam the domain code programs against), the [`RestStore`]
//! implementation that talks to the hosted service, and an in-memory
//! [`MemStore`] for tests.

pub mod error;
pub mod mem;
pub mod rest;
pub mod traits;

pub use error::DbError;
pub use mem::MemStore;
pub use rest::RestStore;
pub use traits::{DbStore, Filter, Order};
