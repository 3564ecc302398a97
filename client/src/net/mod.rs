//! Networking modules for the warehouse REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` maps resource operations onto HTTP calls, `transport` is the seam
//! that actually moves bytes (browser fetch or an in-memory backend in tests),
//! `error` defines the failure taxonomy, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
