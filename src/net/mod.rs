//! Networking for the static province catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the catalog wire schema and `api` performs the single GET
//! that loads it.

pub mod api;
pub mod types;
