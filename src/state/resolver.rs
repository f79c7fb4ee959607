//! Province record resolution with last-request-wins ordering.
//!
//! DESIGN
//! ======
//! `ResolverState` is a plain state machine: `begin` hands out a tagged
//! [`ResolveTicket`] when the key changes, the caller runs the fetch however
//! it likes, and `complete` applies the outcome only if the ticket is still
//! the newest one. Stale results are dropped on arrival; in-flight requests
//! are never aborted.
//!
//! Failures are fail-closed. A failed fetch leaves `Resolution::Failed`, which
//! renders exactly like `Pending`, so a previous province's record is never
//! shown under a new key.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::config::PanelConfig;
use crate::net::api::{CatalogSource, FetchError};
use crate::net::types::{ProvinceCatalog, ProvinceKey, ProvinceRecord};

/// Tri-state outcome of resolving the current province.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    Pending,
    Ready(ProvinceRecord),
    Failed,
}

impl Resolution {
    pub fn record(&self) -> Option<&ProvinceRecord> {
        match self {
            Self::Ready(record) => Some(record),
            Self::Pending | Self::Failed => None,
        }
    }
}

/// Identity of one issued resolve request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveTicket {
    key: ProvinceKey,
    generation: u64,
}

impl ResolveTicket {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a completed request changed the visible resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued after this one; the outcome was discarded.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolverState {
    key: Option<ProvinceKey>,
    generation: u64,
    resolution: Resolution,
}

impl ResolverState {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// Start resolving `key` if it differs from the last key seen.
    ///
    /// Returns `None` when the key is unchanged (no refetch) or empty. Any
    /// change, including to an empty key, invalidates outstanding tickets.
    pub fn begin(&mut self, key: &str) -> Option<ResolveTicket> {
        if self.key.as_deref() == Some(key) {
            return None;
        }
        self.key = Some(key.to_owned());
        self.issue()
    }

    /// Re-issue a request for the current key, e.g. after a failure.
    pub fn retry(&mut self) -> Option<ResolveTicket> {
        self.issue()
    }

    /// Apply a finished request if it is still the newest one.
    pub fn complete(&mut self, ticket: &ResolveTicket, outcome: Result<ProvinceRecord, FetchError>) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        self.resolution = match outcome {
            Ok(record) => Resolution::Ready(record),
            Err(_) => Resolution::Failed,
        };
        Completion::Applied
    }

    pub fn is_current(&self, ticket: &ResolveTicket) -> bool {
        ticket.generation == self.generation && self.key.as_deref() == Some(ticket.key.as_str())
    }

    fn issue(&mut self) -> Option<ResolveTicket> {
        self.generation += 1;
        self.resolution = Resolution::Pending;
        let key = self.key.as_ref().filter(|k| !k.is_empty())?;
        Some(ResolveTicket { key: key.clone(), generation: self.generation })
    }
}

/// Pick `key` out of a loaded catalog, substituting the default record.
///
/// Only the requested entry is decoded. An entry that is absent, `null`, or
/// not shaped like a record resolves to the default record, same as a
/// province the catalog does not list.
pub fn lookup(catalog: &ProvinceCatalog, key: &str, config: &PanelConfig) -> ProvinceRecord {
    let Some(entry) = catalog.get(key).filter(|entry| !entry.is_null()) else {
        return config.default_record();
    };
    match ProvinceRecord::from_entry(entry) {
        Ok(record) => record,
        Err(e) => {
            leptos::logging::warn!("malformed province record, using default: province={key} error={e}");
            config.default_record()
        }
    }
}

/// Load the whole catalog and resolve one key from it.
///
/// # Errors
///
/// Propagates the [`FetchError`] from `source`; a missing key is not an error.
pub async fn resolve<S>(source: &S, key: &str, config: &PanelConfig) -> Result<ProvinceRecord, FetchError>
where
    S: CatalogSource + ?Sized,
{
    let catalog = source.fetch_catalog().await?;
    Ok(lookup(&catalog, key, config))
}
