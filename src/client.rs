//! High-level client — `PulseClient` with nested sub-client accessors.
//!
//! Each data need has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the catalog, and the one-shot
//! `snapshot` pass used by the controller.

use crate::catalog::{default_catalog, CollectionInfo};
use crate::domain::activity::client::Activity;
use crate::domain::activity::MarketActivityTable;
use crate::domain::volume::client::Volume;
use crate::domain::volume::VolumeRecord;
use crate::error::PulseError;
use crate::http::{Transport, ZoraHttp};
use crate::shared::CollectionAddress;

// Re-export sub-client types for convenience.
pub use crate::domain::activity::client::Activity as ActivityClient;
pub use crate::domain::volume::client::Volume as VolumeClient;

/// One recompute pass worth of published tables.
///
/// Owned by the controller during a pass, then handed to consumers via the
/// published slot; consumers never mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseSnapshot {
    pub collection: CollectionAddress,
    pub activity: MarketActivityTable,
    pub volume: Vec<VolumeRecord>,
}

/// The primary entry point for the Zora Pulse SDK.
///
/// Provides nested sub-client accessors per data need:
/// `client.activity()`, `client.volume()`.
pub struct PulseClient<T: Transport = ZoraHttp> {
    pub(crate) transport: T,
    catalog: Vec<CollectionInfo>,
}

impl PulseClient<ZoraHttp> {
    pub fn builder() -> PulseClientBuilder {
        PulseClientBuilder::default()
    }
}

impl<T: Transport> PulseClient<T> {
    /// Wrap an existing transport. Used by tests and anywhere a custom
    /// transport stands in for the live endpoint.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            catalog: default_catalog(),
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn activity(&self) -> Activity<'_, T> {
        Activity { client: self }
    }

    pub fn volume(&self) -> Volume<'_, T> {
        Volume { client: self }
    }

    /// The collections offered for selection.
    pub fn catalog(&self) -> &[CollectionInfo] {
        &self.catalog
    }

    /// One full recompute pass: the three data needs fetched concurrently
    /// against the remote service, normalized, listings filtered. Succeeds
    /// only if all three succeed — never a partial snapshot.
    pub async fn snapshot(
        &self,
        collection: &CollectionAddress,
    ) -> Result<PulseSnapshot, PulseError> {
        let activity_client = self.activity();
        let volume_client = self.volume();
        let (activity, volume) = tokio::try_join!(
            activity_client.combined(collection),
            volume_client.summary(collection),
        )?;
        Ok(PulseSnapshot {
            collection: collection.clone(),
            activity,
            volume,
        })
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PulseClientBuilder {
    api_url: String,
    catalog: Vec<CollectionInfo>,
}

impl Default for PulseClientBuilder {
    fn default() -> Self {
        Self {
            api_url: crate::network::DEFAULT_API_URL.to_string(),
            catalog: default_catalog(),
        }
    }
}

impl PulseClientBuilder {
    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    /// Replace the built-in catalog with an externally configured one.
    pub fn catalog(mut self, catalog: Vec<CollectionInfo>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn build(self) -> PulseClient<ZoraHttp> {
        PulseClient {
            transport: ZoraHttp::new(&self.api_url),
            catalog: self.catalog,
        }
    }
}
