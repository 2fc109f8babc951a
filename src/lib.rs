//! # Zora Pulse
//!
//! Market activity data core for NFT collection dashboards, backed by the
//! Zora GraphQL API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, query documents, normalized domain models
//! 2. **Transport** — `ZoraHttp`, one-shot GraphQL POSTs behind the
//!    `Transport` seam
//! 3. **High-Level Client** — `PulseClient` with nested sub-clients and the
//!    all-or-nothing `snapshot` pass
//! 4. **Controller** — `PulseController`, the selection-reactive recompute
//!    loop that republishes tables whenever the active collection changes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zora_pulse::prelude::*;
//!
//! let client = PulseClient::builder().build();
//! let bootstrap = client.catalog()[0].address.clone();
//! let controller = PulseController::spawn(client, bootstrap);
//!
//! let mut views = controller.subscribe();
//! let view = views.wait_for(|v| v.phase == Phase::Idle).await?;
//! // view.snapshot holds the activity table + volume records for charting
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Known-collection catalog for selection inputs.
pub mod catalog;

/// GraphQL query documents (sales, listings, volume).
pub mod query;

/// Domain modules (vertical slices): normalized types, wire types,
/// conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// One-shot GraphQL transport.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PulseClient` — the primary entry point.
pub mod client;

// ── Layer 4: Controller ──────────────────────────────────────────────────────

/// `PulseController` — the selection-reactive recompute loop.
pub mod controller;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ActivityKind, CollectionAddress, VolumePeriod};

    // Catalog
    pub use crate::catalog::{default_catalog, CollectionInfo};

    // Query builders
    pub use crate::query::{ListingsQuery, QueryDocument, SalesQuery, VolumeQuery};

    // Domain types — activity
    pub use crate::domain::activity::{ActivityRecord, MarketActivityTable};

    // Domain types — volume
    pub use crate::domain::volume::VolumeRecord;

    // Errors
    pub use crate::error::{MalformedResponse, PulseError, TransportError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Transport + client
    pub use crate::client::{PulseClient, PulseClientBuilder, PulseSnapshot};
    pub use crate::http::{Transport, ZoraHttp};

    // Controller
    pub use crate::controller::{DashboardView, Phase, PulseController};
}
