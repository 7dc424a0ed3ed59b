//! Registry module.
//!
//! This module provides a ledger-backed metadata registry for media assets,
//! covering record creation, retrieval, metadata amendment, ownership
//! transfer, removal, and per-record access grants.
//!
//! ## Core Architecture
//!
//! The registry is built around a single caller-facing API layer:
//!
//! ### Caller-to-Registry (C2R) API
//! Primary interface for principals interacting with the registry. Routes
//! every operation through metadata validation, the ownership gate, and the
//! component services, and maps each outcome onto the registry error
//! taxonomy.
//!
//! ## Service Components
//!
//! ### Core Services
//! - **Sequencer**: Assigns monotonic, gapless record identifiers
//! - **Archive**: Owns record storage and lifecycle
//! - **Access**: Tracks per-record principal grants
//!
//! ### Infrastructure
//! - **Validation**: Field-bound metadata validation, run before any state change
//! - **Naming**: Principal identities and the ledger-height seam
//! - **Error Handling**: Comprehensive error types for every rejected operation
//!
//! ## Default Service Stacks
//!
//! `RegistryDefaultStack<L>` combines the three component services behind
//! the C2R API, parameterized by the ledger-height source.
//!
//! ## Initialization Helpers
//!
//! - `init_registry()`: Initialize an empty registry
//! - `init_registry_with_seeded_records()`: Initialize with pre-archived test records
pub mod api;
pub mod c2r;
pub mod error;
pub mod infrastructure;
pub mod services;

use infrastructure::naming::{HeightSource, LedgerClock, Principal};
use services::{
    access::AccessService,
    archive::{ArchiveService, MediaDraft, MediaRecord},
    sequencer::SequencerService,
};

/// Standard C2R API service stack with default component configuration.
///
/// Combines sequencer, archive, and access services behind the caller-facing
/// API. The generic parameter `L` is the ledger-height source consulted once
/// per record creation.
pub type RegistryDefaultStack<L = LedgerClock> =
    c2r::RegistryApiService<SequencerService, ArchiveService, AccessService, L>;

/// Initialize an empty registry stack.
///
/// Creates a fully configured registry with a fresh sequencer, an empty
/// archive, and an empty grant map, stamping new records with heights drawn
/// from `clock`.
pub fn init_registry<L>(clock: L) -> RegistryDefaultStack<L>
where
    L: HeightSource + Clone + Send + 'static,
{
    c2r::RegistryApiService::new(
        SequencerService::default(),
        ArchiveService::default(),
        AccessService::default(),
        clock,
    )
}

/// Initialize a registry stack with pre-archived records for testing.
///
/// Creates a registry identical to `init_registry()` but with `record_count`
/// records already archived under `owner`, each holding a creator grant. The
/// sequencer resumes after the seeded identifiers, so the next creation is
/// assigned `record_count + 1`.
///
/// # Warning
/// Should only be used for testing and benchmarking. Production deployments
/// should use `init_registry()` and archive records through the API.
pub fn init_registry_with_seeded_records<L>(
    clock: L,
    owner: Principal,
    record_count: u64,
) -> RegistryDefaultStack<L>
where
    L: HeightSource + Clone + Send + 'static,
{
    let records = (1..=record_count).map(|record_id| {
        let draft = MediaDraft {
            name: format!("seed-{record_id}"),
            byte_count: 1,
            summary: format!("seeded record {record_id}"),
            labels: vec!["seed".to_string()],
        };
        (record_id, MediaRecord::new(draft, owner.clone(), clock.current_height()))
    });
    let grants = (1..=record_count).map(|record_id| (record_id, owner.clone()));

    c2r::RegistryApiService::new(
        SequencerService::starting_at(record_count),
        ArchiveService::default().with_records(records),
        AccessService::default().with_grants(grants),
        clock,
    )
}
