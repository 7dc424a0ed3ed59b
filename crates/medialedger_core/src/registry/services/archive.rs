//! Archive service owning media record storage and lifecycle.
//!
//! Records live in a shared map keyed by their generator-assigned
//! identifier. A record exists in exactly two states: absent, or active.
//! Creation is the only way in, removal is the only way out, and while
//! active only the current owner can amend the mutable fields or transfer
//! ownership. There is no frozen, archived, or soft-deleted intermediate
//! state.

use std::{pin::Pin, sync::Arc, task::Poll};

use dashmap::DashMap;
use tower::Service;
#[cfg(feature = "medialedger_tracing")]
use tracing::info;

use crate::registry::{
    api::types::{ArchiveRequest, ArchiveResponse},
    error::RegistryError,
    infrastructure::{
        naming::{Height, Principal, RecordId},
        validation::MetadataValidator,
    },
};

type RecordMap = DashMap<RecordId, MediaRecord>;

/// Stored metadata of a single media asset.
///
/// `owner` changes only through an explicit transfer; `created_at` is
/// captured at creation and never rewritten. The record identifier is the
/// map key, so it cannot be mutated through the record value at all.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MediaRecord {
    /// Media name, length in `[1, 64)`
    pub name: String,
    /// Principal currently authorized to mutate or delete the record
    pub owner: Principal,
    /// Media size in bytes, in `(0, 1_000_000_000)`
    pub byte_count: u64,
    /// Ledger height captured at creation, immutable thereafter
    pub created_at: Height,
    /// Media summary, length in `[1, 128)`
    pub summary: String,
    /// 1 to 10 category labels, each of length `[1, 32]`
    pub labels: Vec<String>,
}

impl MediaRecord {
    /// Builds the initial record for a creation.
    pub fn new(draft: MediaDraft, owner: Principal, created_at: Height) -> Self {
        Self {
            name: draft.name,
            owner,
            byte_count: draft.byte_count,
            created_at,
            summary: draft.summary,
            labels: draft.labels,
        }
    }

    /// Returns a copy of this record with the mutable fields replaced by the
    /// draft and the immutable fields carried over verbatim. Amendment only
    /// ever goes through this constructor, so `owner` and `created_at`
    /// cannot drift by accident.
    pub fn amended(&self, draft: MediaDraft) -> Self {
        Self {
            name: draft.name,
            owner: self.owner.clone(),
            byte_count: draft.byte_count,
            created_at: self.created_at,
            summary: draft.summary,
            labels: draft.labels,
        }
    }
}

/// Exactly the mutable field subset of a [`MediaRecord`].
///
/// Creations and amendments both take the full draft; partial updates do
/// not exist at this layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MediaDraft {
    /// Replacement or initial name
    pub name: String,
    /// Replacement or initial byte count
    pub byte_count: u64,
    /// Replacement or initial summary
    pub summary: String,
    /// Replacement or initial label set
    pub labels: Vec<String>,
}

/// Record store service.
///
/// Cloned handles share one map.
#[derive(Debug, Default, Clone)]
pub struct ArchiveService {
    records: Arc<RecordMap>,
    validator: MetadataValidator,
}

impl ArchiveService {
    /// Pre-populates the archive, for seeding and benchmarks.
    pub fn with_records(self, records: impl IntoIterator<Item = (RecordId, MediaRecord)>) -> Self {
        for (record_id, record) in records {
            self.records.insert(record_id, record);
        }
        self
    }

    async fn register(
        &self,
        record_id: RecordId,
        record: MediaRecord,
    ) -> Result<ArchiveResponse, RegistryError> {
        self.records.insert(record_id, record);
        Ok(ArchiveResponse::Registered)
    }

    async fn fetch(&self, record_id: RecordId) -> Result<ArchiveResponse, RegistryError> {
        Ok(ArchiveResponse::Record(self.records.get(&record_id).map(|r| r.value().clone())))
    }

    async fn amend(
        &self,
        record_id: RecordId,
        caller: Principal,
        draft: MediaDraft,
    ) -> Result<ArchiveResponse, RegistryError> {
        let mut entry =
            self.records.get_mut(&record_id).ok_or(RegistryError::MissingRecord(record_id))?;
        if entry.owner != caller {
            return Err(RegistryError::OwnershipViolation { record_id, caller });
        }
        // Validation runs after the ownership gate and before any write
        if let Some(violation) = self.validator.first_violation(&draft) {
            return Err(violation);
        }
        let amended = entry.value().amended(draft);
        *entry.value_mut() = amended;
        Ok(ArchiveResponse::Amended)
    }

    async fn transfer(
        &self,
        record_id: RecordId,
        caller: Principal,
        new_owner: Principal,
    ) -> Result<ArchiveResponse, RegistryError> {
        let mut entry =
            self.records.get_mut(&record_id).ok_or(RegistryError::MissingRecord(record_id))?;
        if entry.owner != caller {
            return Err(RegistryError::OwnershipViolation { record_id, caller });
        }
        entry.value_mut().owner = new_owner;
        Ok(ArchiveResponse::Transferred)
    }

    async fn remove(
        &self,
        record_id: RecordId,
        caller: Principal,
    ) -> Result<ArchiveResponse, RegistryError> {
        let owner = self
            .records
            .get(&record_id)
            .map(|r| r.value().owner.clone())
            .ok_or(RegistryError::MissingRecord(record_id))?;
        if owner != caller {
            return Err(RegistryError::OwnershipViolation { record_id, caller });
        }
        self.records.remove(&record_id);
        Ok(ArchiveResponse::Removed)
    }
}

impl Service<ArchiveRequest> for ArchiveService {
    type Response = ArchiveResponse;
    type Error = RegistryError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: ArchiveRequest) -> Self::Future {
        let this = self.clone();
        Box::pin(async move {
            match request {
                ArchiveRequest::Register { record_id, record } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[archive] Register: record_id: {}, owner: {}", record_id, record.owner);
                    this.register(record_id, record).await
                }
                ArchiveRequest::Fetch(record_id) => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[archive] Fetch: record_id: {}", record_id);
                    this.fetch(record_id).await
                }
                ArchiveRequest::Amend { record_id, caller, draft } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[archive] Amend: record_id: {}, caller: {}", record_id, caller);
                    this.amend(record_id, caller, draft).await
                }
                ArchiveRequest::Transfer { record_id, caller, new_owner } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!(
                        "[archive] Transfer: record_id: {}, caller: {}, new_owner: {}",
                        record_id, caller, new_owner
                    );
                    this.transfer(record_id, caller, new_owner).await
                }
                ArchiveRequest::Remove { record_id, caller } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[archive] Remove: record_id: {}, caller: {}", record_id, caller);
                    this.remove(record_id, caller).await
                }
            }
        })
    }
}
