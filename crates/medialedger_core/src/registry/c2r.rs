use std::{pin::Pin, task::Poll};

use tower::Service;
#[cfg(feature = "medialedger_tracing")]
use tracing::info;

use crate::registry::{
    api::types::{
        AccessRequest, AccessResponse, ArchiveRequest, ArchiveResponse, RegistryRequest,
        RegistryResponse, SequencerRequest, SequencerResponse,
    },
    error::RegistryError,
    infrastructure::{
        naming::{HeightSource, Principal, RecordId},
        validation::MetadataValidator,
    },
    services::archive::{MediaDraft, MediaRecord},
};

/// C2R (Caller-to-Registry) API Service
///
/// This service handles registry requests from the host environment, routing
/// each operation through validation, the ownership gate, and the component
/// services. Every call runs its checks before its writes, so a failed call
/// leaves prior state fully intact; the host serializes calls per registry
/// instance.
#[derive(Debug, Clone)]
pub struct RegistryApiService<S, A, X, L> {
    /// Pure field-bound validator, run before any identifier is assigned
    validator: MetadataValidator,
    /// Service assigning monotonic record identifiers
    sequencer: S,
    /// Service owning record storage and lifecycle
    archive: A,
    /// Service tracking per-record principal grants
    access: X,
    /// Execution-environment height seam, observed once per creation
    clock: L,
}

impl<S, A, X, L> RegistryApiService<S, A, X, L> {
    /// Creates a new C2R API service from the provided component services.
    pub fn new(sequencer: S, archive: A, access: X, clock: L) -> Self {
        Self { validator: MetadataValidator, sequencer, archive, access, clock }
    }
}

impl<S, A, X, L> Service<RegistryRequest> for RegistryApiService<S, A, X, L>
where
    S: Service<SequencerRequest, Response = SequencerResponse, Error = RegistryError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
    A: Service<ArchiveRequest, Response = ArchiveResponse, Error = RegistryError>
        + Clone
        + Send
        + 'static,
    A::Future: Send,
    X: Service<AccessRequest, Response = AccessResponse, Error = RegistryError>
        + Clone
        + Send
        + 'static,
    X::Future: Send,
    L: HeightSource + Clone + Send + 'static,
{
    type Response = RegistryResponse;
    type Error = RegistryError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: RegistryRequest) -> Self::Future {
        let validator = self.validator.clone();
        let mut sequencer = self.sequencer.clone();
        let mut archive = self.archive.clone();
        let mut access = self.access.clone();
        let clock = self.clock.clone();
        Box::pin(async move {
            match request {
                RegistryRequest::ArchiveNewMedia { caller, name, byte_count, summary, labels } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[c2r] ArchiveNewMedia: caller: {}, name: {}", caller, name);
                    let draft = MediaDraft { name, byte_count, summary, labels };
                    // Validation precedes identifier assignment, so a
                    // rejected creation never advances the counter
                    if let Some(violation) = validator.first_violation(&draft) {
                        return Err(violation);
                    }
                    let SequencerResponse::RecordIdAssigned(record_id) =
                        sequencer.call(SequencerRequest::NextRecordId).await?
                    else {
                        return Err(RegistryError::InternalRegistryError);
                    };
                    let record = MediaRecord::new(draft, caller.clone(), clock.current_height());
                    archive.call(ArchiveRequest::Register { record_id, record }).await?;
                    access.call(AccessRequest::Grant { record_id, principal: caller }).await?;
                    Ok(RegistryResponse::RecordId(record_id))
                }
                RegistryRequest::GetMediaRecord { record_id } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[c2r] GetMediaRecord: record_id: {}", record_id);
                    let ArchiveResponse::Record(record) =
                        archive.call(ArchiveRequest::Fetch(record_id)).await?
                    else {
                        return Err(RegistryError::InternalRegistryError);
                    };
                    Ok(RegistryResponse::Record(record))
                }
                RegistryRequest::ModifyMediaMetadata {
                    caller,
                    record_id,
                    name,
                    byte_count,
                    summary,
                    labels,
                } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[c2r] ModifyMediaMetadata: caller: {}, record_id: {}", caller, record_id);
                    let draft = MediaDraft { name, byte_count, summary, labels };
                    archive.call(ArchiveRequest::Amend { record_id, caller, draft }).await?;
                    Ok(RegistryResponse::Ack)
                }
                RegistryRequest::TransferMediaOwnership { caller, record_id, new_owner } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!(
                        "[c2r] TransferMediaOwnership: caller: {}, record_id: {}, new_owner: {}",
                        caller, record_id, new_owner
                    );
                    archive
                        .call(ArchiveRequest::Transfer { record_id, caller, new_owner })
                        .await?;
                    Ok(RegistryResponse::Ack)
                }
                RegistryRequest::RemoveMediaRecord { caller, record_id } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[c2r] RemoveMediaRecord: caller: {}, record_id: {}", caller, record_id);
                    archive.call(ArchiveRequest::Remove { record_id, caller }).await?;
                    // The record is gone; grants referencing its identifier
                    // go with it, identifiers are never reused
                    access.call(AccessRequest::Purge(record_id)).await?;
                    Ok(RegistryResponse::Ack)
                }
                RegistryRequest::GrantMediaAccess { caller, record_id, principal } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!(
                        "[c2r] GrantMediaAccess: caller: {}, record_id: {}, principal: {}",
                        caller, record_id, principal
                    );
                    guard_owner(&mut archive, record_id, &caller).await?;
                    access.call(AccessRequest::Grant { record_id, principal }).await?;
                    Ok(RegistryResponse::Ack)
                }
                RegistryRequest::RevokeMediaAccess { caller, record_id, principal } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!(
                        "[c2r] RevokeMediaAccess: caller: {}, record_id: {}, principal: {}",
                        caller, record_id, principal
                    );
                    guard_owner(&mut archive, record_id, &caller).await?;
                    access.call(AccessRequest::Revoke { record_id, principal }).await?;
                    Ok(RegistryResponse::Ack)
                }
                RegistryRequest::CheckMediaAccess { record_id, principal } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[c2r] CheckMediaAccess: record_id: {}, principal: {}", record_id, principal);
                    let AccessResponse::Access(granted) =
                        access.call(AccessRequest::Check { record_id, principal }).await?
                    else {
                        return Err(RegistryError::InternalRegistryError);
                    };
                    Ok(RegistryResponse::Access(granted))
                }
            }
        })
    }
}

/// Resolves the record and fails unless the caller is its current owner.
async fn guard_owner<A>(
    archive: &mut A,
    record_id: RecordId,
    caller: &Principal,
) -> Result<(), RegistryError>
where
    A: Service<ArchiveRequest, Response = ArchiveResponse, Error = RegistryError>,
{
    let ArchiveResponse::Record(record) = archive.call(ArchiveRequest::Fetch(record_id)).await?
    else {
        return Err(RegistryError::InternalRegistryError);
    };
    let record = record.ok_or(RegistryError::MissingRecord(record_id))?;
    if record.owner != *caller {
        return Err(RegistryError::OwnershipViolation { record_id, caller: caller.clone() });
    }
    Ok(())
}
