//! Access service tracking per-record principal grants.
//!
//! A grant is a boolean flag keyed by `(record_id, principal)`. The creator
//! receives a grant as part of every creation; further grants and
//! revocations go through the owner-gated caller surface. This service holds
//! no authorization logic of its own, the orchestrator performs the owner
//! gate before issuing writes.

use std::{pin::Pin, sync::Arc, task::Poll};

use dashmap::DashMap;
use tower::Service;
#[cfg(feature = "medialedger_tracing")]
use tracing::info;

use crate::registry::{
    api::types::{AccessRequest, AccessResponse},
    error::RegistryError,
    infrastructure::naming::{Principal, RecordId},
};

type GrantMap = DashMap<(RecordId, Principal), bool>;

/// Grant map service.
///
/// Cloned handles share one map.
#[derive(Debug, Default, Clone)]
pub struct AccessService {
    grants: Arc<GrantMap>,
}

impl AccessService {
    /// Pre-populates the grant map, for seeding and benchmarks.
    pub fn with_grants(
        self,
        grants: impl IntoIterator<Item = (RecordId, Principal)>,
    ) -> Self {
        for (record_id, principal) in grants {
            self.grants.insert((record_id, principal), true);
        }
        self
    }

    async fn grant(
        &self,
        record_id: RecordId,
        principal: Principal,
    ) -> Result<AccessResponse, RegistryError> {
        // Idempotent upsert
        self.grants.insert((record_id, principal), true);
        Ok(AccessResponse::GrantInserted)
    }

    async fn revoke(
        &self,
        record_id: RecordId,
        principal: Principal,
    ) -> Result<AccessResponse, RegistryError> {
        // Idempotent even if no grant exists
        self.grants.remove(&(record_id, principal));
        Ok(AccessResponse::GrantRevoked)
    }

    async fn check(
        &self,
        record_id: RecordId,
        principal: Principal,
    ) -> Result<AccessResponse, RegistryError> {
        Ok(AccessResponse::Access(
            self.grants.get(&(record_id, principal)).map(|g| *g.value()).unwrap_or(false),
        ))
    }

    async fn purge(&self, record_id: RecordId) -> Result<AccessResponse, RegistryError> {
        self.grants.retain(|(id, _), _| *id != record_id);
        Ok(AccessResponse::Purged)
    }
}

impl Service<AccessRequest> for AccessService {
    type Response = AccessResponse;
    type Error = RegistryError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: AccessRequest) -> Self::Future {
        let this = self.clone();
        Box::pin(async move {
            match request {
                AccessRequest::Grant { record_id, principal } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[access] Grant: record_id: {}, principal: {}", record_id, principal);
                    this.grant(record_id, principal).await
                }
                AccessRequest::Revoke { record_id, principal } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[access] Revoke: record_id: {}, principal: {}", record_id, principal);
                    this.revoke(record_id, principal).await
                }
                AccessRequest::Check { record_id, principal } => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[access] Check: record_id: {}, principal: {}", record_id, principal);
                    this.check(record_id, principal).await
                }
                AccessRequest::Purge(record_id) => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[access] Purge: record_id: {}", record_id);
                    this.purge(record_id).await
                }
            }
        })
    }
}
