//! Sequencer service assigning monotonic record identifiers.
//!
//! A single counter produces every record identifier as `prior + 1`. The
//! orchestrator only asks for an identifier once a creation has passed
//! validation, so a rejected creation never advances the counter, and the
//! counter never decreases; identifiers are unique, gapless, and never
//! reused even after the record they name is deleted.

use std::{
    pin::Pin,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    task::Poll,
};

use tower::Service;
#[cfg(feature = "medialedger_tracing")]
use tracing::info;

use crate::registry::{
    api::types::{SequencerRequest, SequencerResponse},
    error::RegistryError,
    infrastructure::naming::RecordId,
};

/// Monotonic record-identifier generator.
///
/// Cloned handles share one counter.
#[derive(Debug, Default, Clone)]
pub struct SequencerService {
    total_items: Arc<AtomicU64>,
}

impl SequencerService {
    /// Creates a sequencer whose next assigned identifier is `total + 1`,
    /// as if `total` creations had already committed.
    pub fn starting_at(total: u64) -> Self {
        Self { total_items: Arc::new(AtomicU64::new(total)) }
    }

    async fn next_record_id(&self) -> Result<SequencerResponse, RegistryError> {
        let record_id: RecordId = self.total_items.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SequencerResponse::RecordIdAssigned(record_id))
    }

    async fn total(&self) -> Result<SequencerResponse, RegistryError> {
        Ok(SequencerResponse::Total(self.total_items.load(Ordering::SeqCst)))
    }
}

impl Service<SequencerRequest> for SequencerService {
    type Response = SequencerResponse;
    type Error = RegistryError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: SequencerRequest) -> Self::Future {
        let this = self.clone();
        Box::pin(async move {
            match request {
                SequencerRequest::NextRecordId => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[sequencer] NextRecordId");
                    this.next_record_id().await
                }
                SequencerRequest::TotalRecords => {
                    #[cfg(feature = "medialedger_tracing")]
                    info!("[sequencer] TotalRecords");
                    this.total().await
                }
            }
        })
    }
}
