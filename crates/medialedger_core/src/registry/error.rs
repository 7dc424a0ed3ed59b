use thiserror::Error;

use crate::registry::infrastructure::naming::{Principal, RecordId};

/// Error taxonomy of the media registry.
///
/// The first failing check aborts the whole call with its specific kind and
/// zero observable side effects. `DuplicateRecord`, `AccessRestriction` and
/// `ViewLimitation` are reserved for forward compatibility and are never
/// produced by any operation: duplicate ids are structurally impossible under
/// generator-assigned identifiers, and reads are not gated by the access map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Registry error, invalid media name: {0:?}")]
    InvalidName(String),

    #[error("Registry error, invalid media size: {0}")]
    InvalidSize(u64),

    #[error("Registry error, invalid media summary: {0:?}")]
    InvalidSummary(String),

    /// Carries the offending label, or the empty string when the label set
    /// size itself is out of bounds.
    #[error("Registry error, malformed category label: {0:?}")]
    MalformedLabel(String),

    #[error("Registry error, record not found (id: {0})")]
    MissingRecord(RecordId),

    #[error("Registry error, {caller} is not the owner of record {record_id}")]
    OwnershipViolation { record_id: RecordId, caller: Principal },

    #[error("Registry error, duplicate record (id: {0})")]
    DuplicateRecord(RecordId),

    #[error("Registry error, access restricted (id: {0})")]
    AccessRestriction(RecordId),

    #[error("Registry error, view limited (id: {0})")]
    ViewLimitation(RecordId),

    #[error("Registry error, internal registry error")]
    InternalRegistryError,
}
