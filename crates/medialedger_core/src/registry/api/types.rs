//! Registry API type definitions.
//!
//! This module defines all request and response types for the media registry,
//! which provides ledger-backed metadata bookkeeping with single-owner
//! authorization over every mutation.
//!
//! ## Caller-to-Registry (C2R) API
//! The operation surface exposed to the host environment. Caller identity is
//! carried on each mutating request because it is supplied by the host per
//! call, never by the calling principal itself.
//!
//! ## Internal Service APIs
//! Request/response types for the component services composed behind the C2R
//! orchestrator:
//! - **Sequencer**: monotonic record-identifier assignment
//! - **Archive**: record storage and lifecycle
//! - **Access**: per-record principal grants

use crate::registry::{
    infrastructure::naming::{Principal, RecordId},
    services::archive::{MediaDraft, MediaRecord},
};

/// Caller-to-Registry (C2R) request types.
///
/// Each request is processed as one logical transaction: every check runs
/// before any write, and a failed check aborts the call with no observable
/// side effect.
#[derive(Debug, Clone)]
pub enum RegistryRequest {
    /// Register a new media record owned by the caller.
    ///
    /// All metadata fields are validated before an identifier is assigned,
    /// so a rejected creation never advances the sequence counter. On
    /// success the creator also receives an access grant for the new record.
    ArchiveNewMedia {
        /// Principal registering the record, supplied by the host
        caller: Principal,
        /// Media name, length in `[1, 64)`
        name: String,
        /// Media size in bytes, in `(0, 1_000_000_000)`
        byte_count: u64,
        /// Media summary, length in `[1, 128)`
        summary: String,
        /// 1 to 10 category labels, each of length `[1, 32]`
        labels: Vec<String>,
    },

    /// Look up a record by identifier.
    ///
    /// A pure read with no authorization gate; an absent identifier yields
    /// `None` rather than an error.
    GetMediaRecord {
        /// Identifier to look up
        record_id: RecordId,
    },

    /// Replace the mutable metadata of an existing record.
    ///
    /// Only the current owner may modify a record. The owner, creation
    /// height, and identifier are untouchable by construction; the new
    /// fields are validated exactly as at creation.
    ModifyMediaMetadata {
        /// Principal requesting the modification
        caller: Principal,
        /// Record to modify
        record_id: RecordId,
        /// Replacement name
        name: String,
        /// Replacement byte count
        byte_count: u64,
        /// Replacement summary
        summary: String,
        /// Replacement label set
        labels: Vec<String>,
    },

    /// Hand ownership of a record to another principal.
    ///
    /// Only the current owner may transfer; all fields other than the owner
    /// are untouched. Transferring to oneself is permitted and a no-op in
    /// effect.
    TransferMediaOwnership {
        /// Principal requesting the transfer
        caller: Principal,
        /// Record to transfer
        record_id: RecordId,
        /// Principal receiving ownership
        new_owner: Principal,
    },

    /// Permanently remove a record.
    ///
    /// Only the current owner may remove. The identifier is never reused;
    /// access grants referencing the record are purged with it.
    RemoveMediaRecord {
        /// Principal requesting the removal
        caller: Principal,
        /// Record to remove
        record_id: RecordId,
    },

    /// Grant a principal access to a record.
    ///
    /// Gated by current ownership of the target record; idempotent upsert.
    GrantMediaAccess {
        /// Principal requesting the grant, must own the record
        caller: Principal,
        /// Record the grant refers to
        record_id: RecordId,
        /// Principal receiving the grant
        principal: Principal,
    },

    /// Revoke a principal's access to a record.
    ///
    /// Gated by current ownership of the target record; idempotent even if
    /// no grant exists.
    RevokeMediaAccess {
        /// Principal requesting the revocation, must own the record
        caller: Principal,
        /// Record the grant refers to
        record_id: RecordId,
        /// Principal losing the grant
        principal: Principal,
    },

    /// Query whether a principal holds an access grant on a record.
    ///
    /// A pure read defaulting to `false` when no entry exists.
    CheckMediaAccess {
        /// Record the query refers to
        record_id: RecordId,
        /// Principal whose grant is queried
        principal: Principal,
    },
}

/// Caller-to-Registry (C2R) response types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RegistryResponse {
    /// Identifier assigned to a newly archived record.
    ///
    /// Always equals the prior sequence counter plus one; identifiers issued
    /// by successive successful creations are gapless and strictly
    /// increasing.
    RecordId(RecordId),

    /// Result of a record lookup; `None` when the identifier has no current
    /// entry.
    Record(Option<MediaRecord>),

    /// Result of an access-grant query.
    Access(bool),

    /// Acknowledgment of a successful mutation.
    Ack,
}

/// Sequencer service request types.
///
/// Internal API of the monotonic identifier generator. `NextRecordId` must
/// only be issued once a creation has passed validation, so that a rejected
/// creation never advances the counter.
#[derive(Debug, Clone)]
pub enum SequencerRequest {
    /// Assign the next record identifier, advancing the counter.
    NextRecordId,

    /// Read the counter without advancing it.
    TotalRecords,
}

/// Sequencer service response types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SequencerResponse {
    /// Freshly assigned identifier, equal to the prior counter plus one.
    RecordIdAssigned(RecordId),

    /// Current counter value; the number of creations ever committed.
    Total(u64),
}

/// Archive service request types.
///
/// Internal API of the record store. Mutating requests enforce the
/// missing-record-then-ownership check order internally; `Amend`
/// additionally validates the draft before writing.
#[derive(Debug, Clone)]
pub enum ArchiveRequest {
    /// Insert a freshly created record under a generator-assigned
    /// identifier.
    ///
    /// Infallible by construction: identifiers are never caller-supplied, so
    /// a duplicate-identifier collision cannot occur.
    Register {
        /// Identifier assigned by the sequencer
        record_id: RecordId,
        /// Record to store
        record: MediaRecord,
    },

    /// Look up a record by identifier, without side effects.
    Fetch(RecordId),

    /// Replace the mutable fields of an existing record, owner-gated.
    Amend {
        /// Record to amend
        record_id: RecordId,
        /// Principal requesting the amendment
        caller: Principal,
        /// Replacement values for the mutable field subset
        draft: MediaDraft,
    },

    /// Replace only the owner of an existing record, owner-gated.
    Transfer {
        /// Record to transfer
        record_id: RecordId,
        /// Principal requesting the transfer
        caller: Principal,
        /// Principal receiving ownership
        new_owner: Principal,
    },

    /// Remove an existing record irrevocably, owner-gated.
    Remove {
        /// Record to remove
        record_id: RecordId,
        /// Principal requesting the removal
        caller: Principal,
    },
}

/// Archive service response types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ArchiveResponse {
    /// The record was stored under its assigned identifier.
    Registered,

    /// Result of a lookup; `None` when the identifier has no current entry.
    Record(Option<MediaRecord>),

    /// The mutable fields were replaced in place.
    Amended,

    /// The owner field was replaced.
    Transferred,

    /// The record was removed.
    Removed,
}

/// Access service request types.
///
/// Internal API of the per-record grant map. The service holds no
/// authorization logic of its own; the orchestrator performs the owner gate
/// before issuing `Grant` or `Revoke`.
#[derive(Debug, Clone)]
pub enum AccessRequest {
    /// Insert or refresh a grant; idempotent.
    Grant {
        /// Record the grant refers to
        record_id: RecordId,
        /// Principal receiving the grant
        principal: Principal,
    },

    /// Remove a grant; idempotent even if no grant exists.
    Revoke {
        /// Record the grant refers to
        record_id: RecordId,
        /// Principal losing the grant
        principal: Principal,
    },

    /// Query a grant, defaulting to `false` when no entry exists.
    Check {
        /// Record the query refers to
        record_id: RecordId,
        /// Principal whose grant is queried
        principal: Principal,
    },

    /// Drop every grant referencing a record, issued when the record is
    /// removed.
    Purge(RecordId),
}

/// Access service response types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AccessResponse {
    /// The grant is present after the call.
    GrantInserted,

    /// The grant is absent after the call.
    GrantRevoked,

    /// Current grant state for the queried pair.
    Access(bool),

    /// All grants referencing the record were dropped.
    Purged,
}
