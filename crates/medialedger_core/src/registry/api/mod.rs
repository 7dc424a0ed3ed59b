//! Request and response types for the media registry.
//!
//! The public caller surface and the internal service surfaces are all
//! expressed as request/response enum pairs, dispatched through
//! `tower::Service` implementations:
//!
//! - **Caller-to-Registry (C2R)**: the host-facing operations for archiving,
//!   reading, modifying, transferring and removing records, plus the
//!   access-grant surface
//! - **Sequencer / Archive / Access**: internal service APIs composed by the
//!   C2R orchestrator

pub mod types;

// Re-export all types for convenience
pub use types::*;
