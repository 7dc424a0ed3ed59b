//! Component services of the registry.
//!
//! - **Sequencer**: assigns monotonic, gapless record identifiers
//! - **Archive**: owns record storage and lifecycle
//! - **Access**: tracks per-record principal grants

pub mod access;
pub mod archive;
pub mod sequencer;
