//! Identity and identifier types for the registry.
//!
//! This module defines the naming conventions used throughout the registry:
//! record identifiers, principal identities, and ledger heights. It also
//! provides the [`HeightSource`] seam through which the execution environment
//! supplies the monotonically increasing height captured at record creation.
//!
//! ## Identifier Semantics
//!
//! **Record identifiers** are unsigned integers assigned exactly once by the
//! sequencer; they are never caller-supplied and never reused, even after the
//! record they name is deleted.
//!
//! **Principals** are opaque identities compared only for equality. The
//! registry models authorization as a capability check (`caller == owner`),
//! not a role system, so no structure beyond equality is needed.
//!
//! **Heights** are supplied by the execution environment once per call and
//! are captured immutably on the record at creation time.

use std::{
    fmt::Display,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

/// Unique identifier of a stored media record.
pub type RecordId = u64;

/// Monotonically increasing value supplied by the execution environment.
pub type Height = u64;

/// Opaque identity of a calling or granted principal.
///
/// Principals are compared only for equality; ownership of a record is
/// exactly the capability to mutate it.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Principal(String);

impl Principal {
    /// Creates a principal from any string-like identity.
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// Returns the underlying identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(identity: &str) -> Self {
        Self(identity.to_string())
    }
}

impl From<String> for Principal {
    fn from(identity: String) -> Self {
        Self(identity)
    }
}

/// Seam to the execution environment's height counter.
///
/// The registry captures the current height on each record at creation time
/// and never mutates it afterwards. Implementations must be monotonically
/// non-decreasing across calls on the same instance.
pub trait HeightSource {
    /// Returns the height to attach to the call being processed.
    fn current_height(&self) -> Height;
}

/// Default in-process height source.
///
/// Advances by one on every observation, so each public call sees a fresh
/// height, mirroring a host that increments its counter per invocation.
/// Cloned clocks share the same counter.
#[derive(Debug, Clone, Default)]
pub struct LedgerClock {
    height: Arc<AtomicU64>,
}

impl LedgerClock {
    /// Creates a clock whose next observed height is `height + 1`.
    pub fn starting_at(height: Height) -> Self {
        Self { height: Arc::new(AtomicU64::new(height)) }
    }
}

impl HeightSource for LedgerClock {
    fn current_height(&self) -> Height {
        self.height.fetch_add(1, Ordering::SeqCst) + 1
    }
}
