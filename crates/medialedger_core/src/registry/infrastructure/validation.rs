//! Field validation for media metadata.
//!
//! This module provides the pure predicates that gate every record creation
//! and amendment. Validators are total functions returning a boolean; the
//! services combine them into a fixed-order sequence of assertions, each
//! mapped to its own error kind, so the first violated bound aborts the call
//! before any state is touched.
//!
//! ## Bounds
//!
//! | Field | Bound |
//! |---|---|
//! | name | length in `[1, 64)` |
//! | byte_count | in `(0, 1_000_000_000)` |
//! | summary | length in `[1, 128)` |
//! | label | length in `[1, 32]` |
//! | label set | 1 to 10 labels, each individually valid |

use crate::registry::{error::RegistryError, services::archive::MediaDraft};

/// Maximum accepted media name length, inclusive.
pub const MAX_NAME_LEN: usize = 63;
/// Maximum accepted media summary length, inclusive.
pub const MAX_SUMMARY_LEN: usize = 127;
/// Maximum accepted media byte count, inclusive.
pub const MAX_BYTE_COUNT: u64 = 999_999_999;
/// Maximum accepted label length, inclusive.
pub const MAX_LABEL_LEN: usize = 32;
/// Maximum accepted number of labels per record, inclusive.
pub const MAX_LABEL_COUNT: usize = 10;

/// Stateless validator for media metadata fields.
///
/// All predicates are pure and side-effect free; they never fail, they only
/// report whether the field satisfies its declared bound.
#[derive(Debug, Clone, Default)]
pub struct MetadataValidator;

impl MetadataValidator {
    /// True iff the name length is in `[1, 64)`.
    pub fn is_valid_name(&self, name: &str) -> bool {
        !name.is_empty() && name.len() <= MAX_NAME_LEN
    }

    /// True iff the byte count is in `(0, 1_000_000_000)`.
    pub fn is_valid_byte_count(&self, byte_count: u64) -> bool {
        byte_count > 0 && byte_count <= MAX_BYTE_COUNT
    }

    /// True iff the summary length is in `[1, 128)`.
    pub fn is_valid_summary(&self, summary: &str) -> bool {
        !summary.is_empty() && summary.len() <= MAX_SUMMARY_LEN
    }

    /// True iff the label length is in `[1, 32]`.
    pub fn is_valid_label(&self, label: &str) -> bool {
        !label.is_empty() && label.len() <= MAX_LABEL_LEN
    }

    /// True iff the set holds 1 to 10 labels and every label validates.
    /// An empty list is invalid.
    pub fn is_valid_label_set(&self, labels: &[String]) -> bool {
        !labels.is_empty()
            && labels.len() <= MAX_LABEL_COUNT
            && labels.iter().all(|label| self.is_valid_label(label))
    }

    /// Runs the assertions in creation-argument order (name, byte count,
    /// summary, labels) and returns the error kind of the first violated
    /// bound, or `None` when the draft is fully valid.
    pub fn first_violation(&self, draft: &MediaDraft) -> Option<RegistryError> {
        if !self.is_valid_name(&draft.name) {
            return Some(RegistryError::InvalidName(draft.name.clone()));
        }
        if !self.is_valid_byte_count(draft.byte_count) {
            return Some(RegistryError::InvalidSize(draft.byte_count));
        }
        if !self.is_valid_summary(&draft.summary) {
            return Some(RegistryError::InvalidSummary(draft.summary.clone()));
        }
        if !self.is_valid_label_set(&draft.labels) {
            // Carries the first offending label, or the empty string when the
            // set size itself is out of bounds.
            let offending = draft
                .labels
                .iter()
                .find(|label| !self.is_valid_label(label))
                .cloned()
                .unwrap_or_default();
            return Some(RegistryError::MalformedLabel(offending));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> MediaDraft {
        MediaDraft {
            name: "clip.mp4".to_string(),
            byte_count: 1024,
            summary: "demo".to_string(),
            labels: vec!["video".to_string()],
        }
    }

    #[test]
    fn unit_validation_name_bounds() {
        let validator = MetadataValidator;
        assert!(!validator.is_valid_name(""));
        assert!(validator.is_valid_name("a"));
        assert!(validator.is_valid_name(&"a".repeat(63)));
        assert!(!validator.is_valid_name(&"a".repeat(64)));
    }

    #[test]
    fn unit_validation_byte_count_bounds() {
        let validator = MetadataValidator;
        assert!(!validator.is_valid_byte_count(0));
        assert!(validator.is_valid_byte_count(1));
        assert!(validator.is_valid_byte_count(999_999_999));
        assert!(!validator.is_valid_byte_count(1_000_000_000));
    }

    #[test]
    fn unit_validation_summary_bounds() {
        let validator = MetadataValidator;
        assert!(!validator.is_valid_summary(""));
        assert!(validator.is_valid_summary(&"s".repeat(127)));
        assert!(!validator.is_valid_summary(&"s".repeat(128)));
    }

    #[test]
    fn unit_validation_label_set_bounds() {
        let validator = MetadataValidator;
        assert!(!validator.is_valid_label_set(&[]));
        assert!(validator.is_valid_label_set(&["video".to_string()]));
        // 10 labels of exactly 32 characters is the largest valid set
        let max_set = vec!["l".repeat(32); 10];
        assert!(validator.is_valid_label_set(&max_set));
        let oversized_set = vec!["l".to_string(); 11];
        assert!(!validator.is_valid_label_set(&oversized_set));
        assert!(!validator.is_valid_label_set(&["".to_string()]));
        assert!(!validator.is_valid_label_set(&["l".repeat(33)]));
    }

    #[test]
    fn unit_validation_first_violation_order() {
        let validator = MetadataValidator;
        assert_eq!(validator.first_violation(&valid_draft()), None);

        // Name is checked before byte count even when both are invalid
        let mut draft = valid_draft();
        draft.name = String::new();
        draft.byte_count = 0;
        assert_eq!(validator.first_violation(&draft), Some(RegistryError::InvalidName(String::new())));

        let mut draft = valid_draft();
        draft.byte_count = 1_000_000_000;
        assert_eq!(
            validator.first_violation(&draft),
            Some(RegistryError::InvalidSize(1_000_000_000))
        );

        let mut draft = valid_draft();
        draft.summary = String::new();
        assert_eq!(
            validator.first_violation(&draft),
            Some(RegistryError::InvalidSummary(String::new()))
        );

        let mut draft = valid_draft();
        draft.labels = vec!["ok".to_string(), "x".repeat(33)];
        assert_eq!(
            validator.first_violation(&draft),
            Some(RegistryError::MalformedLabel("x".repeat(33)))
        );

        let mut draft = valid_draft();
        draft.labels = vec![];
        assert_eq!(
            validator.first_violation(&draft),
            Some(RegistryError::MalformedLabel(String::new()))
        );
    }
}
