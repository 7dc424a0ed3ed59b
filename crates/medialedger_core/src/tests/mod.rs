#[macro_use]
mod fixtures;


use fixtures::MediaFixture;
use tower::Service;

use crate::registry::{
    error::RegistryError,
    infrastructure::naming::{LedgerClock, Principal},
    init_registry, init_registry_with_seeded_records,
};

#[tokio::test]
async fn integration_registry_full_lifecycle() {
    // flowchart LR
    //     A[Caller A] -->|1 archive| R1(Record 1)
    //     B[Caller B] -->|2 modify, refused| R1
    //     A -->|3 transfer to B| R1
    //     A -->|4 remove, refused| R1
    //     B -->|5 remove| R1

    #[cfg(feature = "medialedger_tracing")]
    crate::medialedger_tracing::init();
    let mut c2r = init_registry(LedgerClock::default());

    let clip = MediaFixture::new("A", "clip.mp4").with_summary("demo");
    let record_id = archive!(c2r, clip);
    assert_eq!(record_id, 1);

    // B holds no ownership over the record
    let revision = MediaFixture::new("B", "clip_v2.mp4");
    modify_err!(
        c2r,
        record_id,
        revision,
        RegistryError::OwnershipViolation { record_id, caller: Principal::new("B") }
    );

    transfer!(c2r, record_id, "A", "B");

    // A lost the record with the transfer
    remove_err!(
        c2r,
        record_id,
        "A",
        RegistryError::OwnershipViolation { record_id, caller: Principal::new("A") }
    );

    remove!(c2r, record_id, "B");

    // Removal is terminal, for every caller
    let late = MediaFixture::new("B", "clip_v3.mp4");
    modify_err!(c2r, record_id, late, RegistryError::MissingRecord(record_id));
    assert_eq!(fetch!(c2r, record_id), None);
}

#[tokio::test]
async fn integration_registry_seeded_records() {
    #[cfg(feature = "medialedger_tracing")]
    crate::medialedger_tracing::init();
    let mut c2r =
        init_registry_with_seeded_records(LedgerClock::default(), Principal::new("curator"), 5);

    // Seeded records are fully owned and readable
    assert!(fetch!(c2r, 3).is_some());
    assert_access!(c2r, 3, "curator", true);
    remove!(c2r, 3, "curator");

    // The sequencer resumes after the seeded identifiers
    let clip = MediaFixture::new("curator", "clip.mp4");
    assert_eq!(archive!(c2r, clip), 6);
}

#[tokio::test]
async fn integration_registry_stress_concurrent_creations() {
    #[cfg(feature = "medialedger_tracing")]
    crate::medialedger_tracing::init();
    let caller_count = 10u64;
    let per_caller_record_count = 20u64;

    let c2r = init_registry(LedgerClock::default());

    let mut tasks = Vec::new();
    for caller in 0..caller_count {
        let mut c2r_clone = c2r.clone();
        let task = tokio::spawn(async move {
            let fixture = MediaFixture::new(&format!("caller-{caller}"), "clip.mp4");
            let mut record_ids = Vec::new();
            for _ in 0..per_caller_record_count {
                record_ids.push(archive!(c2r_clone, fixture));
            }
            record_ids
        });
        tasks.push(task);
    }

    let mut record_ids = Vec::new();
    for task in tasks {
        record_ids.extend(task.await.unwrap());
    }

    // Every creation got a distinct identifier and none were skipped
    record_ids.sort_unstable();
    record_ids.dedup();
    assert_eq!(record_ids.len() as u64, caller_count * per_caller_record_count);
    assert_eq!(*record_ids.first().unwrap(), 1);
    assert_eq!(*record_ids.last().unwrap(), caller_count * per_caller_record_count);
}
