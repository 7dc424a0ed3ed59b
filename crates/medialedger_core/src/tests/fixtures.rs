use crate::registry::{infrastructure::naming::Principal, services::archive::MediaDraft};

pub(super) struct MediaFixture {
    owner: Principal,
    draft: MediaDraft,
}

impl MediaFixture {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: Principal::new(owner),
            draft: MediaDraft {
                name: name.to_string(),
                byte_count: 1024,
                summary: format!("{name} summary"),
                labels: vec!["video".to_string()],
            },
        }
    }

    pub fn with_byte_count(mut self, byte_count: u64) -> Self {
        self.draft.byte_count = byte_count;
        self
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.draft.summary = summary.to_string();
        self
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.draft.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn owner(&self) -> Principal {
        self.owner.to_owned()
    }
    pub fn name(&self) -> String {
        self.draft.name.to_owned()
    }
    pub fn byte_count(&self) -> u64 {
        self.draft.byte_count
    }
    pub fn summary(&self) -> String {
        self.draft.summary.to_owned()
    }
    pub fn labels(&self) -> Vec<String> {
        self.draft.labels.to_owned()
    }
}

macro_rules! archive {
    ($c2r:expr, $fixture:expr) => {
        match $c2r
            .call(crate::registry::api::RegistryRequest::ArchiveNewMedia {
                caller: $fixture.owner(),
                name: $fixture.name(),
                byte_count: $fixture.byte_count(),
                summary: $fixture.summary(),
                labels: $fixture.labels(),
            })
            .await
            .unwrap()
        {
            crate::registry::api::RegistryResponse::RecordId(record_id) => record_id,
            response => panic!("expected a record id, got {response:?}"),
        }
    };
}

macro_rules! archive_err {
    ($c2r:expr, $fixture:expr, $error:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::ArchiveNewMedia {
                caller: $fixture.owner(),
                name: $fixture.name(),
                byte_count: $fixture.byte_count(),
                summary: $fixture.summary(),
                labels: $fixture.labels(),
            })
            .await
            .unwrap_err(),
            $error
        )
    };
}

macro_rules! fetch {
    ($c2r:expr, $record_id:expr) => {
        match $c2r
            .call(crate::registry::api::RegistryRequest::GetMediaRecord { record_id: $record_id })
            .await
            .unwrap()
        {
            crate::registry::api::RegistryResponse::Record(record) => record,
            response => panic!("expected a record lookup, got {response:?}"),
        }
    };
}

macro_rules! modify {
    ($c2r:expr, $record_id:expr, $fixture:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::ModifyMediaMetadata {
                caller: $fixture.owner(),
                record_id: $record_id,
                name: $fixture.name(),
                byte_count: $fixture.byte_count(),
                summary: $fixture.summary(),
                labels: $fixture.labels(),
            })
            .await
            .unwrap(),
            crate::registry::api::RegistryResponse::Ack
        )
    };
}

macro_rules! modify_err {
    ($c2r:expr, $record_id:expr, $fixture:expr, $error:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::ModifyMediaMetadata {
                caller: $fixture.owner(),
                record_id: $record_id,
                name: $fixture.name(),
                byte_count: $fixture.byte_count(),
                summary: $fixture.summary(),
                labels: $fixture.labels(),
            })
            .await
            .unwrap_err(),
            $error
        )
    };
}

macro_rules! transfer {
    ($c2r:expr, $record_id:expr, $caller:expr, $new_owner:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::TransferMediaOwnership {
                caller: crate::registry::infrastructure::naming::Principal::new($caller),
                record_id: $record_id,
                new_owner: crate::registry::infrastructure::naming::Principal::new($new_owner),
            })
            .await
            .unwrap(),
            crate::registry::api::RegistryResponse::Ack
        )
    };
}

macro_rules! transfer_err {
    ($c2r:expr, $record_id:expr, $caller:expr, $new_owner:expr, $error:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::TransferMediaOwnership {
                caller: crate::registry::infrastructure::naming::Principal::new($caller),
                record_id: $record_id,
                new_owner: crate::registry::infrastructure::naming::Principal::new($new_owner),
            })
            .await
            .unwrap_err(),
            $error
        )
    };
}

macro_rules! remove {
    ($c2r:expr, $record_id:expr, $caller:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::RemoveMediaRecord {
                caller: crate::registry::infrastructure::naming::Principal::new($caller),
                record_id: $record_id,
            })
            .await
            .unwrap(),
            crate::registry::api::RegistryResponse::Ack
        )
    };
}

macro_rules! remove_err {
    ($c2r:expr, $record_id:expr, $caller:expr, $error:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::RemoveMediaRecord {
                caller: crate::registry::infrastructure::naming::Principal::new($caller),
                record_id: $record_id,
            })
            .await
            .unwrap_err(),
            $error
        )
    };
}

macro_rules! grant {
    ($c2r:expr, $record_id:expr, $caller:expr, $principal:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::GrantMediaAccess {
                caller: crate::registry::infrastructure::naming::Principal::new($caller),
                record_id: $record_id,
                principal: crate::registry::infrastructure::naming::Principal::new($principal),
            })
            .await
            .unwrap(),
            crate::registry::api::RegistryResponse::Ack
        )
    };
}

macro_rules! grant_err {
    ($c2r:expr, $record_id:expr, $caller:expr, $principal:expr, $error:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::GrantMediaAccess {
                caller: crate::registry::infrastructure::naming::Principal::new($caller),
                record_id: $record_id,
                principal: crate::registry::infrastructure::naming::Principal::new($principal),
            })
            .await
            .unwrap_err(),
            $error
        )
    };
}

macro_rules! revoke {
    ($c2r:expr, $record_id:expr, $caller:expr, $principal:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::RevokeMediaAccess {
                caller: crate::registry::infrastructure::naming::Principal::new($caller),
                record_id: $record_id,
                principal: crate::registry::infrastructure::naming::Principal::new($principal),
            })
            .await
            .unwrap(),
            crate::registry::api::RegistryResponse::Ack
        )
    };
}

#[allow(unused_macros)]
macro_rules! revoke_err {
    ($c2r:expr, $record_id:expr, $caller:expr, $principal:expr, $error:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::RevokeMediaAccess {
                caller: crate::registry::infrastructure::naming::Principal::new($caller),
                record_id: $record_id,
                principal: crate::registry::infrastructure::naming::Principal::new($principal),
            })
            .await
            .unwrap_err(),
            $error
        )
    };
}

macro_rules! assert_access {
    ($c2r:expr, $record_id:expr, $principal:expr, $granted:expr) => {
        assert_eq!(
            $c2r.call(crate::registry::api::RegistryRequest::CheckMediaAccess {
                record_id: $record_id,
                principal: crate::registry::infrastructure::naming::Principal::new($principal),
            })
            .await
            .unwrap(),
            crate::registry::api::RegistryResponse::Access($granted)
        )
    };
}
