// tests/support/mocks/stores.rs
use async_trait::async_trait;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};
use user_activity::domain::{
    activity::{ActivityId, ActivityPage, ActivityRecord, ActivityStore, NewActivity, PageRequest},
    errors::{DomainError, DomainResult},
    user::UserId,
};

/// Append-only in-memory store with the same ordering rules as the Postgres one.
#[derive(Default)]
pub struct InMemoryActivityStore {
    next_id: AtomicI64,
    records: Mutex<Vec<ActivityRecord>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<ActivityRecord> {
        self.records.lock().expect("store poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("store poisoned").len()
    }

    fn page_of<F>(&self, page: PageRequest, keep: F) -> ActivityPage
    where
        F: Fn(&ActivityRecord) -> bool,
    {
        let mut matching: Vec<ActivityRecord> = self
            .records
            .lock()
            .expect("store poisoned")
            .iter()
            .filter(|record| keep(record))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });

        let total = u64::try_from(matching.len()).expect("count fits in u64");
        let items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).expect("offset fits in usize"))
            .take(usize::try_from(page.page_size()).expect("page size fits in usize"))
            .collect();
        ActivityPage { items, total }
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn record(&self, activity: NewActivity) -> DomainResult<ActivityRecord> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = ActivityRecord::from_parts(ActivityId::new(id)?, activity);
        self.records
            .lock()
            .expect("store poisoned")
            .push(record.clone());
        Ok(record)
    }

    async fn list_for_user(&self, user_id: UserId, page: PageRequest) -> DomainResult<ActivityPage> {
        Ok(self.page_of(page, |record| record.user_id() == user_id))
    }

    async fn list_all(&self, page: PageRequest) -> DomainResult<ActivityPage> {
        Ok(self.page_of(page, |_| true))
    }
}

/// Storage that is never reachable.
#[derive(Default)]
pub struct FailingActivityStore;

#[async_trait]
impl ActivityStore for FailingActivityStore {
    async fn record(&self, _activity: NewActivity) -> DomainResult<ActivityRecord> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_for_user(&self, _user_id: UserId, _page: PageRequest) -> DomainResult<ActivityPage> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_all(&self, _page: PageRequest) -> DomainResult<ActivityPage> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
