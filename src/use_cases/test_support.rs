use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::User;
use crate::domain::ports::{Clock, UserRepository};

// Shared fixed time source for deterministic tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_millis(millis: i64) -> Self {
        let instant = Utc
            .timestamp_millis_opt(millis)
            .single()
            .expect("expected a valid test timestamp");
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// Fake repository that counts lookups so tests can check what the use case asked for.
#[derive(Clone)]
pub(crate) struct RecordingRepository {
    users: Vec<User>,
    lookups: Arc<AtomicUsize>,
}

impl RecordingRepository {
    pub(crate) fn new(users: Vec<User>) -> Self {
        Self {
            users,
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn with_default_users() -> Self {
        Self::new(vec![
            User::new(1, "Daniel", "Santiago"),
            User::new(2, "Cristiano", "Ronaldo"),
        ])
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for RecordingRepository {
    async fn find_by_id(&self, id: i64) -> Option<User> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.users.iter().find(|user| user.id == id).cloned()
    }
}
