use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::ports::{Clock, UserRepository};

// Application state shared by every request task.
#[derive(Clone)]
pub struct AppState {
    // Seeded once by the composition root, never mutated afterwards.
    pub users: Arc<[User]>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(users: Vec<User>) -> Self {
        Self::with_clock(users, Arc::new(SystemClock::default()))
    }

    pub fn with_clock(users: Vec<User>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Arc::from(users),
            clock,
        }
    }

    pub fn repository(&self) -> InMemoryUserRepository {
        InMemoryUserRepository {
            users: self.users.clone(),
        }
    }
}

// In-memory user list adapter; lookups are a linear scan.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    pub users: Arc<[User]>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }
}

// System clock adapter, truncated to milliseconds.
// Readings never go backwards within a process even if the wall clock does.
#[derive(Default)]
pub struct SystemClock {
    high_water_millis: AtomicI64,
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let wall = Utc::now();
        let millis = wall.timestamp_millis();
        let latest = self
            .high_water_millis
            .fetch_max(millis, Ordering::SeqCst)
            .max(millis);

        Utc.timestamp_millis_opt(latest).single().unwrap_or(wall)
    }
}
