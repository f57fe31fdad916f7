use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::User;

// Port for the read-only user list consumed by lookup use cases.
// A miss is `None`, never an error; callers decide what a miss means.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Option<User>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
