use crate::domain::entities::User;
use crate::domain::errors::Failure;
use crate::domain::ports::UserRepository;

// User lookup use case with an injected repository.
pub struct FindUserUseCase<R> {
    pub repository: R,
}

impl<R> FindUserUseCase<R>
where
    R: UserRepository,
{
    // Raising lookup: a miss becomes `Failure::UserNotFound` for the dispatcher.
    pub async fn execute(&self, id: i64) -> Result<User, Failure> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or_else(Failure::user_not_found)
    }

    // Non-raising lookup for callers that answer a miss themselves.
    pub async fn find(&self, id: i64) -> Option<User> {
        self.repository.find_by_id(id).await
    }
}
