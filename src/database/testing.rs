use super::UserRepository;
use crate::models::{NewUser, User};
use crate::utils::AppError;
use async_trait::async_trait;

/// Store whose every call fails the way an unreachable MongoDB does.
pub struct UnavailableUserRepository;

fn refused() -> AppError {
    AppError::DatabaseError("connection refused".into())
}

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Err(refused())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<User>, AppError> {
        Err(refused())
    }

    async fn insert(&self, _new_user: NewUser) -> Result<User, AppError> {
        Err(refused())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(refused())
    }
}
