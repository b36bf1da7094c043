use super::UserRepository;
use crate::models::{NewUser, User};
use crate::utils::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local user store, selected when no `DATABASE_URL` is configured.
/// Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id() == Some(id)).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User::from_new(new_user);
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn new_user(id: &str, name: &str) -> NewUser {
        NewUser {
            id: id.to_string(),
            attributes: doc! { "name": name },
        }
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.find_by_id("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_is_exact_match() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("u1", "Ann")).await.unwrap();

        assert!(repo.find_by_id("u1").await.unwrap().is_some());
        assert!(repo.find_by_id("U1").await.unwrap().is_none());
        assert!(repo.find_by_id("u").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_returns_first_duplicate() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(new_user("dup", "first")).await.unwrap();
        repo.insert(new_user("dup", "second")).await.unwrap();

        assert_eq!(repo.find_by_id("dup").await.unwrap(), Some(first));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_seeded_documents_without_id_are_listed_but_never_matched() {
        let repo = InMemoryUserRepository::with_users(vec![User::from_document(
            doc! { "name": "legacy" },
        )]);

        assert_eq!(repo.find_all().await.unwrap().len(), 1);
        assert!(repo.find_by_id("").await.unwrap().is_none());
    }
}
