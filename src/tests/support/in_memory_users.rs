use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError, UserResult,
};
use crate::tests::support::in_memory_calculations::InMemoryCalculations;

/// User store whose deletes cascade into the linked calculation store, the
/// way the foreign key does in Postgres.
#[derive(Clone)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<UserQueryResult>>>,
    calculations: InMemoryCalculations,
}

impl InMemoryUsers {
    pub fn new(calculations: InMemoryCalculations) -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            calculations,
        }
    }

    fn find(&self, pred: impl Fn(&UserQueryResult) -> bool) -> Option<UserQueryResult> {
        self.users.lock().unwrap().iter().find(|u| pred(u)).cloned()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.find(|u| u.id == user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.find(|u| u.email == email))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.find(|u| u.username == username))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == data.username) {
            return Err(UserRepositoryError::UsernameTaken);
        }
        if users.iter().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::EmailTaken);
        }

        let row = UserQueryResult {
            id: UserId::from(Uuid::new_v4()),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        };
        users.push(row.clone());
        self.calculations.register_owner(row.id);

        Ok(UserResult {
            id: row.id,
            username: row.username,
            email: row.email,
            created_at: row.created_at,
        })
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);

        if users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }

        self.calculations.remove_owner(user_id);
        Ok(())
    }
}
