use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::modules::calculation::adapter::outgoing::sea_orm_entity::calculations;
use crate::shared::db_error::{constraint_violation, ConstraintViolation};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: UserId::from(model.id),
            username: model.username,
            email: model.email,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_insert_err)?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let id: Uuid = user_id.into();
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // The foreign key cascades as well; deleting explicitly keeps the
        // guarantee on schemas created without it.
        let removed = calculations::Entity::delete_many()
            .filter(calculations::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let deleted = UserEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if deleted.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(UserRepositoryError::UserNotFound);
        }

        txn.commit().await.map_err(map_db_err)?;

        debug!(
            user_id = %user_id,
            calculations_removed = removed.rows_affected,
            "User deleted"
        );

        Ok(())
    }
}

fn map_insert_err(e: DbErr) -> UserRepositoryError {
    match constraint_violation(&e) {
        Some(ConstraintViolation::Unique(msg)) if msg.contains("username") => {
            UserRepositoryError::UsernameTaken
        }
        Some(ConstraintViolation::Unique(msg)) if msg.contains("email") => {
            UserRepositoryError::EmailTaken
        }
        _ => map_db_err(e),
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn create_data() -> CreateUserData {
        CreateUserData {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hashed".to_string(),
        }
    }

    fn user_model(id: Uuid) -> UserModel {
        UserModel {
            id,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hashed".to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id)]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_user(create_data()).await.unwrap();

        assert_eq!(created.id, UserId::from(id));
        assert_eq!(created.username, "alice");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"users_username_key\"".to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(create_data()).await;

        assert!(matches!(result, Err(UserRepositoryError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(create_data()).await;

        assert!(matches!(result, Err(UserRepositoryError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(create_data()).await;

        assert!(matches!(result, Err(UserRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_delete_user_removes_calculations_then_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(3), exec(1)])
            .into_connection();
        let db = Arc::new(db);

        let repo = UserRepositoryPostgres::new(Arc::clone(&db));
        let result = repo.delete_user(UserId::from(Uuid::new_v4())).await;
        assert!(result.is_ok());

        drop(repo);
        let db = Arc::into_inner(db).expect("adapter released the connection");
        let log = format!("{:?}", db.into_transaction_log());
        let calc_pos = log.find("calculations");
        let user_pos = log.find("users");
        assert!(calc_pos.is_some(), "calculations should be deleted: {log}");
        assert!(user_pos.is_some(), "user should be deleted: {log}");
        assert!(calc_pos < user_pos);
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0), exec(0)])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_user(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("deadlock detected".to_string())])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete_user(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(UserRepositoryError::DatabaseError(_))));
    }
}
