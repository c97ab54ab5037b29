use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length is checked separately
        Regex::new("^[A-Za-z0-9_.-]+$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0}")]
    InvalidUsername(String),

    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Username already registered")]
    UsernameAlreadyExists,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] HashError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

impl From<UserRepositoryError> for CreateUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UsernameTaken => CreateUserError::UsernameAlreadyExists,
            UserRepositoryError::EmailTaken => CreateUserError::EmailAlreadyExists,
            other => CreateUserError::RepositoryError(other),
        }
    }
}

impl CreateUserInput {
    /// Trims and normalises the fields, rejecting anything the store must never hold.
    fn validated(self) -> Result<Self, CreateUserError> {
        let username = self.username.trim().to_string();
        let length = username.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
            return Err(CreateUserError::InvalidUsername(format!(
                "Username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
            )));
        }
        if !username_regex().is_match(&username) {
            return Err(CreateUserError::InvalidUsername(
                "Username may only contain letters, digits, '_', '.' and '-'".to_string(),
            ));
        }

        let email = self.email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        if self.password.chars().count() < PASSWORD_MIN {
            return Err(CreateUserError::InvalidPassword(format!(
                "Password must be at least {PASSWORD_MIN} characters"
            )));
        }

        Ok(Self {
            username,
            email,
            password: self.password,
        })
    }
}

// Interface for CreateUser use case
#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let input = input.validated()?;

        if self.query.find_by_username(&input.username).await?.is_some() {
            return Err(CreateUserError::UsernameAlreadyExists);
        }

        if self.query.find_by_email(&input.email).await?.is_some() {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let password_hash = self.password_hasher.hash_password(&input.password).await?;

        // The unique constraints still decide races between concurrent registrations.
        let created = self
            .repository
            .create_user(CreateUserData {
                username: input.username,
                email: input.email,
                password_hash,
            })
            .await?;

        Ok(CreateUserOutput {
            user_id: created.id,
            username: created.username,
            email: created.email,
            created_at: created.created_at,
        })
    }
}
