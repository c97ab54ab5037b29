use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenError, TokenProvider, UserQuery, UserQueryError,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            username: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.username, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(#[from] HashError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(#[from] TokenError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserInfo,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // Unknown username and wrong password are reported identically
        let user = self
            .query
            .find_by_username(request.username())
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self.token_provider.generate_access_token(user.id.value())?;

        Ok(LoginUserResponse {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: self.token_provider.access_token_ttl(),
            user: UserInfo {
                id: user.id,
                username: user.username,
                email: user.email,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{TokenClaims, UserQueryResult};
    use chrono::Utc;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    mock! {
        pub UserQueryMock {}
        #[async_trait]
        impl UserQuery for UserQueryMock {
            async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
        }
    }

    struct PlainHasher;

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed::{password}"))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed::{password}"))
        }
    }

    struct StubTokenProvider;

    impl TokenProvider for StubTokenProvider {
        fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
            Ok(format!("token-for-{user_id}"))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in login tests")
        }

        fn access_token_ttl(&self) -> i64 {
            1800
        }
    }

    fn stored_user(id: Uuid) -> UserQueryResult {
        UserQueryResult {
            id: UserId::from(id),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hashed::password123".to_string(),
            created_at: Utc::now(),
        }
    }

    fn use_case(query: MockUserQueryMock) -> LoginUserUseCase<MockUserQueryMock> {
        LoginUserUseCase::new(query, Arc::new(PlainHasher), Arc::new(StubTokenProvider))
    }

    #[tokio::test]
    async fn test_login_success_returns_bearer_token() {
        let user_id = Uuid::new_v4();
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_username()
            .with(eq("alice"))
            .times(1)
            .returning(move |_| Ok(Some(stored_user(user_id))));

        let request = LoginRequest::new("alice".to_string(), "password123".to_string()).unwrap();
        let response = use_case(query).execute(request).await.unwrap();

        assert_eq!(response.access_token, format!("token-for-{user_id}"));
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.expires_in, 1800);
        assert_eq!(response.user.id, UserId::from(user_id));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(Uuid::new_v4()))));

        let request = LoginRequest::new("alice".to_string(), "wrong-pass".to_string()).unwrap();
        let result = use_case(query).execute(request).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_indistinguishable_from_wrong_password() {
        let mut query = MockUserQueryMock::new();
        query.expect_find_by_username().returning(|_| Ok(None));

        let request = LoginRequest::new("ghost".to_string(), "password123".to_string()).unwrap();
        let result = use_case(query).execute(request).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_query_error() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_username()
            .returning(|_| Err(UserQueryError::DatabaseError("down".to_string())));

        let request = LoginRequest::new("alice".to_string(), "password123".to_string()).unwrap();
        let result = use_case(query).execute(request).await;

        assert!(matches!(result, Err(LoginError::QueryError(_))));
    }

    #[test]
    fn test_login_request_trims_username() {
        let request = LoginRequest::new("  alice ".to_string(), "pw".to_string()).unwrap();
        assert_eq!(request.username(), "alice");
    }

    #[test]
    fn test_login_request_rejects_empty_fields() {
        assert!(matches!(
            LoginRequest::new("   ".to_string(), "pw".to_string()),
            Err(LoginRequestError::EmptyUsername)
        ));
        assert!(matches!(
            LoginRequest::new("alice".to_string(), String::new()),
            Err(LoginRequestError::EmptyPassword)
        ));
    }

    #[test]
    fn test_login_request_deserialization_validates() {
        let ok: Result<LoginRequest, _> =
            serde_json::from_str(r#"{"username":"alice","password":"secret"}"#);
        assert!(ok.is_ok());

        let bad: Result<LoginRequest, _> =
            serde_json::from_str(r#"{"username":"","password":"secret"}"#);
        assert!(bad.is_err());
    }
}
