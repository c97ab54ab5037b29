#[cfg(test)]
pub mod test_helpers {
    use actix_web::web;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::TokenProvider;

    pub const TEST_SECRET: &str = "test_secret_key_for_testing_only_0123456789";
    pub const TEST_ISSUER: &str = "calc-history";

    pub fn jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: TEST_SECRET.to_string(),
            issuer: TEST_ISSUER.to_string(),
            access_token_expiry: 3600,
        })
    }

    /// `Authorization` header value carrying a fresh access token for `user_id`.
    pub fn bearer_for(user_id: Uuid) -> String {
        let token = jwt_service()
            .generate_access_token(user_id)
            .expect("test token");
        format!("Bearer {token}")
    }

    pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
        Arc::new(jwt_service())
    }

    pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        web::Data::new(token_provider())
    }
}
