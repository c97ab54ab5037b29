use crate::shared::config::{parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;
    pub const MAX_ACCESS_EXPIRY: i64 = 86_400;

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!(
                    "must be at least {} characters for HS256",
                    Self::MIN_SECRET_LEN
                ),
            });
        }

        let access_token_expiry: i64 = parse_or(lookup, "JWT_ACCESS_EXPIRY", 1800)?;
        if access_token_expiry <= 0 || access_token_expiry > Self::MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!(
                    "must be between 1 and {} seconds",
                    Self::MAX_ACCESS_EXPIRY
                ),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "calc-history".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_with(secret: &'static str, expiry: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| match key {
            "JWT_SECRET" => Some(secret.to_string()),
            "JWT_ACCESS_EXPIRY" => expiry.map(str::to_string),
            _ => None,
        }
    }

    #[test]
    fn short_secret_is_rejected() {
        let result = JwtConfig::from_lookup(&lookup_with("too-short", None));
        assert!(matches!(result, Err(ConfigError::Invalid { key: "JWT_SECRET", .. })));
    }

    #[test]
    fn expiry_out_of_range_is_rejected() {
        let secret = "0123456789abcdef0123456789abcdef";

        let zero = JwtConfig::from_lookup(&lookup_with(secret, Some("0")));
        assert!(matches!(zero, Err(ConfigError::Invalid { key: "JWT_ACCESS_EXPIRY", .. })));

        let too_long = JwtConfig::from_lookup(&lookup_with(secret, Some("86401")));
        assert!(matches!(too_long, Err(ConfigError::Invalid { key: "JWT_ACCESS_EXPIRY", .. })));
    }

    #[test]
    fn defaults_apply() {
        let config =
            JwtConfig::from_lookup(&lookup_with("0123456789abcdef0123456789abcdef", None)).unwrap();

        assert_eq!(config.issuer, "calc-history");
        assert_eq!(config.access_token_expiry, 1800);
    }
}
