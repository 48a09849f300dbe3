use jsonwebtoken::{Algorithm, Validation};
use secrecy::SecretString;
use serde::Deserialize;

/// Signing material shared by the auth middlewares and the token minting helper.
#[derive(Debug, Deserialize)]
pub struct JwtSettings {
    pub secret: SecretString,
    pub expiration_hours: i64,
    #[serde(default)]
    pub leeway_seconds: u64,
}

impl JwtSettings {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
            expiration_hours,
            leeway_seconds: 0,
        }
    }

    pub fn with_leeway(mut self, leeway_seconds: u64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    /// HS256 validation honouring the configured clock leeway.
    pub fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_seconds;
        validation
    }
}
