//! Document service credentials
//!
//! The extractor only sees [`DocumentCredentialProvider`]. The production
//! implementation signs a service-account JWT assertion and exchanges it
//! for a short-lived read-only bearer token.

use crate::config::Config;
use crate::error::ExtractError;
use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

const TOKEN_LIFETIME_SECS: i64 = 3600;
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Yields a bearer token for the document service.
#[async_trait]
pub trait DocumentCredentialProvider: Send + Sync {
    async fn bearer_token(&self) -> Result<String, ExtractError>;
}

/// The fields of a service-account JSON descriptor that token exchange needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

impl ServiceAccountKey {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Service-account backed [`DocumentCredentialProvider`].
pub struct ServiceAccountProvider {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    scope: String,
    client: reqwest::Client,
}

impl ServiceAccountProvider {
    /// Fails if the private key is not a valid RSA PEM.
    pub fn new(
        key: ServiceAccountKey,
        scope: impl Into<String>,
        client: reqwest::Client,
    ) -> jsonwebtoken::errors::Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
        Ok(Self {
            key,
            encoding_key,
            scope: scope.into(),
            client,
        })
    }

    fn signed_assertion(&self) -> Result<String, ExtractError> {
        let now = chrono::Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: &self.scope,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };
        encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key).map_err(|e| {
            ExtractError::transport(&self.key.token_uri, format!("failed to sign assertion: {}", e))
        })
    }
}

#[async_trait]
impl DocumentCredentialProvider for ServiceAccountProvider {
    async fn bearer_token(&self) -> Result<String, ExtractError> {
        let assertion = self.signed_assertion()?;
        let token_uri = self.key.token_uri.as_str();

        debug!("exchanging service-account assertion for {}", self.key.client_email);

        let response = self
            .client
            .post(token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| ExtractError::transport(token_uri, e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ExtractError::transport(
                token_uri,
                format!("HTTP {}: {}", status, detail),
            ));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(ExtractError::upstream_parse)?;
        Ok(token.access_token)
    }
}

/// Build the provider from `GOOGLE_CREDENTIALS`, once per process.
///
/// Missing or malformed descriptors yield `None`; the document extractor
/// then answers every call with [`ExtractError::NotConfigured`].
pub fn load_credentials(
    config: &Config,
    client: reqwest::Client,
) -> Option<Arc<dyn DocumentCredentialProvider>> {
    let Some(raw) = config.google_credentials.as_deref() else {
        warn!("⚠️ GOOGLE_CREDENTIALS is not set; document extraction is disabled");
        return None;
    };

    let key = match ServiceAccountKey::from_json(raw) {
        Ok(key) => key,
        Err(e) => {
            warn!("⚠️ GOOGLE_CREDENTIALS is not a valid service-account descriptor: {}", e);
            return None;
        }
    };

    match ServiceAccountProvider::new(key, config.docs_scope.clone(), client) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(e) => {
            warn!("⚠️ GOOGLE_CREDENTIALS private key is unusable: {}", e);
            None
        }
    }
}
