use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use reqwest::header::{HeaderMap, CACHE_CONTROL};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::server::{
    error::auth::AuthError,
    identity::{TokenVerifier, VerifiedIdentity},
};

static ISSUER_PREFIX: &str = "https://securetoken.google.com/";

/// Used when the key response carries no `max-age`
static DEFAULT_KEY_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Upper bound on a single key fetch, the cache write lock is held for its duration
pub static DEFAULT_KEY_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Allowed clock skew between Google and this server, in seconds
static CLOCK_SKEW_SECONDS: u64 = 60;

/// Firebase UIDs are capped at 128 characters
static MAX_UID_LENGTH: usize = 128;

#[derive(Deserialize)]
struct FirebaseClaims {
    sub: String,
    iat: i64,
    auth_time: Option<i64>,
    email: Option<String>,
}

struct CachedKeys {
    keys: JwkSet,
    expires_at: Instant,
}

/// Verifies Firebase Authentication ID tokens.
///
/// A token is accepted when it is RS256-signed by one of the keys published at the JWK URL,
/// its audience is the project ID, its issuer is `https://securetoken.google.com/<project_id>`,
/// it has not expired, it was not issued in the future, and its subject is a valid UID.
///
/// Signing keys are cached until the `max-age` of the key response expires.
pub struct FirebaseVerifier {
    project_id: String,
    jwk_url: String,
    http: reqwest::Client,
    keys: RwLock<Option<CachedKeys>>,
}

impl FirebaseVerifier {
    /// Creates a new instance of [`FirebaseVerifier`] using [`DEFAULT_KEY_FETCH_TIMEOUT`]
    pub fn new(
        project_id: impl Into<String>,
        jwk_url: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        Self::with_timeout(project_id, jwk_url, DEFAULT_KEY_FETCH_TIMEOUT)
    }

    /// Creates a new instance of [`FirebaseVerifier`] whose key fetches fail after `timeout`
    pub fn with_timeout(
        project_id: impl Into<String>,
        jwk_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            project_id: project_id.into(),
            jwk_url: jwk_url.into(),
            http,
            keys: RwLock::new(None),
        })
    }

    /// Returns the signing keys, refreshing them once the cached copy has expired
    async fn signing_keys(&self) -> Result<JwkSet, AuthError> {
        if let Some(cached) = self.keys.read().await.as_ref() {
            if cached.expires_at > Instant::now() {
                return Ok(cached.keys.clone());
            }
        }

        let mut cache = self.keys.write().await;

        // Another request may have refreshed the keys while we waited for the lock
        if let Some(cached) = cache.as_ref() {
            if cached.expires_at > Instant::now() {
                return Ok(cached.keys.clone());
            }
        }

        let response = self
            .http
            .get(&self.jwk_url)
            .send()
            .await?
            .error_for_status()?;
        let max_age = cache_max_age(response.headers());
        let keys: JwkSet = response.json().await?;

        tracing::debug!(
            key_count = keys.keys.len(),
            max_age_secs = max_age.as_secs(),
            "Refreshed ID token signing keys"
        );

        *cache = Some(CachedKeys {
            keys: keys.clone(),
            expires_at: Instant::now() + max_age,
        });

        Ok(keys)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[format!("{}{}", ISSUER_PREFIX, self.project_id)]);
        validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);
        validation.leeway = CLOCK_SKEW_SECONDS;

        validation
    }
}

#[async_trait]
impl TokenVerifier for FirebaseVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AuthError> {
        if id_token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        let header = decode_header(id_token)?;
        let key_id = header.kid.ok_or(AuthError::MissingKeyId)?;

        let keys = self.signing_keys().await?;
        let jwk = keys
            .find(&key_id)
            .ok_or_else(|| AuthError::UnknownKeyId(key_id.clone()))?;
        let decoding_key = DecodingKey::from_jwk(jwk)?;

        let claims = decode::<FirebaseClaims>(id_token, &decoding_key, &self.validation())?.claims;

        if claims.sub.is_empty() || claims.sub.chars().count() > MAX_UID_LENGTH {
            return Err(AuthError::InvalidSubject);
        }

        let latest_valid = Utc::now().timestamp() + CLOCK_SKEW_SECONDS as i64;
        if claims.iat > latest_valid {
            return Err(AuthError::IssuedInFuture("iat"));
        }
        if claims.auth_time.is_some_and(|auth_time| auth_time > latest_valid) {
            return Err(AuthError::IssuedInFuture("auth_time"));
        }

        Ok(VerifiedIdentity {
            uid: claims.sub,
            email: claims.email,
        })
    }
}

/// Reads `max-age` from the `Cache-Control` header of the key response
fn cache_max_age(headers: &HeaderMap) -> Duration {
    headers
        .get(CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            value
                .split(',')
                .filter_map(|directive| directive.trim().strip_prefix("max-age="))
                .find_map(|seconds| seconds.parse::<u64>().ok())
        })
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_KEY_MAX_AGE)
}
