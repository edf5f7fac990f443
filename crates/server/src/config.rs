//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_SHOP_DOMAIN` - Shopify store domain (e.g., your-store.myshopify.com)
//! - `SHOPIFY_ACCESS_TOKEN` - Admin API access token (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - API version (default: 2024-10)
//! - `SHOPIFY_ADMIN_STORE_HANDLE` - Store handle for admin.shopify.com links
//!   (default: shop domain without `.myshopify.com`)
//! - `SHOPIFY_HTTP_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `LOG_FORMAT` - `text` or `json` (default: text)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)

use std::collections::HashMap;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Default Admin API version.
pub const DEFAULT_API_VERSION: &str = "2024-10";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct McpConfig {
    /// Shopify Admin API configuration
    pub shopify: ShopifyConfig,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
}

/// Shopify Admin API configuration.
///
/// Implements `Debug` manually to redact the HIGH PRIVILEGE access token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub shop_domain: String,
    /// Admin API access token (HIGH PRIVILEGE - full store access)
    pub access_token: SecretString,
    /// Shopify API version (e.g., 2024-10)
    pub api_version: String,
    /// Store handle used in admin.shopify.com links
    pub admin_store_handle: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("shop_domain", &self.shop_domain)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .field("admin_store_handle", &self.admin_store_handle)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl McpConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let shopify = ShopifyConfig::from_env()?;
        let log_format = match get_env_or_default("LOG_FORMAT", "text").as_str() {
            "json" => LogFormat::Json,
            "text" => LogFormat::Text,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "LOG_FORMAT".to_string(),
                    format!("expected 'text' or 'json', got '{other}'"),
                ));
            }
        };
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            shopify,
            log_format,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
        })
    }
}

impl ShopifyConfig {
    /// Build a configuration from explicit values, using defaults for the rest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if the domain or token is empty.
    pub fn new(shop_domain: &str, access_token: &str) -> Result<Self, ConfigError> {
        let shop_domain = normalize_domain(shop_domain);
        if shop_domain.is_empty() {
            return Err(ConfigError::MissingEnvVar("SHOPIFY_SHOP_DOMAIN".to_string()));
        }
        if access_token.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("SHOPIFY_ACCESS_TOKEN".to_string()));
        }

        Ok(Self {
            admin_store_handle: default_store_handle(&shop_domain),
            shop_domain,
            access_token: SecretString::from(access_token.trim().to_string()),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load Shopify configuration from environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the domain or token is missing, or if an
    /// optional variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let domain = get_required_env("SHOPIFY_SHOP_DOMAIN")?;
        let token = get_required_env("SHOPIFY_ACCESS_TOKEN")?;

        // Warn only: private app tokens vary in shape
        if let Err(e) = validate_secret_strength(&token) {
            tracing::warn!("SHOPIFY_ACCESS_TOKEN validation warning: {e}");
        }

        let mut config = Self::new(&domain, &token)?;
        config.api_version = get_env_or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION);
        if let Some(handle) = get_optional_env("SHOPIFY_ADMIN_STORE_HANDLE") {
            config.admin_store_handle = handle;
        }
        if let Some(secs) = get_optional_env("SHOPIFY_HTTP_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPIFY_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable, treating blank values as missing.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    get_optional_env(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Strip scheme and trailing slashes from a configured shop domain.
fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim();
    let domain = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);
    domain.trim_end_matches('/').to_string()
}

/// `my-store.myshopify.com` -> `my-store`.
fn default_store_handle(shop_domain: &str) -> String {
    shop_domain
        .strip_suffix(".myshopify.com")
        .unwrap_or(shop_domain)
        .to_string()
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Check that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str) -> Result<(), String> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(format!("appears to be a placeholder (contains '{pattern}')"));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(format!(
            "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
        ));
    }

    Ok(())
}
