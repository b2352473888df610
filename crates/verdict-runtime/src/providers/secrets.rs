//! Secure credential handling for LLM providers.
//!
//! API keys are wrapped at load time so they cannot appear in `Debug`
//! output, log lines, or error messages. The underlying storage is
//! [`secrecy::SecretString`], which also zeroes the value on drop.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use super::ProviderError;

/// Where a credential was loaded from.
///
/// Useful for debugging configuration issues without exposing the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A securely-stored API credential.
///
/// - `Debug` shows `[REDACTED]`, never the value
/// - the value is zeroed on drop
/// - exposure is explicit via [`ApiCredential::expose`], meant to be called
///   only at the point of use (an HTTP header), never stored
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
    name: &'static str,
}

impl ApiCredential {
    /// Wrap a credential value. After this point it cannot be logged by
    /// accident.
    pub fn new(value: impl Into<String>, source: CredentialSource, name: &'static str) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
            name,
        }
    }

    /// Load a credential from an environment variable.
    ///
    /// `name` is the human-readable label used in error messages
    /// (e.g. "Gemini API key").
    pub fn from_env(env_var: &str, name: &'static str) -> Result<Self, ProviderError> {
        std::env::var(env_var)
            .map(|v| Self::new(v, CredentialSource::Environment, name))
            .map_err(|_| {
                ProviderError::NotConfigured(format!(
                    "{name} not set: configure '{env_var}' environment variable"
                ))
            })
    }

    /// Expose the credential value for use in an API call.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    /// Check if the credential is empty.
    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().is_empty()
    }

    /// Where this credential came from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_value() {
        let cred = ApiCredential::new(
            "super-secret-key-12345",
            CredentialSource::Programmatic,
            "Test key",
        );
        let debug = format!("{cred:?}");
        assert!(!debug.contains("super-secret-key-12345"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_returns_value() {
        let cred =
            ApiCredential::new("key-value", CredentialSource::Programmatic, "Test key");
        assert_eq!(cred.expose(), "key-value");
        assert!(!cred.is_empty());
        assert_eq!(cred.source(), CredentialSource::Programmatic);
    }

    #[test]
    fn test_from_env_missing_is_not_configured() {
        let result = ApiCredential::from_env("VERDICT_TEST_NO_SUCH_VAR", "Test key");
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }
}
