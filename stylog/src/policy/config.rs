//! Sensitive-key configuration for the redaction walk.
//!
//! Keys are matched case-insensitively: both the configured keys and the keys
//! found in the data are lower-cased before comparison. Strong keys are always
//! part of the sensitive set.

use std::collections::BTreeSet;

#[cfg(feature = "json")]
use serde::Deserialize;

/// Maximum nesting depth walked before the depth sentinel is substituted.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Keys whose values are always fully masked.
const DEFAULT_STRONG_KEYS: &[&str] = &[
    "password",
    "passwd",
    "pwd",
    "secret",
    "clientsecret",
    "token",
    "accesstoken",
    "refreshtoken",
    "idtoken",
    "apikey",
    "api_key",
    "privatekey",
    "private_key",
    "authorization",
    "creditcard",
    "cardnumber",
];

/// Keys whose values are masked by type (in addition to the strong keys).
const DEFAULT_SENSITIVE_KEYS: &[&str] = &[
    "cvv",
    "cvc",
    "pin",
    "ssn",
    "iban",
    "accountnumber",
    "routingnumber",
    "sessionid",
    "cookie",
    "phone",
];

/// How a key is treated by the redaction walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyClass {
    /// Fully masked regardless of the value type.
    Strong,
    /// Masked according to the value type.
    Sensitive,
    /// Not sensitive: objects are walked, primitives copied.
    Plain,
}

/// Sensitive-key sets and limits for redaction.
///
/// ```rust
/// use stylog::{KeyClass, RedactionConfig};
///
/// let config = RedactionConfig::default().with_sensitive_key("Email");
/// assert_eq!(config.classify("EMAIL"), KeyClass::Sensitive);
/// assert_eq!(config.classify("Password"), KeyClass::Strong);
/// assert_eq!(config.classify("username"), KeyClass::Plain);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedactionConfig {
    strong_keys: BTreeSet<String>,
    sensitive_keys: BTreeSet<String>,
    max_depth: usize,
}

impl RedactionConfig {
    /// A configuration with no sensitive keys at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            strong_keys: BTreeSet::new(),
            sensitive_keys: BTreeSet::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Adds a key masked by value type.
    #[must_use]
    pub fn with_sensitive_key(mut self, key: impl AsRef<str>) -> Self {
        self.sensitive_keys.insert(key.as_ref().to_lowercase());
        self
    }

    /// Adds a key that is always fully masked.
    #[must_use]
    pub fn with_strong_key(mut self, key: impl AsRef<str>) -> Self {
        let key = key.as_ref().to_lowercase();
        self.sensitive_keys.insert(key.clone());
        self.strong_keys.insert(key);
        self
    }

    /// Sets the depth ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Depth ceiling of the walk.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Classifies `key`, ignoring case.
    #[must_use]
    pub fn classify(&self, key: &str) -> KeyClass {
        let key = key.to_lowercase();
        if !self.sensitive_keys.contains(&key) {
            KeyClass::Plain
        } else if self.strong_keys.contains(&key) {
            KeyClass::Strong
        } else {
            KeyClass::Sensitive
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// ```rust
    /// # #[cfg(feature = "json")]
    /// # {
    /// use stylog::{KeyClass, RedactionConfig};
    ///
    /// let config = RedactionConfig::from_json_str(
    ///     r#"{ "sensitive_keys": ["email"], "max_depth": 8 }"#,
    /// ).unwrap();
    /// assert_eq!(config.classify("email"), KeyClass::Sensitive);
    /// assert_eq!(config.classify("password"), KeyClass::Strong);
    /// assert_eq!(config.max_depth(), 8);
    /// # }
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json_str(input: &str) -> crate::Result<Self> {
        let raw: RawRedactionConfig = serde_json::from_str(input)?;
        Ok(Self::from(raw))
    }
}

impl std::default::Default for RedactionConfig {
    fn default() -> Self {
        let config = DEFAULT_STRONG_KEYS
            .iter()
            .fold(Self::empty(), |config, key| config.with_strong_key(key));
        DEFAULT_SENSITIVE_KEYS
            .iter()
            .fold(config, |config, key| config.with_sensitive_key(key))
    }
}

/// Serialized form of [`RedactionConfig`].
#[cfg(feature = "json")]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRedactionConfig {
    #[serde(default)]
    sensitive_keys: Vec<String>,
    #[serde(default)]
    strong_keys: Vec<String>,
    #[serde(default = "default_max_depth")]
    max_depth: usize,
    #[serde(default = "default_extend")]
    extend_defaults: bool,
}

#[cfg(feature = "json")]
fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

#[cfg(feature = "json")]
fn default_extend() -> bool {
    true
}

#[cfg(feature = "json")]
impl From<RawRedactionConfig> for RedactionConfig {
    fn from(raw: RawRedactionConfig) -> Self {
        let base = if raw.extend_defaults {
            Self::default()
        } else {
            Self::empty()
        };
        let config = raw
            .sensitive_keys
            .iter()
            .fold(base, |config, key| config.with_sensitive_key(key));
        raw.strong_keys
            .iter()
            .fold(config, |config, key| config.with_strong_key(key))
            .with_max_depth(raw.max_depth)
    }
}
