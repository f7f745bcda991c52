use crate::domain::validation::ValidationError;

/// Production endpoint of the Smart Messaging Suite HTTP gateway.
pub const DEFAULT_HOST: &str = "https://messagingsuite.smart.com.ph/cgphttp/servlet";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Field name used in validation errors (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Gateway account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The `Debug` output is redacted.
pub struct Password(String);

impl Password {
    /// Field name used in validation errors (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(\"***\")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Base URL every endpoint path is appended to.
///
/// Invariant: an absolute `http` or `https` URL without query, fragment or trailing `/`.
pub struct Host(String);

impl Host {
    /// Field name used in validation errors (`host`).
    pub const FIELD: &'static str = "host";

    /// Create a validated [`Host`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = url::Url::parse(trimmed).map_err(|err| ValidationError::InvalidHost {
            input: value.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidHost {
                input: value.clone(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ValidationError::InvalidHost {
                input: value.clone(),
                reason: "query and fragment are not allowed".to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the base URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Host {
    fn default() -> Self {
        Self(DEFAULT_HOST.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient of a message (`destination`).
///
/// Treated as opaque: the gateway accepts MSISDNs such as `639171234567`
/// but no number-plan validation is performed here.
///
/// Invariant: non-empty after trimming.
pub struct Destination(String);

impl Destination {
    /// Query parameter name used by the gateway (`destination`).
    pub const FIELD: &'static str = "destination";

    /// Create a validated (non-empty) destination.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Destination {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved;
/// no splitting, transliteration or length checks are applied.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by the gateway (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// API version pin carried by a request.
///
/// Reserved for versioned routing; the gateway currently exposes a single
/// unversioned surface, so the value does not affect the request URL.
pub struct ApiVersion(String);

impl ApiVersion {
    /// Field name used in validation errors (`api_version`).
    pub const FIELD: &'static str = "api_version";

    /// Create a validated [`ApiVersion`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
