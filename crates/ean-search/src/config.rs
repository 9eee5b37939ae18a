use std::{fmt, time::Duration};

use url::Url;

use crate::{Error, ErrorKind};

/// Public endpoint of the ean-search.org API.
pub const DEFAULT_BASE_URL: &str = "https://api.ean-search.org/api";

/// Timeout for operations returning a single record.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for paged search operations, which the service can be slow to answer.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(180);

/// The API token sent with every request.
///
/// A token can only be created from a non-empty string, so a [`Config`] never holds an empty
/// credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Creates a token from the value issued by ean-search.org.
    ///
    /// # Errors
    ///
    /// An [`Err`] of kind [`ErrorKind::Configuration`] is returned when `value` is empty.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, Error> {
        let value = value.into();
        if value.is_empty() {
            Err(Error::new(ErrorKind::Configuration, "empty token"))
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the token as it is sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the credential out of logs and panic messages.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(****)")
    }
}

/// Immutable settings shared by every request of an [`EanSearch`](crate::EanSearch) client.
#[derive(Clone, Debug)]
pub struct Config {
    token: Token,
    base_url: Url,
    lookup_timeout: Duration,
    search_timeout: Duration,
}

impl Config {
    /// Creates a configuration for the public endpoint with the default timeouts.
    #[must_use]
    pub fn new(token: Token) -> Self {
        Self {
            token,
            base_url: default_base_url(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            search_timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }

    /// Sends requests to `base_url` instead of the public endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Overrides the timeout used for single record lookups.
    #[must_use]
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Overrides the timeout used for paged searches.
    #[must_use]
    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// The token sent with every request.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Timeout for single record lookups.
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    /// Timeout for paged searches.
    #[must_use]
    pub const fn search_timeout(&self) -> Duration {
        self.search_timeout
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}
