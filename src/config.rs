use std::{env, fmt};

pub const PUBLIC_KEY_ENV: &str = "ENGAGE_SO_PUBLIC_KEY";
pub const PRIVATE_KEY_ENV: &str = "ENGAGE_SO_PRIVATE_KEY";

/// The public/private key pair used to authenticate against the Engage API.
///
/// Building credentials never fails: empty keys are only rejected when the
/// [`Client`](crate::Client) is constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    /// Uses the given keys as they are.
    pub fn new<P: Into<String>, K: Into<String>>(public_key: P, private_key: K) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Reads `ENGAGE_SO_PUBLIC_KEY` and `ENGAGE_SO_PRIVATE_KEY`.
    /// A missing variable becomes an empty string.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        Self {
            public_key: lookup(PUBLIC_KEY_ENV).unwrap_or_default(),
            private_key: lookup(PRIVATE_KEY_ENV).unwrap_or_default(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Everything needed to build a [`Client`](crate::Client).
///
/// ## Example
///
/// ```no_run
/// use engage_so::{Client, Config, Credentials};
///
/// let config = Config::new().with_credentials(Credentials::from_env());
/// let client = Client::new(config).expect("keys are set");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) credentials: Option<Credentials>,
    pub(crate) http: Option<reqwest::Client>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Uses the given transport instead of the default one (10 seconds timeout).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}
