use crate::{
    config::{Config, Credentials},
    error::{Error, Result},
    lists::Lists,
    users::Users,
};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    Method, Request, Url,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::{
    borrow::Cow,
    ops::RangeInclusive,
    time::{Duration, Instant},
};

pub const DEFAULT_BASE_URL: &str = "https://api.engage.so/v1";
pub const DEFAULT_USER_AGENT: &str = concat!("engage-so-rust/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const SUCCESS_CODES: RangeInclusive<u16> = 200..=206;

/// An authenticated client for the Engage API.
///
/// All the state is fixed at construction time, so the client can be cloned
/// and shared between tasks freely. Operations are grouped by resource and
/// reached through [`Client::users`] and [`Client::lists`].
///
/// ## Example
///
/// ```no_run
/// use engage_so::{Client, Config, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::new().with_credentials(Credentials::new("public", "private"));
///     let client = Client::new(config)?;
///
///     let user = client.users().get("123456789").await?;
///     println!("{} has {} devices", user.uid, user.devices.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    user_agent: String,
    credentials: Credentials,
    http: reqwest::Client,
}

impl Client {
    /// Builds a client from a [`Config`].
    ///
    /// Fails with [`Error::Validation`] when the credentials are missing or
    /// one of the keys is empty. When the config carries no HTTP client a
    /// default one with a 10 seconds timeout is used.
    pub fn new(config: Config) -> Result<Self> {
        let credentials = validate_credentials(config.credentials)?;
        let http = match config.http {
            Some(http) => http,
            None => reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?,
        };

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            credentials,
            http,
        })
    }

    /// Points the client at a different API root, e.g. a mock server.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The API root every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The `User-Agent` header sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// User operations bound to this client.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// List and subscription operations bound to this client.
    pub fn lists(&self) -> Lists<'_> {
        Lists::new(self)
    }

    /// Builds an authenticated request for `endpoint`, relative to the base URL.
    ///
    /// The endpoint may or may not start with `/`: exactly one separator ends
    /// up between the base URL and the endpoint.
    pub fn new_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request> {
        let raw_url = self.endpoint_url(endpoint);
        let url = Url::parse(&raw_url)
            .map_err(|e| Error::RequestConstruction(format!("invalid url {raw_url}: {e}")))?;

        let mut builder = self
            .http
            .request(method, url)
            .basic_auth(
                self.credentials.public_key(),
                Some(self.credentials.private_key()),
            )
            .header(USER_AGENT, &self.user_agent)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            builder = builder.body(body);
        }

        builder
            .build()
            .map_err(|e| Error::RequestConstruction(e.to_string()))
    }

    pub(crate) fn json_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Request> {
        let payload = serde_json::to_vec(body).map_err(Error::Serialization)?;
        self.new_request(method, endpoint, Some(payload))
    }

    /// Sends the request and decodes a successful response body into `T`.
    ///
    /// Any status outside `200..=206` becomes an [`Error::Api`] holding the
    /// raw body text.
    pub async fn make_request<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let body = self.execute(request).await?;
        serde_json::from_slice(&body).map_err(Error::Deserialization)
    }

    /// Same as [`Client::make_request`] for endpoints whose payload is of no
    /// interest. An empty body is accepted, anything else must be a JSON object.
    pub async fn make_request_discarding(&self, request: Request) -> Result<()> {
        let body = self.execute(request).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }
        serde_json::from_slice::<Map<String, Value>>(&body).map_err(Error::Deserialization)?;
        Ok(())
    }

    async fn execute(&self, request: Request) -> Result<Vec<u8>> {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let started = Instant::now();

        let resp = self.http.execute(request).await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        tracing::debug!(
            %method,
            path = %path,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "engage request completed"
        );

        if !SUCCESS_CODES.contains(&status) {
            return Err(Error::Api {
                code: status,
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

/// Percent-encodes a caller supplied identifier so it stays a single path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

fn validate_credentials(credentials: Option<Credentials>) -> Result<Credentials> {
    let credentials = credentials.ok_or_else(|| Error::validation("credentials are required"))?;
    if credentials.public_key().is_empty() {
        return Err(Error::validation("public key is required"));
    }
    if credentials.private_key().is_empty() {
        return Err(Error::validation("private key is required"));
    }
    Ok(credentials)
}
