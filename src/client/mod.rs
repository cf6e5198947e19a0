//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod classify;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiBody, AuthKey, DeviceName, ImageUrl, SendMessage, ValidationError};
use crate::transport::{
    decode_envelope, encode_create_device_body, encode_list_devices_query, encode_send_body,
};

pub use classify::ApiErrorKind;
use classify::classify;

const DEFAULT_BASE_URL: &str = "https://wasend.app/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

const DEVICES_PATH: &str = "devices";
const CREATE_DEVICE_PATH: &str = "devices/create";
const SENDER_PATH: &str = "sender";

/// Message used when an error body carries neither `message` nor `error`.
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn head<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone, Copy)]
/// Transport-level retry policy.
///
/// Only transport failures (DNS, TLS, timeouts) are retried; HTTP error
/// statuses are gateway answers and pass through on the first attempt.
struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl ReqwestTransport {
    async fn execute<F>(&self, build: F) -> Result<HttpResponse, BoxError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt = 1;
        loop {
            match Self::run(build()).await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < self.retry.attempts => {
                    tracing::warn!(attempt, error = %err, "transport failure, retrying");
                    tokio::time::sleep(self.retry.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn run(builder: reqwest::RequestBuilder) -> Result<HttpResponse, BoxError> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.execute(|| self.client.get(url).query(&query)).await })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.execute(|| self.client.post(url).json(&body)).await })
    }

    fn head<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.execute(|| self.client.head(url)).await })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`WasendClient`].
///
/// This error preserves:
/// - transport failures (DNS, TLS, timeouts, after retries are exhausted),
/// - gateway failures, classified into an [`ApiErrorKind`] with the HTTP status,
/// - validation/parse failures.
pub enum WasendError {
    /// HTTP client / transport failure.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The gateway reported a failure, either as a non-2xx status or as a 2xx
    /// body without a truthy `success` flag.
    #[error("API error ({kind:?}, http {status}): {message}")]
    Api {
        kind: ApiErrorKind,
        message: String,
        status: u16,
    },

    /// The opt-in pre-send probe could not reach the image URL.
    #[error("image url is not reachable: {url}")]
    ImageUnreachable { url: String, status: Option<u16> },

    /// A 2xx response body could not be decoded as a JSON object.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`WasendClient`].
///
/// Use this when you need to customize the base URL, timeout, retry policy, or
/// user-agent. Defaults: base URL `https://wasend.app/api`, timeout 30 s,
/// 3 attempts with 1000 ms between them, image probing off.
pub struct WasendClientBuilder {
    auth_key: AuthKey,
    base_url: String,
    timeout: Duration,
    retry_attempts: u32,
    retry_delay: Duration,
    user_agent: Option<String>,
    probe_image_urls: bool,
}

impl WasendClientBuilder {
    /// Create a builder with the default configuration.
    pub fn new(auth_key: AuthKey) -> Self {
        Self {
            auth_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            user_agent: None,
            probe_image_urls: false,
        }
    }

    /// Override the gateway API root. A trailing slash is tolerated.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to each attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts per call, including the first one. Clamped to at least 1.
    pub fn retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts.max(1);
        self
    }

    /// Delay between attempts.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Probe image URLs with a HEAD request before sending.
    ///
    /// Off by default: the probe costs an extra round-trip per send and a
    /// transient probe failure blocks a message the gateway might have
    /// accepted. Turn it on to fail fast before spending send quota.
    pub fn probe_image_urls(mut self, probe: bool) -> Self {
        self.probe_image_urls = probe;
        self
    }

    /// Build a [`WasendClient`].
    pub fn build(self) -> Result<WasendClient, WasendError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| WasendError::Transport(Box::new(err)))?;

        Ok(WasendClient {
            auth_key: self.auth_key,
            base_url: self.base_url,
            probe_image_urls: self.probe_image_urls,
            http: Arc::new(ReqwestTransport {
                client,
                retry: RetryPolicy {
                    attempts: self.retry_attempts,
                    delay: self.retry_delay,
                },
            }),
        })
    }
}

#[derive(Clone)]
/// High-level WaSend client.
///
/// This type orchestrates request validation, JSON encoding, and response
/// classification. The auth key is validated once at construction and attached
/// to every outbound call; nothing else persists between calls.
pub struct WasendClient {
    auth_key: AuthKey,
    base_url: String,
    probe_image_urls: bool,
    http: Arc<dyn HttpTransport>,
}

impl WasendClient {
    /// Create a client with the default configuration: the vendor base URL,
    /// a 30 second timeout, and 3 attempts with 1000 ms between them.
    ///
    /// For more customization, use [`WasendClient::builder`].
    ///
    /// # Panics
    ///
    /// Like [`reqwest::Client::new`], panics if the default HTTP client cannot
    /// be built (for example when the TLS backend fails to initialize).
    pub fn new(auth_key: AuthKey) -> Self {
        WasendClientBuilder::new(auth_key)
            .build()
            .expect("default client configuration must build")
    }

    /// Start building a client with custom settings.
    pub fn builder(auth_key: AuthKey) -> WasendClientBuilder {
        WasendClientBuilder::new(auth_key)
    }

    /// List the devices linked to the account.
    ///
    /// Errors:
    /// - [`WasendError::Transport`] after retries are exhausted,
    /// - [`WasendError::Api`] when the gateway reports a failure.
    pub async fn list_devices(&self) -> Result<ApiBody, WasendError> {
        let url = self.endpoint(DEVICES_PATH);
        tracing::debug!(%url, "listing devices");
        let response = self
            .http
            .get(&url, encode_list_devices_query(&self.auth_key))
            .await
            .map_err(WasendError::Transport)?;
        handle_response(response)
    }

    /// Link a new device under the given display name.
    ///
    /// Errors:
    /// - [`WasendError::Transport`] after retries are exhausted,
    /// - [`WasendError::Api`] when the gateway reports a failure.
    pub async fn create_device(&self, name: DeviceName) -> Result<ApiBody, WasendError> {
        let url = self.endpoint(CREATE_DEVICE_PATH);
        tracing::debug!(%url, name = name.as_str(), "creating device");
        let response = self
            .http
            .post_json(&url, encode_create_device_body(&name, &self.auth_key))
            .await
            .map_err(WasendError::Transport)?;
        handle_response(response)
    }

    /// Send a message to the request's receivers through its devices.
    ///
    /// All-or-nothing per call: any failure raises, there is no partial
    /// success. When image probing is enabled on the builder and the request
    /// carries an image, a HEAD probe runs first and an unreachable URL fails
    /// with [`WasendError::ImageUnreachable`] before the real call is made.
    ///
    /// Errors:
    /// - [`WasendError::Transport`] after retries are exhausted,
    /// - [`WasendError::Api`] when the gateway reports a failure.
    pub async fn send(&self, request: SendMessage) -> Result<ApiBody, WasendError> {
        if self.probe_image_urls {
            if let Some(image) = request.options().image.as_ref() {
                self.probe_image(image).await?;
            }
        }

        let url = self.endpoint(SENDER_PATH);
        tracing::debug!(
            %url,
            receivers = request.receivers().len(),
            devices = request.device_ids().len(),
            "sending message"
        );
        let response = self
            .http
            .post_json(&url, encode_send_body(&request, &self.auth_key))
            .await
            .map_err(WasendError::Transport)?;
        handle_response(response)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn probe_image(&self, image: &ImageUrl) -> Result<(), WasendError> {
        match self.http.head(image.as_str()).await {
            Ok(response) if (200..=299).contains(&response.status) => Ok(()),
            Ok(response) => Err(WasendError::ImageUnreachable {
                url: image.as_str().to_owned(),
                status: Some(response.status),
            }),
            Err(err) => {
                tracing::warn!(url = image.as_str(), error = %err, "image probe failed");
                Err(WasendError::ImageUnreachable {
                    url: image.as_str().to_owned(),
                    status: None,
                })
            }
        }
    }
}

/// A call succeeded only if the HTTP status is 2xx AND the body carries a
/// truthy `success` flag; every other outcome is classified.
fn handle_response(response: HttpResponse) -> Result<ApiBody, WasendError> {
    let http_ok = (200..=299).contains(&response.status);
    match decode_envelope(&response.body) {
        Ok(envelope) if http_ok && envelope.success => Ok(ApiBody::new(envelope.body)),
        Ok(envelope) => Err(classified(envelope.error_text, response.status)),
        Err(err) if http_ok => Err(WasendError::Parse(Box::new(err))),
        // Error statuses often come with HTML or plain-text bodies; classify
        // those with the fallback message instead of failing the decode.
        Err(_) => Err(classified(None, response.status)),
    }
}

fn classified(error_text: Option<String>, status: u16) -> WasendError {
    let raw = error_text.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned());
    let (kind, message) = classify(&raw);
    tracing::debug!(?kind, status, "gateway reported an error");
    WasendError::Api {
        kind,
        message,
        status,
    }
}
