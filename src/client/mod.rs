//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AppId, AuthorizationToken, ConfigurationError, Credentials, ProjectId, RecipientAddress,
    SendOutcome, SendRcs, SendResult,
};

const DEFAULT_ENDPOINT: &str = "https://eu.conversation.api.sinch.com/v1";

const CONTENT_TYPE: &str = "content-type";
const AUTHORIZATION: &str = "authorization";
const APPLICATION_JSON: &str = "application/json";

type Headers = Vec<(&'static str, String)>;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Headers,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Headers,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.post(url);
            for (name, value) in headers {
                builder = builder.header(name, value);
            }
            let response = builder.body(body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Failure of a single `messages:send` call.
pub enum GatewayRequestError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the gateway.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// A successful response whose body is not JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SinchClient`].
///
/// Any error from a send aborts the whole batch; results already received are dropped.
pub enum SinchError {
    /// Credentials or endpoint are missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The gateway call for `recipient` failed.
    #[error("gateway request for {recipient} failed: {source}")]
    Gateway {
        recipient: RecipientAddress,
        #[source]
        source: GatewayRequestError,
    },

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The underlying HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
/// Builder for [`SinchClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SinchClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SinchClientBuilder {
    /// Create a builder with the default EU endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Conversation API base URL (e.g. another region).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to each gateway request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SinchClient`].
    pub fn build(self) -> Result<SinchClient, SinchError> {
        let send_url = resolve_send_url(&self.endpoint, self.credentials.project_id())
            .inspect_err(|err| {
                tracing::error!(error = %err, "failed to initialize Sinch client");
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(|err| {
            tracing::error!(error = %err, "failed to initialize Sinch client");
            SinchError::HttpClient(err)
        })?;

        Ok(SinchClient::from_parts(
            &self.credentials,
            send_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

#[derive(Clone)]
/// High-level Sinch Conversation API client for RCS text messages.
///
/// The authorization token is derived once at construction and reused for every request.
/// By default requests go to `https://eu.conversation.api.sinch.com/v1`.
pub struct SinchClient {
    app_id: AppId,
    send_url: String,
    token: AuthorizationToken,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for SinchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinchClient")
            .field("app_id", &self.app_id)
            .field("send_url", &self.send_url)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl SinchClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SinchClient::builder`].
    pub fn new(credentials: Credentials) -> Result<Self, SinchError> {
        Self::builder(credentials).build()
    }

    /// Create a client from the `SINCH_*` environment variables.
    ///
    /// Fails with [`SinchError::Configuration`] when any of them is missing or blank.
    pub fn from_env() -> Result<Self, SinchError> {
        let credentials = Credentials::from_env()?;
        Self::new(credentials)
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SinchClientBuilder {
        SinchClientBuilder::new(credentials)
    }

    fn from_parts(credentials: &Credentials, send_url: String, http: Arc<dyn HttpTransport>) -> Self {
        tracing::info!(project_id = credentials.project_id().as_str(), "initializing Sinch client");
        let token = AuthorizationToken::derive(credentials.key_id(), credentials.key_secret());
        tracing::debug!(%send_url, "Sinch client initialized");

        Self {
            app_id: credentials.app_id().clone(),
            send_url,
            token,
            http,
        }
    }

    /// Send an RCS text message to every recipient of `request`, one gateway call each.
    ///
    /// Recipients are processed sequentially in order. With exactly one recipient the
    /// result is [`SendOutcome::Single`]; otherwise [`SendOutcome::Batch`] in recipient order.
    /// Repeated calls are not deduplicated.
    ///
    /// Errors:
    /// - [`SinchError::Gateway`] for transport failures, non-2xx responses or non-JSON bodies.
    ///   The first failure stops the batch and no partial results are returned; messages
    ///   already accepted by the gateway are not recalled.
    /// - [`SinchError::Encode`] if the request body cannot be serialized.
    pub async fn send_rcs(&self, request: SendRcs) -> Result<SendOutcome, SinchError> {
        let recipients = request.recipients();
        tracing::info!(recipients = recipients.len(), "sending RCS");
        let identities: Vec<&str> = recipients.iter().map(RecipientAddress::as_str).collect();
        tracing::info!(
            recipients = ?identities,
            message_len = request.text().char_count(),
            "RCS details"
        );

        let headers = self.request_headers();
        let mut results = Vec::with_capacity(recipients.len());
        for recipient in recipients {
            match self.send_one(&request, recipient, &headers).await {
                Ok(result) => {
                    tracing::info!(%recipient, "RCS sent successfully");
                    results.push(result);
                }
                Err(err) => {
                    tracing::error!(
                        recipients = recipients.len(),
                        %recipient,
                        error = %err,
                        "failed to send RCS batch"
                    );
                    return Err(err);
                }
            }
        }

        Ok(SendOutcome::from_results(results))
    }

    fn request_headers(&self) -> Headers {
        vec![
            (CONTENT_TYPE, APPLICATION_JSON.to_owned()),
            (AUTHORIZATION, self.token.header_value()),
        ]
    }

    async fn send_one(
        &self,
        request: &SendRcs,
        recipient: &RecipientAddress,
        headers: &[(&'static str, String)],
    ) -> Result<SendResult, SinchError> {
        let body = crate::transport::encode_send_rcs_body(
            &self.app_id,
            recipient,
            request.text(),
            request.delivery_report(),
        )
        .map_err(SinchError::Encode)?;

        let gateway_error = |source| SinchError::Gateway {
            recipient: recipient.clone(),
            source,
        };

        let response = self
            .http
            .post_json(&self.send_url, headers.to_vec(), body)
            .await
            .map_err(|err| gateway_error(GatewayRequestError::Transport(err)))?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(gateway_error(GatewayRequestError::HttpStatus {
                status: response.status,
                body,
            }));
        }

        let result = crate::transport::decode_send_rcs_json_response(&response.body)
            .map_err(|err| gateway_error(GatewayRequestError::Parse(Box::new(err))))?;
        tracing::debug!(%recipient, body = %response.body, "Sinch API response");

        Ok(result)
    }
}

/// Join `{endpoint}/projects/{project_id}/messages:send`, percent-encoding the project id.
///
/// The endpoint must be an absolute http(s) base URL without query or fragment.
fn resolve_send_url(endpoint: &str, project_id: &ProjectId) -> Result<String, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidEndpoint {
        input: endpoint.to_owned(),
    };
    let mut url = url::Url::parse(endpoint).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https")
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return Err(invalid());
    }

    url.path_segments_mut()
        .map_err(|()| invalid())?
        .pop_if_empty()
        .extend(["projects", project_id.as_str(), "messages:send"]);
    Ok(url.into())
}
