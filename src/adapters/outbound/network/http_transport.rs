use crate::config::ScoutConfig;
use crate::shared::error::{NetworkFailure, ScoutError};
use crate::shared::Result;
use reqwest::header::CONTENT_TYPE;

/// Status and body of a completed GET request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Turns any non-2xx status into `ScoutError::HttpStatus`
    pub fn ensure_success(&self) -> Result<()> {
        if !(200..300).contains(&self.status) {
            return Err(ScoutError::HttpStatus {
                url: self.url.clone(),
                status: self.status,
            }
            .into());
        }
        Ok(())
    }
}

/// HttpTransport issues the GET requests shared by the network adapters.
///
/// Every request carries the configured timeout, the crate's user agent
/// and, when configured, goes through a proxy. Transport failures are
/// reported as `ScoutError::Network` with the failure shape already
/// classified so the retry policy can act on it.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ScoutConfig) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depscout/{}", version);
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(user_agent);

        if let Some(proxy) = config.proxy.as_deref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Sends a GET with an explicit `Content-Type` header and reads the body as text.
    ///
    /// Non-2xx statuses are returned, not raised; callers decide what they mean.
    pub async fn get(&self, url: &str, content_type: &str) -> Result<HttpResponse> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, content_type)
            .send()
            .await
            .map_err(|e| Self::network_error(url, &e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Self::network_error(url, &e))?;

        tracing::debug!(%url, status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            url: url.to_string(),
            status,
            body,
        })
    }

    fn network_error(url: &str, err: &reqwest::Error) -> anyhow::Error {
        ScoutError::Network {
            url: url.to_string(),
            failure: classify_reqwest_error(err),
            details: error_chain_message(err),
        }
        .into()
    }
}

/// Maps a reqwest error onto a `NetworkFailure`.
///
/// The I/O error kind in the source chain wins; otherwise reqwest's own
/// timeout/connect flags decide.
pub fn classify_reqwest_error(err: &reqwest::Error) -> NetworkFailure {
    match NetworkFailure::from_error_chain(err) {
        Some(failure) if failure != NetworkFailure::Other => failure,
        _ if err.is_timeout() => NetworkFailure::Timeout,
        _ if err.is_connect() => NetworkFailure::Unreachable,
        _ => NetworkFailure::Other,
    }
}

fn error_chain_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(e) = source {
        parts.push(e.to_string());
        source = e.source();
    }
    parts.join(": ")
}
