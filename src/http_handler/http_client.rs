use super::http_request::request_common::{HTTPRequestMethod, JSONBodyHTTPRequestType};
use super::http_response::response_common::{HTTPResponseType, ResponseError};
use std::time::Duration;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and timeout.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8000/api"`).
    /// * `timeout` – Upper bound for a complete request, including reading the body.
    ///
    /// # Returns
    /// A configured `HTTPClient` instance, or the builder error.
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<HTTPClient, ResponseError> {
        Ok(HTTPClient {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    /// Sends a request carrying a JSON body and parses the typed response.
    pub(crate) async fn send_json_request<R>(
        &self,
        request: &R,
    ) -> Result<<R::Response as HTTPResponseType>::ParsedResponseType, ResponseError>
    where
        R: JSONBodyHTTPRequestType,
    {
        let url = format!("{}{}", self.base_url, request.endpoint());
        let builder = match request.request_method() {
            HTTPRequestMethod::Post => self.client.post(url),
        };
        let response = builder.headers(request.header_params()).json(request.body()).send().await?;
        R::Response::read_response(response).await
    }
}
