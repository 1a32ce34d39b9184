use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(response: reqwest::Response) -> Result<Self::ParsedResponseType, ResponseError>
    where
        Self::ParsedResponseType: for<'de> serde::Deserialize<'de>,
    {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(response: reqwest::Response) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(response: reqwest::Response) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            Ok(response)
        } else if response.status().is_server_error() {
            Err(ResponseError::InternalServer)
        } else if response.status().is_client_error() {
            Err(ResponseError::BadRequest(response.text().await.unwrap_or_default()))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// Failure while talking to a remote service.
#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer,
    /// A 4xx answer, carrying the raw response body.
    BadRequest(String),
    NoConnection,
    Timeout,
    /// The body did not match the expected schema.
    MalformedBody,
    Unknown,
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_decode() {
            ResponseError::MalformedBody
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_request() {
            ResponseError::BadRequest(value.to_string())
        } else if value.is_status() || value.is_redirect() {
            ResponseError::InternalServer
        } else {
            ResponseError::Unknown
        }
    }
}
