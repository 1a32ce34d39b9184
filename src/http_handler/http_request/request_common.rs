use super::super::http_response::response_common::HTTPResponseType;

/// Methods used by the endpoints this crate talks to.
pub(crate) enum HTTPRequestMethod {
    Post,
}

pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
}

pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;
}
