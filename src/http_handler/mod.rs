//! Thin REST layer used to reach the external optimization service.

pub(crate) mod http_client;
pub(crate) mod http_request;
pub(crate) mod http_response;
