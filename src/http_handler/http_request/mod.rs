use super::http_response::optimize_proposal;

pub(crate) mod optimize_post;
pub(crate) mod request_common;
