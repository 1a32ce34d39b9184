use super::optimize_proposal::OptimizeProposalResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::assist::OptimizationSnapshot;

/// Request type for the /optimize endpoint of the external optimizer.
#[derive(Debug)]
pub(crate) struct OptimizePlanRequest<'s, 'r> {
    /// Flights, open item pools, constraints and the baseline plan.
    pub(crate) snapshot: &'s OptimizationSnapshot<'r>,
}

impl<'s, 'r> JSONBodyHTTPRequestType for OptimizePlanRequest<'s, 'r> {
    type Body = OptimizationSnapshot<'r>;
    fn body(&self) -> &Self::Body { self.snapshot }
}

impl HTTPRequestType for OptimizePlanRequest<'_, '_> {
    type Response = OptimizeProposalResponse;
    fn endpoint(&self) -> &'static str { "/optimize" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn header_params(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, reqwest::header::HeaderValue::from_static("application/json"));
        headers
    }
}
