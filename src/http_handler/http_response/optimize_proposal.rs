use super::response_common::{HTTPResponseType, JSONBodyHTTPResponseType, ResponseError};
use serde::{Deserialize, Serialize};

/// Assignment of one flight as proposed by the external optimizer.
///
/// Only ids are read, every number of the proposal is re-derived locally.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedFlight {
    pub flight_id: String,
    #[serde(default)]
    pub passenger_ids: Vec<String>,
    #[serde(default)]
    pub freight_ids: Vec<String>,
    #[serde(default)]
    pub mail_ids: Vec<String>,
}

/// A complete plan proposal shaped like an `OptimizationResult`.
/// Fields other than the assignment ids are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedPlan {
    #[serde(default)]
    pub assignments: Vec<ProposedFlight>,
}

/// Response type for the /optimize endpoint.
pub(crate) struct OptimizeProposalResponse {}

impl JSONBodyHTTPResponseType for OptimizeProposalResponse {}

impl HTTPResponseType for OptimizeProposalResponse {
    type ParsedResponseType = ProposedPlan;

    async fn read_response(response: reqwest::Response) -> Result<Self::ParsedResponseType, ResponseError> {
        let response = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(response).await
    }
}
