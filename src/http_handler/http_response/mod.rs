pub(crate) mod optimize_proposal;
pub(crate) mod response_common;
