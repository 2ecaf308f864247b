//! Fetch-and-shape pipeline for critical Manhattan violations.

use tracing::{instrument, warn};

use super::client::InspectionClient;
use super::shaping::shape;
use super::types::InspectionRecord;
use crate::error::Result;
use crate::metrics;

/// Fetch the dataset and shape it into critical Manhattan violations, newest first.
///
/// Transport failures degrade to an empty sequence. A body that is not JSON or does
/// not have the expected shape is returned as an error.
#[instrument(skip(client))]
pub async fn fetch_critical_violations(client: &InspectionClient) -> Result<Vec<InspectionRecord>> {
    let payload = match client.fetch_payload().await {
        Ok(payload) => payload,
        Err(e) if e.is_network() => {
            warn!(error = %e, "API request failed, serving empty result");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let records = shape(&payload)?;
    metrics::inc_records_shaped(records.len());

    Ok(records)
}
