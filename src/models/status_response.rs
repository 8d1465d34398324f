use serde_json::Value;

use crate::error::ServiceError;

/// Body returned while polling the long-running analyze operation.
///
/// `analyzeResult` stays raw JSON here; it is deserialized into
/// [`crate::models::AnalyzeResult`] only once the status is `succeeded`.
#[derive(serde::Deserialize, Debug)]
pub struct StatusResponse {
    pub status: String,
    #[serde(rename = "analyzeResult")]
    pub result: Option<Value>,
    pub error: Option<ServiceError>,
}
