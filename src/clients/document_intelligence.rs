use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Response};
use tokio::{fs::File, io::AsyncReadExt};
use tracing::info;

use crate::error::{AnalysisError, ErrorResponse};
use crate::models::{AnalyzeResult, Credentials, StatusResponse};
use crate::utils::content_type_for;

pub const API_VERSION: &str = "2024-11-30";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION_HEADER: &str = "operation-location";
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Client for the Document Intelligence analyze API.
///
/// Submits a document, follows the returned `operation-location` until the
/// long-running operation completes, and deserializes the final
/// `analyzeResult` into [`AnalyzeResult`].
#[derive(Clone)]
pub struct DocumentIntelligenceClient {
    http: Client,
    credentials: Credentials,
}

/// Content format requested from the service for the result's `content`
/// field.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum OutputContentFormat {
    #[default]
    Text,
    Markdown,
}

impl FromStr for OutputContentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputContentFormat::Text),
            "markdown" => Ok(OutputContentFormat::Markdown),
            _ => Err(format!(
                "Invalid output format: '{}'. Expected 'text' or 'markdown'.",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputContentFormat::Markdown => write!(f, "markdown"),
            OutputContentFormat::Text => write!(f, "text"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnalyzeOptions {
    /// Extra analysis features to enable, e.g. `ocrHighResolution`.
    pub features: Vec<String>,
    pub output_format: OutputContentFormat,
}

impl DocumentIntelligenceClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            credentials,
        }
    }

    /// Analyze a document that the service fetches itself from a public URL.
    pub async fn analyze_from_url(
        &self,
        model_id: &str,
        document_url: &str,
        options: &AnalyzeOptions,
    ) -> Result<AnalyzeResult, AnalysisError> {
        let analyze_url = self.analyze_endpoint(model_id, options);
        let auth = self.credentials.auth_header()?;

        let response = self
            .http
            .post(&analyze_url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(SUBSCRIPTION_KEY_HEADER, auth.clone())
            .json(&serde_json::json!({
                "urlSource": document_url
            }))
            .send()
            .await?;
        let response = into_service_result(response).await?;

        info!(document_url, "Document analysis request submitted");

        self.poll_to_completion(response, auth).await
    }

    /// Analyze a local document by uploading its bytes. The content type is
    /// inferred from the file extension.
    pub async fn analyze_from_file(
        &self,
        model_id: &str,
        path: &Path,
        options: &AnalyzeOptions,
    ) -> Result<AnalyzeResult, AnalysisError> {
        let mut file = File::open(path).await.map_err(|e| AnalysisError::ReadFile {
            path: path.to_owned(),
            source: e,
        })?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .await
            .map_err(|e| AnalysisError::ReadFile {
                path: path.to_owned(),
                source: e,
            })?;

        let content_type = content_type_for(path);
        let analyze_url = self.analyze_endpoint(model_id, options);
        let auth = self.credentials.auth_header()?;

        let response = self
            .http
            .post(&analyze_url)
            .header(SUBSCRIPTION_KEY_HEADER, auth.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(content_type))
            .body(contents)
            .send()
            .await?;
        let response = into_service_result(response).await?;

        info!(
            file = %path.display(),
            status_code = response.status().as_u16(),
            "Document analysis request submitted"
        );

        self.poll_to_completion(response, auth).await
    }

    async fn poll_to_completion(
        &self,
        response: Response,
        auth: HeaderValue,
    ) -> Result<AnalyzeResult, AnalysisError> {
        let operation_location = response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AnalysisError::MissingOperationLocation)?
            .to_owned();

        info!(
            operation_location = operation_location.as_str(),
            "Document analysis operation initiated"
        );

        loop {
            tokio::time::sleep(POLL_INTERVAL).await;

            let response = self
                .http
                .get(&operation_location)
                .header(SUBSCRIPTION_KEY_HEADER, auth.clone())
                .send()
                .await?;
            let status_response = into_service_result(response)
                .await?
                .json::<StatusResponse>()
                .await?;

            info!(
                status = status_response.status.as_str(),
                operation_location = operation_location.as_str(),
                "Polling document analysis status"
            );

            match status_response.status.as_str() {
                "succeeded" => {
                    let raw = status_response.result.ok_or(AnalysisError::EmptyResult)?;
                    return Ok(serde_json::from_value(raw)?);
                }
                "failed" => {
                    return Err(match status_response.error {
                        Some(err) => AnalysisError::from_service(err),
                        None => AnalysisError::AnalysisFailed,
                    });
                }
                "running" | "notStarted" => continue,
                other => return Err(AnalysisError::UnknownStatus(other.to_owned())),
            }
        }
    }

    fn analyze_endpoint(&self, model_id: &str, options: &AnalyzeOptions) -> String {
        let endpoint = self.credentials.endpoint.trim_end_matches('/');
        let mut url = format!(
            "{}/documentintelligence/documentModels/{}:analyze?api-version={}&outputContentFormat={}",
            endpoint, model_id, API_VERSION, options.output_format
        );
        if !options.features.is_empty() {
            url.push_str(&format!("&features={}", options.features.join(",")));
        }
        url
    }
}

/// Turn a non-2xx response into a distinguishable error, decoding the
/// service's error body when it sends one.
async fn into_service_result(response: Response) -> Result<Response, AnalysisError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(AnalysisError::from_service(body.error)),
        Err(_) => Err(AnalysisError::Service {
            code: status.as_str().to_owned(),
            message: format!("service returned HTTP {status}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DocumentIntelligenceClient {
        DocumentIntelligenceClient::new(Credentials::new(
            "https://example.cognitiveservices.azure.com/",
            "key",
        ))
    }

    #[test]
    fn analyze_endpoint_strips_trailing_slash() {
        let url = client().analyze_endpoint("prebuilt-layout", &AnalyzeOptions::default());
        assert_eq!(
            url,
            "https://example.cognitiveservices.azure.com/documentintelligence/documentModels/prebuilt-layout:analyze?api-version=2024-11-30&outputContentFormat=text"
        );
    }

    #[test]
    fn analyze_endpoint_appends_features() {
        let options = AnalyzeOptions {
            features: vec!["ocrHighResolution".into(), "formulas".into()],
            output_format: OutputContentFormat::Markdown,
        };
        let url = client().analyze_endpoint("prebuilt-layout", &options);
        assert!(url.contains("outputContentFormat=markdown"));
        assert!(url.ends_with("&features=ocrHighResolution,formulas"));
    }

    #[test]
    fn output_format_round_trips_through_str() {
        assert_eq!(
            " Markdown ".parse::<OutputContentFormat>().unwrap(),
            OutputContentFormat::Markdown
        );
        assert_eq!(
            "text".parse::<OutputContentFormat>().unwrap(),
            OutputContentFormat::Text
        );
        assert!("yaml".parse::<OutputContentFormat>().is_err());
        assert_eq!(OutputContentFormat::default().to_string(), "text");
    }
}
