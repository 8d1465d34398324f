use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::clients::document_intelligence::{AnalyzeOptions, DocumentIntelligenceClient};
use crate::error::AnalysisError;
use crate::models::AnalyzeResult;

/// A document to analyze, either fetched by the service from a URL or
/// uploaded from a local file.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalyzeInput {
    Url(String),
    File(PathBuf),
}

impl AnalyzeInput {
    /// Treat anything with an http(s) scheme as a URL, everything else as a
    /// local path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            AnalyzeInput::Url(arg.to_owned())
        } else {
            AnalyzeInput::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for AnalyzeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeInput::Url(url) => write!(f, "{url}"),
            AnalyzeInput::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DocumentIntelligenceClient {
    /// Analyze several documents concurrently, with at most `max_in_flight`
    /// operations running at once. One result per input, in input order.
    pub async fn analyze_batch(
        &self,
        model_id: &str,
        inputs: Vec<AnalyzeInput>,
        options: &AnalyzeOptions,
        max_in_flight: usize,
    ) -> Vec<Result<AnalyzeResult, AnalysisError>> {
        let semaphore = Arc::new(Semaphore::new(max_in_flight.max(1)));
        let tasks = inputs.into_iter().map(|input| {
            let client = self.clone();
            let model_id = model_id.to_owned();
            let options = options.clone();
            let semaphore = semaphore.clone();

            tokio::spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();
                match input {
                    AnalyzeInput::Url(url) => {
                        client.analyze_from_url(&model_id, &url, &options).await
                    }
                    AnalyzeInput::File(path) => {
                        client.analyze_from_file(&model_id, &path, &options).await
                    }
                }
            })
        });

        let results = join_all(tasks).await;

        results
            .into_iter()
            .map(|join_result| match join_result {
                Ok(api_result) => api_result,
                Err(join_err) => Err(AnalysisError::Task(join_err.to_string())),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_and_paths_are_told_apart() {
        assert_eq!(
            AnalyzeInput::from_arg("https://example.com/doc.pdf"),
            AnalyzeInput::Url("https://example.com/doc.pdf".into())
        );
        assert_eq!(
            AnalyzeInput::from_arg("http://example.com/doc.pdf"),
            AnalyzeInput::Url("http://example.com/doc.pdf".into())
        );
        assert_eq!(
            AnalyzeInput::from_arg("./scans/invoice.pdf"),
            AnalyzeInput::File(PathBuf::from("./scans/invoice.pdf"))
        );
    }
}
