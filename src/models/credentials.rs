use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::error::AnalysisError;

/// Authentication material for a Document Intelligence resource.
///
/// The API key is held as a [`SecretString`] so it is redacted from debug
/// output and never cloned into log lines.
#[derive(Clone)]
pub struct Credentials {
    pub(crate) api_key: SecretString,
    pub endpoint: String,
}

impl Credentials {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            endpoint: endpoint.into(),
        }
    }

    /// Subscription-key header value, marked sensitive so reqwest keeps it
    /// out of its own debug output.
    pub(crate) fn auth_header(&self) -> Result<HeaderValue, AnalysisError> {
        let mut value = HeaderValue::from_str(self.api_key.expose_secret())?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_header_is_sensitive() {
        let creds = Credentials::new("https://example.cognitiveservices.azure.com", "top-secret");
        let header = creds.auth_header().unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "top-secret");
    }
}
