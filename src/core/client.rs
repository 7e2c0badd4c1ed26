//! Upstream translation client

use std::time::Duration;
use tracing::debug;

use crate::core::config::ProxyConfig;
use crate::core::errors::{ProxyError, Result};
use crate::core::models::{
    ProviderCredentials, ProviderErrorBody, ProviderTextItem, ProviderTranslationResult,
    TranslatedText, TranslationRequest,
};

/// Translator API version sent on every call
pub const API_VERSION: &str = "3.0";

/// Client for the provider's `/translate` operation
///
/// Makes exactly one outbound call per translation; there is no retry.
#[derive(Debug, Clone)]
pub struct TranslatorClient {
    client: reqwest::Client,
    api_endpoint: String,
}

impl TranslatorClient {
    /// Create a new client
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10);

        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let client = builder.build().map_err(|e| ProxyError::InternalError(e.to_string()))?;

        Ok(Self {
            client,
            api_endpoint: config.api_endpoint.clone(),
        })
    }

    /// Full URL of the translate operation
    pub fn translate_url(&self) -> String {
        format!("{}/translate", self.api_endpoint)
    }

    /// Translate every text of `request`, preserving order
    pub async fn translate(
        &self,
        credentials: &ProviderCredentials,
        request: &TranslationRequest,
    ) -> Result<Vec<TranslatedText>> {
        let mut query = vec![
            ("api-version", API_VERSION),
            ("to", request.target_lang.as_str()),
        ];

        // Without `from` the provider auto-detects the source language
        if let Some(source_lang) = &request.source_lang {
            query.push(("from", source_lang.as_str()));
        }

        let body: Vec<ProviderTextItem<'_>> = request
            .texts
            .iter()
            .map(|text| ProviderTextItem { text })
            .collect();

        debug!(
            "Sending {} texts to {} (to={}, from={:?})",
            body.len(),
            self.api_endpoint,
            request.target_lang,
            request.source_lang
        );

        let response = self
            .client
            .post(self.translate_url())
            .query(&query)
            .header("Ocp-Apim-Subscription-Key", credentials.api_key.as_str())
            .header("Ocp-Apim-Subscription-Region", credentials.region.as_str())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProxyError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| ProxyError::NetworkError {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(ProxyError::provider(
                status.as_u16(),
                ProviderErrorBody::message_from_slice(&bytes),
            ));
        }

        let results: Vec<ProviderTranslationResult> =
            serde_json::from_slice(&bytes).map_err(|e| ProxyError::InvalidResponseError {
                message: e.to_string(),
            })?;

        reshape(results, request.texts.len())
    }
}

/// Map provider results to the outward shape, one entry per input text
fn reshape(results: Vec<ProviderTranslationResult>, expected: usize) -> Result<Vec<TranslatedText>> {
    if results.len() != expected {
        return Err(ProxyError::ResultCountMismatch {
            expected,
            actual: results.len(),
        });
    }

    results
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.translations
                .into_iter()
                .next()
                .map(|t| TranslatedText { text: t.text })
                .ok_or_else(|| ProxyError::InvalidResponseError {
                    message: format!("No translation for text {}", index),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(json: &str) -> Vec<ProviderTranslationResult> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_reshape_takes_first_translation() {
        let items = results(
            r#"[{"translations":[{"text":"hola","to":"es"},{"text":"hola!","to":"es"}]},
                {"translations":[{"text":"mundo","to":"es"}]}]"#,
        );
        let texts = reshape(items, 2).unwrap();
        assert_eq!(
            texts,
            vec![
                TranslatedText { text: "hola".to_string() },
                TranslatedText { text: "mundo".to_string() },
            ]
        );
    }

    #[test]
    fn test_reshape_count_mismatch() {
        let items = results(r#"[{"translations":[{"text":"hola"}]}]"#);
        assert!(matches!(
            reshape(items, 2),
            Err(ProxyError::ResultCountMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_reshape_empty_translations() {
        let items = results(r#"[{"translations":[]}]"#);
        assert!(matches!(
            reshape(items, 1),
            Err(ProxyError::InvalidResponseError { .. })
        ));
    }

    #[test]
    fn test_translate_url() {
        let config = ProxyConfig::default().with_endpoint("http://127.0.0.1:1234/");
        let client = TranslatorClient::new(&config).unwrap();
        assert_eq!(client.translate_url(), "http://127.0.0.1:1234/translate");
    }
}
