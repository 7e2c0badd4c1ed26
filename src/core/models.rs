//! Core data models for translation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::{ProxyError, Result};

/// Inbound translation payload as sent by the caller
///
/// Every field is optional here so that missing fields are reported with the
/// proxy's own messages rather than deserializer errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatePayload {
    /// Texts to translate, in order; kept untyped so that a non-array is
    /// reported as a missing `texts` array
    #[serde(default)]
    pub texts: Option<Value>,
    /// Source language code; auto-detected upstream when absent
    #[serde(default)]
    pub source_lang: Option<String>,
    /// Target language code
    #[serde(default)]
    pub target_lang: Option<String>,
}

impl TranslatePayload {
    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| ProxyError::InvalidBody {
            message: e.to_string(),
        })
    }

    /// Validate into a [`TranslationRequest`]. The first failing check wins.
    pub fn into_request(self) -> Result<TranslationRequest> {
        let texts = match self.texts {
            Some(Value::Array(items)) if !items.is_empty() => items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text),
                    other => Err(ProxyError::InvalidBody {
                        message: format!("texts must contain only strings, found {}", other),
                    }),
                })
                .collect::<Result<Vec<String>>>()?,
            _ => return Err(ProxyError::MissingTexts),
        };

        let target_lang = match self.target_lang {
            Some(lang) if !lang.is_empty() => lang,
            _ => return Err(ProxyError::MissingTargetLang),
        };

        let mut request = TranslationRequest::new(texts, target_lang);
        if let Some(lang) = self.source_lang.filter(|l| !l.is_empty()) {
            request = request.with_source_lang(lang);
        }

        Ok(request)
    }
}

/// Validated translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Non-empty, ordered texts
    pub texts: Vec<String>,
    /// Source language, if the caller supplied one
    pub source_lang: Option<String>,
    /// Target language
    pub target_lang: String,
}

impl TranslationRequest {
    /// Create a request with auto-detected source language
    pub fn new(texts: Vec<String>, target_lang: impl Into<String>) -> Self {
        Self {
            texts,
            source_lang: None,
            target_lang: target_lang.into(),
        }
    }

    /// Set the source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }
}

/// Provider credentials, injected into every upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    /// Subscription key
    pub api_key: String,
    /// Subscription region
    pub region: String,
}

/// One translated text, aligned with the input at the same index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedText {
    /// Translated string
    pub text: String,
}

/// Successful response body
#[derive(Debug, Clone, Serialize)]
pub struct TranslateResponse {
    /// One entry per input text, same order
    pub translations: Vec<TranslatedText>,
}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human readable message
    pub error: String,
}

/// Item of the upstream request body
#[derive(Debug, Clone, Serialize)]
pub struct ProviderTextItem<'a> {
    /// Text to translate
    pub text: &'a str,
}

/// Item of the upstream success body
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderTranslationResult {
    /// Translations of one input text; only the first is used
    pub translations: Vec<ProviderTranslation>,
}

/// A single upstream translation
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderTranslation {
    /// Translated string
    pub text: String,
}

/// Upstream error body
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorBody {
    /// Error detail, when present
    #[serde(default)]
    pub error: Option<ProviderErrorDetail>,
}

/// Upstream error detail
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorDetail {
    /// Provider error message
    #[serde(default)]
    pub message: Option<String>,
}

impl ProviderErrorBody {
    /// Extract the message from a raw error body, tolerating any parse failure
    pub fn message_from_slice(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<Self>(body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|e| e.message)
    }
}
