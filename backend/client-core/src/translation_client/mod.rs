use crate::error::translation_client::TranslationClientError;
use crate::{PRISM_USER_AGENT, TRANSLATE_TEXT_ENDPOINT};

use common::{ErrorLocation, HttpStatusCode};
use models::{TargetLanguage, TranslationRequest, TranslationResult};

use std::panic::Location;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

/// HTTP client for the translate-text endpoint.
///
/// One call per submit: no retries, no explicit timeout, no cancellation.
#[derive(Clone)]
pub struct TranslationClient {
    base_url: Url,
    client: Client,
}

impl TranslationClient {
    pub fn new(base_url_str: &str) -> Result<Self, TranslationClientError> {
        let mut base_url = Url::parse(base_url_str)?;

        // Url::join replaces the last segment unless the base ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().user_agent(PRISM_USER_AGENT).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Translate `text` from English into `target_language`.
    ///
    /// # Errors
    /// Returns [`TranslationClientError`] if the text is blank or too long, the
    /// transport fails, or the API answers with a non-success status.
    pub async fn translate(
        &self,
        text: &str,
        target_language: TargetLanguage,
    ) -> Result<TranslationResult, TranslationClientError> {
        let request = TranslationRequest::builder()
            .with_text(text)
            .with_target_language(target_language)
            .build()?;

        self.send(&request).await
    }

    /// Send an already validated request.
    pub async fn send(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationClientError> {
        let url = self.base_url.join(TRANSLATE_TEXT_ENDPOINT)?;

        debug!(
            "POST {} ({} chars, target={})",
            url,
            request.text().chars().count(),
            request.target_language()
        );

        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let status = HttpStatusCode::from(status.as_u16());
            let body = response.text().await.unwrap_or_default();
            warn!("Translation API returned {} ({})", status, status.category());
            return Err(TranslationClientError::Server {
                status,
                message: body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let bytes = response.bytes().await?;
        let result: TranslationResult = serde_json::from_slice(&bytes)?;

        if !(0.0..=1.0).contains(&result.quality_score) {
            warn!(
                "Translation API returned quality_score {} outside [0, 1]",
                result.quality_score
            );
        }

        Ok(result)
    }
}
