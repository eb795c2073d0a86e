//! Detect-then-translate flow against the Baidu general translation API.

use fanyi_core::{
    config::BaiduConfig,
    error::TranslateError,
    intent::Intent,
    message::TranslationResult,
    traits::Transport,
};
use std::time::Instant;
use tracing::{debug, warn};

use crate::http::HttpTransport;
use crate::wire::{parse_detection, parse_translation, DetectionRequest, TranslationRequest};


/// Target used when the text is already in the default language.
pub const FALLBACK_TARGET: &str = "en";

/// Executes intents with at most two sequential calls: detection (only when
/// the intent has no target) and translation.
pub struct BaiduTranslator {
    transport: Box<dyn Transport>,
}

impl BaiduTranslator {
    /// Translator over a real HTTP client.
    pub fn new() -> Self {
        Self::with_transport(Box::new(HttpTransport::new()))
    }

    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Translate `intent` with the given credentials.
    pub async fn execute(
        &self,
        intent: &Intent,
        cfg: &BaiduConfig,
    ) -> Result<TranslationResult, TranslateError> {
        if !cfg.is_configured() {
            return Err(TranslateError::NotConfigured);
        }
        let start = Instant::now();

        let target = match intent.target_lang {
            Some(code) => code.to_string(),
            None => {
                let detected = self.detect_language(&intent.text, cfg).await?;
                pick_target(&detected, &cfg.default_lang).to_string()
            }
        };

        let req = TranslationRequest::new(&intent.text, "auto", &target, cfg);
        debug!(
            "baidu: translate via {} to={} salt={}",
            self.transport.name(),
            req.target_lang,
            req.salt
        );
        let body = self
            .transport
            .post_form(&cfg.translate_url(), &req.to_form(), cfg.request_timeout())
            .await
            .map_err(|e| {
                warn!("baidu: translation request failed: {e}");
                TranslateError::TranslationTransport(e)
            })?;

        let result = parse_translation(&body).inspect_err(|e| {
            warn!("baidu: translation rejected: {e}");
        })?;
        debug!(
            "baidu: {} -> {} in {}ms",
            result.source_lang,
            result.target_lang,
            start.elapsed().as_millis()
        );
        Ok(result)
    }

    /// Ask the detection endpoint which language `text` is in.
    async fn detect_language(
        &self,
        text: &str,
        cfg: &BaiduConfig,
    ) -> Result<String, TranslateError> {
        let req = DetectionRequest::new(text, cfg);
        debug!("baidu: detect language salt={}", req.salt);
        let body = self
            .transport
            .post_form(&cfg.detect_url(), &req.to_form(), cfg.request_timeout())
            .await
            .map_err(|e| {
                warn!("baidu: detection request failed: {e}");
                TranslateError::DetectionTransport(e)
            })?;

        let src = parse_detection(&body).inspect_err(|e| {
            warn!("baidu: detection rejected: {e}");
        })?;
        debug!("baidu: detected {src}");
        Ok(src)
    }
}

impl Default for BaiduTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate out of the default language, or into it.
pub fn pick_target<'a>(detected: &str, default_lang: &'a str) -> &'a str {
    if detected == default_lang {
        FALLBACK_TARGET
    } else {
        default_lang
    }
}
