//! Wire format of the detection and translation endpoints.

use fanyi_core::config::BaiduConfig;
use fanyi_core::error::{TranslateError, MALFORMED_RESPONSE};
use fanyi_core::message::TranslationResult;
use serde::Deserialize;

use crate::sign::{new_salt, sign};

/// `error_code` the translation endpoint uses for success.
pub const TRANSLATE_OK: i64 = 52000;

/// `error_code` the detection endpoint uses for success.
pub const DETECT_OK: i64 = 0;

/// Signed body for the language detection endpoint.
#[derive(Debug, Clone)]
pub struct DetectionRequest {
    pub query: String,
    pub app_id: String,
    pub salt: u32,
    pub signature: String,
}

impl DetectionRequest {
    pub fn new(query: &str, cfg: &BaiduConfig) -> Self {
        let salt = new_salt();
        Self {
            query: query.to_string(),
            app_id: cfg.app_id.clone(),
            salt,
            signature: sign(query, &cfg.app_id, salt, &cfg.secret_key),
        }
    }

    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.clone()),
            ("appid", self.app_id.clone()),
            ("salt", self.salt.to_string()),
            ("sign", self.signature.clone()),
        ]
    }
}

/// Signed body for the translation endpoint.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub query: String,
    pub app_id: String,
    pub salt: u32,
    /// `"auto"` or a service code.
    pub source_lang: String,
    pub target_lang: String,
    pub signature: String,
}

impl TranslationRequest {
    pub fn new(query: &str, source_lang: &str, target_lang: &str, cfg: &BaiduConfig) -> Self {
        let salt = new_salt();
        Self {
            query: query.to_string(),
            app_id: cfg.app_id.clone(),
            salt,
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            signature: sign(query, &cfg.app_id, salt, &cfg.secret_key),
        }
    }

    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.clone()),
            ("appid", self.app_id.clone()),
            ("salt", self.salt.to_string()),
            ("from", self.source_lang.clone()),
            ("to", self.target_lang.clone()),
            ("sign", self.signature.clone()),
            ("tts", "0".to_string()),
            ("dict", "0".to_string()),
        ]
    }
}

/// `error_code` arrives as a number from one endpoint and a string from the other.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Int(i64),
    Text(String),
}

impl ErrorCode {
    pub fn is(&self, expected: i64) -> bool {
        match self {
            Self::Int(n) => *n == expected,
            Self::Text(s) => s.trim().parse::<i64>().ok() == Some(expected),
        }
    }

    pub fn as_code(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetectionResponse {
    #[serde(default)]
    pub error_code: Option<ErrorCode>,
    #[serde(default)]
    pub error_msg: Option<String>,
    #[serde(default)]
    pub data: Option<DetectionData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetectionData {
    #[serde(default)]
    pub src: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslationResponse {
    #[serde(default)]
    pub error_code: Option<ErrorCode>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub trans_result: Option<Vec<TransSegment>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransSegment {
    pub src: String,
    pub dst: String,
}

fn malformed_detection(message: &str) -> TranslateError {
    TranslateError::DetectionService {
        code: MALFORMED_RESPONSE.to_string(),
        message: message.to_string(),
    }
}

fn malformed_translation() -> TranslateError {
    TranslateError::TranslationService {
        code: MALFORMED_RESPONSE.to_string(),
    }
}

/// Parse a detection body into the detected source language code.
pub fn parse_detection(body: &str) -> Result<String, TranslateError> {
    let resp: DetectionResponse =
        serde_json::from_str(body).map_err(|e| malformed_detection(&e.to_string()))?;

    let Some(code) = resp.error_code else {
        return Err(malformed_detection("missing error_code"));
    };
    if !code.is(DETECT_OK) {
        return Err(TranslateError::DetectionService {
            code: code.as_code(),
            message: resp.error_msg.unwrap_or_default(),
        });
    }

    resp.data
        .and_then(|d| d.src)
        .filter(|src| !src.is_empty())
        .ok_or_else(|| malformed_detection("missing data.src"))
}

/// Parse a translation body into its first segment.
///
/// A missing `error_code` counts as success.
pub fn parse_translation(body: &str) -> Result<TranslationResult, TranslateError> {
    let resp: TranslationResponse =
        serde_json::from_str(body).map_err(|_| malformed_translation())?;

    let code = resp.error_code.unwrap_or(ErrorCode::Int(TRANSLATE_OK));
    if !code.is(TRANSLATE_OK) {
        return Err(TranslateError::TranslationService {
            code: code.as_code(),
        });
    }

    let (Some(from), Some(to)) = (resp.from, resp.to) else {
        return Err(malformed_translation());
    };
    let first = resp
        .trans_result
        .and_then(|segments| segments.into_iter().next())
        .ok_or_else(malformed_translation)?;

    Ok(TranslationResult {
        source_lang: from,
        target_lang: to,
        source_text: first.src,
        translated_text: first.dst,
    })
}
