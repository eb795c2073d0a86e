use thiserror::Error;

/// Top-level error type for fanyi.
#[derive(Debug, Error)]
pub enum FanyiError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure below the service protocol: the request never produced a body.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The per-call timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Connection, TLS, or body read failure.
    #[error("request failed: {0}")]
    Request(String),
}

/// Code reported when the service answered but the body was unusable.
pub const MALFORMED_RESPONSE: &str = "malformed-response";

/// Every way a translation can fail once an intent has been recognized.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// `appid` or `seckey` is empty; no request was sent.
    #[error("translation API credentials are not configured")]
    NotConfigured,

    /// The detection endpoint could not be reached.
    #[error("language detection request failed: {0}")]
    DetectionTransport(#[source] TransportError),

    /// The detection endpoint answered with a non-zero `error_code`.
    #[error("language detection returned {code}: {message}")]
    DetectionService { code: String, message: String },

    /// The translation endpoint could not be reached.
    #[error("translation request failed: {0}")]
    TranslationTransport(#[source] TransportError),

    /// The translation endpoint reported an error or sent an unusable body.
    #[error("translation returned {code}")]
    TranslationService { code: String },
}

impl TranslateError {
    /// Internal numeric code shown to the user.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotConfigured => -1300,
            Self::DetectionTransport(_) => -1301,
            Self::DetectionService { .. } => -1302,
            Self::TranslationService { .. } => -1303,
            Self::TranslationTransport(_) => -1304,
        }
    }

    fn user_detail(&self) -> String {
        match self {
            Self::NotConfigured => "你还没有配置百度翻译的 appid 和 seckey，\
                 请先到开发者平台生成并填入配置文件的 [baidu] 段"
                .to_string(),
            Self::DetectionTransport(_) => "请求语种查询出错".to_string(),
            Self::DetectionService { code, message } => {
                format!("语种查询出错，返回：{code} -> {message}")
            }
            Self::TranslationTransport(_) => "无法请求翻译 API".to_string(),
            Self::TranslationService { code } => format!("通用翻译API返回错误：{code}"),
        }
    }

    /// Single reply line for the chat user.
    pub fn user_message(&self) -> String {
        format!(
            "翻译出错，错误代码：[{}]，内容：{}",
            self.code(),
            self.user_detail()
        )
    }
}
