use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::FanyiError;

/// Top-level fanyi configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fanyi: FanyiConfig,
    #[serde(default)]
    pub baidu: BaiduConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanyiConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for FanyiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Baidu general translation API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaiduConfig {
    #[serde(default, rename = "appid")]
    pub app_id: String,
    #[serde(default, rename = "seckey")]
    pub secret_key: String,
    /// Per-call timeout in seconds.
    #[serde(default = "default_req_timeout", rename = "req_timeout")]
    pub req_timeout_secs: u64,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Texts detected in this language are translated to English, everything
    /// else is translated into it.
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

impl Default for BaiduConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            secret_key: String::new(),
            req_timeout_secs: default_req_timeout(),
            api_base: default_api_base(),
            default_lang: default_lang(),
        }
    }
}

impl BaiduConfig {
    /// Both credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.app_id.is_empty() && !self.secret_key.is_empty()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.req_timeout_secs)
    }

    pub fn detect_url(&self) -> String {
        format!("{}/language", self.api_base.trim_end_matches('/'))
    }

    pub fn translate_url(&self) -> String {
        format!("{}/translate", self.api_base.trim_end_matches('/'))
    }
}

// --- Default value functions ---

fn default_log_level() -> String {
    "info".to_string()
}
fn default_req_timeout() -> u64 {
    5
}
fn default_api_base() -> String {
    "http://api.fanyi.baidu.com/api/trans/vip".to_string()
}
fn default_lang() -> String {
    "zh".to_string()
}

/// Template written on first start, credentials left blank.
const CONFIG_TEMPLATE: &str = r#"[fanyi]
log_level = "info"

[baidu]
# Generate these at https://fanyi-api.baidu.com/ (general text translation).
appid = ""
seckey = ""
# Seconds allowed for each API call.
req_timeout = 10
api_base = "http://api.fanyi.baidu.com/api/trans/vip"
default_lang = "zh"
"#;

/// Write the config template to `path` if nothing is there yet.
///
/// Returns `true` when a new file was created. Existing files are never
/// overwritten.
pub fn install_template(path: &str) -> Result<bool, FanyiError> {
    let path = Path::new(path);
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, CONFIG_TEMPLATE)?;
    warn!(
        "no config found, wrote a template to {}; fill in [baidu] appid and seckey",
        path.display()
    );
    Ok(true)
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, FanyiError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| FanyiError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| FanyiError::Config(format!("failed to parse config: {}", e)))?;

    if config.baidu.req_timeout_secs == 0 {
        return Err(FanyiError::Config(
            "baidu.req_timeout must be at least 1 second".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baidu_config_defaults_when_missing() {
        let cfg: BaiduConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.req_timeout_secs, 5);
        assert_eq!(cfg.default_lang, "zh");
        assert!(cfg.app_id.is_empty());
        assert!(!cfg.is_configured());
    }

    #[test]
    fn test_baidu_config_from_toml() {
        let toml_str = r#"
            appid = "20150319"
            seckey = "secret"
            req_timeout = 8
        "#;
        let cfg: BaiduConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.app_id, "20150319");
        assert_eq!(cfg.secret_key, "secret");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(8));
        assert!(cfg.is_configured());
    }

    #[test]
    fn test_missing_secret_is_not_configured() {
        let cfg = BaiduConfig {
            app_id: "20150319".into(),
            ..Default::default()
        };
        assert!(!cfg.is_configured());
    }

    #[test]
    fn test_endpoint_urls_ignore_trailing_slash() {
        let cfg = BaiduConfig {
            api_base: "http://localhost:9000/vip/".into(),
            ..Default::default()
        };
        assert_eq!(cfg.detect_url(), "http://localhost:9000/vip/language");
        assert_eq!(cfg.translate_url(), "http://localhost:9000/vip/translate");
    }

    #[test]
    fn test_template_parses_with_blank_credentials() {
        let cfg: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(cfg.fanyi.log_level, "info");
        assert_eq!(cfg.baidu.req_timeout_secs, 10);
        assert!(!cfg.baidu.is_configured());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let cfg = load("/nonexistent/__fanyi_config__.toml").unwrap();
        assert_eq!(cfg.baidu.req_timeout_secs, 5);
        assert_eq!(cfg.fanyi.log_level, "info");
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let tmp = std::env::temp_dir().join("__fanyi_test_bad_config__.toml");
        std::fs::write(&tmp, "[baidu\nappid = ").unwrap();
        let err = load(tmp.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FanyiError::Config(_)));
        let _ = std::fs::remove_file(&tmp);
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        let tmp = std::env::temp_dir().join("__fanyi_test_zero_timeout__.toml");
        std::fs::write(&tmp, "[baidu]\nappid = \"a\"\nseckey = \"b\"\nreq_timeout = 0\n").unwrap();
        let err = load(tmp.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FanyiError::Config(ref msg) if msg.contains("req_timeout")));
        let _ = std::fs::remove_file(&tmp);
    }

    #[test]
    fn test_install_template_never_overwrites() {
        let tmp = std::env::temp_dir().join("__fanyi_test_template__");
        let _ = std::fs::remove_dir_all(&tmp);
        let path = tmp.join("config.toml");
        let path_str = path.to_str().unwrap();

        assert!(install_template(path_str).unwrap());
        let cfg = load(path_str).unwrap();
        assert_eq!(cfg.baidu.req_timeout_secs, 10);

        std::fs::write(&path, "[baidu]\nappid = \"mine\"\n").unwrap();
        assert!(!install_template(path_str).unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[baidu]\nappid = \"mine\"\n",
            "should not overwrite user edits"
        );

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
