//! Display names (Simplified Chinese) for the languages the translation API accepts.
//!
//! Several names can share one code. Reverse lookups return the first name
//! declared for a code, so the order of [`LANGUAGES`] is significant.

use std::collections::HashMap;
use std::sync::OnceLock;

/// `(display name, service code)` in declaration order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("简体中文", "zh"),
    ("汉语", "zh"),
    ("中文", "zh"),
    ("普通话", "zh"),
    ("英语", "en"),
    ("英文", "en"),
    ("法语", "fra"),
    ("日语", "jp"),
    ("日本语", "jp"),
    ("日文", "jp"),
    ("韩语", "kor"),
    ("西班牙语", "spa"),
    ("泰语", "th"),
    ("阿拉伯语", "ara"),
    ("俄语", "ru"),
    ("葡萄牙语", "pt"),
    ("德语", "de"),
    ("意大利语", "it"),
    ("希腊语", "el"),
    ("荷兰语", "nl"),
    ("波兰语", "pl"),
    ("保加利亚语", "bul"),
    ("丹麦语", "dan"),
    ("爱沙尼亚语", "est"),
    ("芬兰语", "fin"),
    ("捷克语", "cs"),
    ("罗马尼亚语", "rom"),
    ("斯洛文尼亚语", "slo"),
    ("瑞典语", "swe"),
    ("匈牙利语", "hu"),
    ("繁体中文", "cht"),
    ("越南语", "vie"),
];

static TABLE: OnceLock<LanguageTable> = OnceLock::new();

/// Bidirectional name/code index over [`LANGUAGES`], built once per process.
#[derive(Debug)]
pub struct LanguageTable {
    by_name: HashMap<&'static str, &'static str>,
    by_code: HashMap<&'static str, &'static str>,
}

impl LanguageTable {
    fn build(entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_code = HashMap::new();
        for &(name, code) in entries {
            by_name.insert(name, code);
            by_code.entry(code).or_insert(name);
        }
        Self { by_name, by_code }
    }

    pub fn global() -> &'static Self {
        TABLE.get_or_init(|| Self::build(LANGUAGES))
    }

    /// Service code for a display name. Only surrounding whitespace is ignored.
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name.trim()).copied()
    }

    /// First declared display name for a service code.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.by_code.get(code).copied()
    }
}

/// Shorthand for `LanguageTable::global().code_for(name)`.
pub fn code_for(name: &str) -> Option<&'static str> {
    LanguageTable::global().code_for(name)
}

/// Shorthand for `LanguageTable::global().name_for(code)`.
pub fn name_for(code: &str) -> Option<&'static str> {
    LanguageTable::global().name_for(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_for_exact_and_trimmed() {
        assert_eq!(code_for("英语"), Some("en"));
        assert_eq!(code_for("  日语\n"), Some("jp"));
        assert_eq!(code_for("繁体中文"), Some("cht"));
    }

    #[test]
    fn test_code_for_rejects_unknown_and_partial() {
        assert_eq!(code_for("火星语"), None);
        assert_eq!(code_for("英"), None);
        assert_eq!(code_for(""), None);
        assert_eq!(code_for("英 语"), None);
    }

    #[test]
    fn test_name_for_uses_first_declared_synonym() {
        assert_eq!(name_for("zh"), Some("简体中文"));
        assert_eq!(name_for("en"), Some("英语"));
        assert_eq!(name_for("jp"), Some("日语"));
        // Stable across repeated calls.
        for _ in 0..3 {
            assert_eq!(name_for("zh"), Some("简体中文"));
        }
    }

    #[test]
    fn test_name_for_unknown_code() {
        assert_eq!(name_for("xx"), None);
        assert_eq!(name_for("auto"), None);
    }

    #[test]
    fn test_code_for_is_left_inverse_of_name_for() {
        for &(_, code) in LANGUAGES {
            let name = name_for(code).unwrap();
            assert_eq!(code_for(name), Some(code), "round trip failed for {code}");
        }
    }

    #[test]
    fn test_every_declared_name_resolves() {
        for &(name, code) in LANGUAGES {
            assert_eq!(code_for(name), Some(code));
        }
    }

    #[test]
    fn test_first_declared_matches_linear_scan() {
        let table = LanguageTable::global();
        for &(_, code) in LANGUAGES {
            let scanned = LANGUAGES.iter().find(|(_, c)| *c == code).map(|(n, _)| *n);
            assert_eq!(table.name_for(code), scanned);
        }
    }
}
