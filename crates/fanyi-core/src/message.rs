use crate::language;

/// The first segment of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub source_lang: String,
    pub target_lang: String,
    pub source_text: String,
    pub translated_text: String,
}

impl TranslationResult {
    /// Render the chat reply: header, language pair, original, blank line, translation.
    pub fn to_reply(&self) -> String {
        let from = language::name_for(&self.source_lang).unwrap_or(self.source_lang.as_str());
        let to = language::name_for(&self.target_lang).unwrap_or(self.target_lang.as_str());
        format!(
            "翻译结果\n\
             {from} -> {to}\n\
             {}\n\
             \n\
             {}",
            self.source_text, self.translated_text
        )
    }
}
