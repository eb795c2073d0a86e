//! Intent extraction: turns the capture groups of a matched command into
//! something the translator can execute.
//!
//! A recognizer that cannot build a usable intent returns `None`. That is not
//! an error: the message simply was not a translation command and the host
//! handles it as ordinary chat.

use std::collections::HashMap;

use crate::language;
use crate::trim::{rtrim_fillers, REGEX_FILLERS, WILDCARD_FILLERS};

/// The phrasing shape the host matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    /// `翻译 <content>`.
    Command,
    /// `<b1>用<b2>怎么翻译<b3>` and the `咋` variant.
    Wildcard,
    /// `[把将]<b1>翻译[为成]<b2>`.
    Regex,
}

impl Recognizer {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Wildcard => "wildcard",
            Self::Regex => "regex",
        }
    }
}

/// Named capture slots filled by the host. Absent slots read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures(HashMap<String, String>);

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: &str, value: impl Into<String>) -> Self {
        self.0.insert(slot.to_string(), value.into());
        self
    }

    pub fn get(&self, slot: &str) -> &str {
        self.0.get(slot).map(String::as_str).unwrap_or("")
    }
}

/// What to translate and, optionally, into which language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    /// Never empty or whitespace-only.
    pub text: String,
    /// `None` defers the choice to a detection call.
    pub target_lang: Option<&'static str>,
}

/// Run the recognizer the host matched against its captures.
pub fn extract(recognizer: Recognizer, captures: &Captures) -> Option<Intent> {
    match recognizer {
        Recognizer::Command => from_command(captures.get("content")),
        Recognizer::Wildcard => {
            from_wildcard(captures.get("b1"), captures.get("b2"), captures.get("b3"))
        }
        Recognizer::Regex => from_regex(captures.get("b1"), captures.get("b2")),
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn from_command(content: &str) -> Option<Intent> {
    if is_blank(content) {
        return None;
    }
    Some(Intent {
        text: content.to_string(),
        target_lang: None,
    })
}

fn from_wildcard(b1: &str, b2: &str, b3: &str) -> Option<Intent> {
    // No stated language makes the phrasing ambiguous.
    if b2.is_empty() {
        return None;
    }
    // An unknown language means the sentence only looks like a command.
    let target = language::code_for(b2)?;
    let b3 = rtrim_fillers(b3, WILDCARD_FILLERS);
    let content = if b1.is_empty() { b3 } else { b1 };
    if is_blank(content) {
        return None;
    }
    Some(Intent {
        text: content.to_string(),
        target_lang: Some(target),
    })
}

fn from_regex(b1: &str, b2: &str) -> Option<Intent> {
    let content = rtrim_fillers(b1, REGEX_FILLERS);
    if is_blank(content) {
        return None;
    }
    let target = language::code_for(b2)?;
    Some(Intent {
        text: content.to_string(),
        target_lang: Some(target),
    })
}
