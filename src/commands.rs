//! Host-side pattern dispatch: decides which recognizer owns a message.
//!
//! Patterns are tried from the most to the least specific. The first one that
//! matches owns the message even if its recognizer later rejects it.

use fanyi_core::intent::{Captures, Recognizer};
use regex::Regex;
use std::sync::OnceLock;

/// Reply sent when `翻译` arrives with nothing to translate.
pub const CONTENT_PROMPT: &str = "请输入你要翻译的内容";

const COMMAND_WORD: &str = "翻译";

static ZA_WILDCARD: OnceLock<Regex> = OnceLock::new();
static ZENME_WILDCARD: OnceLock<Regex> = OnceLock::new();
static BA_REGEX: OnceLock<Regex> = OnceLock::new();

fn za_wildcard() -> &'static Regex {
    ZA_WILDCARD.get_or_init(|| wildcard_regex("咋翻译"))
}

fn zenme_wildcard() -> &'static Regex {
    ZENME_WILDCARD.get_or_init(|| wildcard_regex("怎么翻译"))
}

fn ba_regex() -> &'static Regex {
    BA_REGEX.get_or_init(|| compile(r"[把将](.*)翻译[为成](.*)"))
}

/// `*用*<verb>*` with each `*` captured. The split lands on the `用` nearest
/// the verb so words like 用户 or 使用 stay in the first span.
fn wildcard_regex(verb: &str) -> Regex {
    compile(&format!(r"(?s)^(.*)用(.*?){}(.*)$", regex::escape(verb)))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in command pattern must compile")
}

/// A message the host recognized as a translation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bare `翻译`; the next message from the same sender is the content.
    Prompt,
    /// Captures ready for intent extraction.
    Matched(Recognizer, Captures),
}

impl Command {
    /// Parse a command from message text. Returns `None` for ordinary chat.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        for re in [za_wildcard(), zenme_wildcard()] {
            if let Some(caps) = re.captures(text) {
                let group = |i| caps.get(i).map_or("", |m| m.as_str());
                let captures = Captures::new()
                    .with("b1", group(1))
                    .with("b2", group(2))
                    .with("b3", group(3));
                return Some(Self::Matched(Recognizer::Wildcard, captures));
            }
        }

        if text == COMMAND_WORD {
            return Some(Self::Prompt);
        }

        // `翻译 <content>` as a separate first word outranks the 把 regex.
        if let Some(rest) = text.strip_prefix(COMMAND_WORD) {
            if rest.starts_with(char::is_whitespace) {
                return Some(Self::content(rest.trim()));
            }
        }

        if let Some(caps) = ba_regex().captures(text) {
            let group = |i| caps.get(i).map_or("", |m| m.as_str());
            let captures = Captures::new().with("b1", group(1)).with("b2", group(2));
            return Some(Self::Matched(Recognizer::Regex, captures));
        }

        if let Some(rest) = text.strip_prefix(COMMAND_WORD) {
            let content = rest.trim();
            if content.is_empty() {
                return Some(Self::Prompt);
            }
            return Some(Self::content(content));
        }

        None
    }

    /// Explicit `翻译 <content>` command.
    pub fn content(content: &str) -> Self {
        Self::Matched(
            Recognizer::Command,
            Captures::new().with("content", content),
        )
    }
}
