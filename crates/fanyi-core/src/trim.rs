//! Trailing filler removal for spoken-style commands.

/// Fillers stripped from the tail of `…用<语言>怎么翻译<内容>` content.
pub const WILDCARD_FILLERS: &str = "吧呗啊啦呀！。？";

/// Fillers stripped from the tail of `把<内容>翻译成<语言>` content.
pub const REGEX_FILLERS: &str = "吧呗。.！";

/// Strip trailing characters that appear in `fillers`, one `char` at a time.
pub fn rtrim_fillers<'a>(text: &'a str, fillers: &str) -> &'a str {
    text.trim_end_matches(|c: char| fillers.contains(c))
}
