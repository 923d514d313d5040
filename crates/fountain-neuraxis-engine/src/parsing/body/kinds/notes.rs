//! Page breaks, synopses and `[[ ]]` comments: the `=` and bracket sigils.

use std::sync::OnceLock;

use regex::Regex;

pub struct PageBreak;

impl PageBreak {
    pub const MARKER: char = '=';

    /// Three or more `=` and nothing else but trailing whitespace.
    pub fn matches(line: &str) -> bool {
        static PAGE_BREAK: OnceLock<Regex> = OnceLock::new();
        PAGE_BREAK
            .get_or_init(|| Regex::new(r"^={3,}\s*$").expect("Invalid page break regex"))
            .is_match(line)
    }
}

pub struct Synopsis;

impl Synopsis {
    /// Strips leading whitespace and a single `=`.
    pub fn strip(line: &str) -> Option<&str> {
        line.trim_start().strip_prefix(PageBreak::MARKER)
    }
}

pub struct Comment;

impl Comment {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";

    /// Returns the comment text with every `[[` and `]]` removed.
    pub fn parse(line: &str) -> Option<String> {
        static COMMENT: OnceLock<Regex> = OnceLock::new();
        let re = COMMENT.get_or_init(|| {
            Regex::new(r"^\s*\[\[\s*[^\]]+\s*\]\]\s*$").expect("Invalid comment regex")
        });
        if !re.is_match(line) {
            return None;
        }
        Some(line.replace(Self::OPEN, "").replace(Self::CLOSE, ""))
    }
}
