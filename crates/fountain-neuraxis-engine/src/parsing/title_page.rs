//! Title page detection and extraction.
//!
//! The candidate header is everything before the first blank line of the
//! normalized document. It only becomes a title page when at least one
//! `key: value` pair comes out of it; otherwise it stays part of the body.

use std::sync::OnceLock;

use regex::Regex;

use super::normalize::SENTINEL;
use crate::models::TitlePage;

/// `Key:` with nothing but whitespace after the colon.
fn directive_regex() -> &'static Regex {
    static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE.get_or_init(|| Regex::new(r"^(\S[^:]+):\s*$").expect("Invalid directive regex"))
}

/// `Key: value` with the value on the same line.
fn inline_regex() -> &'static Regex {
    static INLINE: OnceLock<Regex> = OnceLock::new();
    INLINE.get_or_init(|| Regex::new(r"^(\S[^:]+):\s*(\S.*)$").expect("Invalid inline regex"))
}

/// Result of splitting a normalized document into title page and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePageSplit<'a> {
    pub title_page: TitlePage,
    /// Remaining text. Starts with the blank line that ended the header when a
    /// title page was consumed.
    pub body: &'a str,
    /// Number of source lines before the body's first line. Used to report
    /// diagnostics against the document's own line numbers.
    pub line_offset: usize,
}

/// Splits the title page off the front of a normalized document.
pub fn extract(doc: &str) -> TitlePageSplit<'_> {
    let header_end = doc.find(SENTINEL).unwrap_or(doc.len());
    let header = &doc[..header_end];

    let mut scan = HeaderScan::default();
    for line in header.split('\n') {
        scan.push(line);
    }

    match scan.finish() {
        Some(title_page) => {
            let header_lines = header.split('\n').count();
            log::debug!(
                "title page detected: {} entries over {} lines",
                title_page.len(),
                header_lines
            );
            TitlePageSplit {
                title_page,
                body: &doc[header_end..],
                // the body's first line is the tail of the header's last line
                line_offset: header_lines - 1,
            }
        }
        None => TitlePageSplit {
            title_page: TitlePage::new(),
            body: doc,
            line_offset: 0,
        },
    }
}

#[derive(Debug, Default)]
struct HeaderScan {
    found: bool,
    open_key: Option<String>,
    value: String,
    page: TitlePage,
}

impl HeaderScan {
    fn push(&mut self, line: &str) {
        if line.is_empty() {
            self.found = true;
            self.flush();
            return;
        }

        if let Some(caps) = directive_regex().captures(line) {
            self.found = true;
            self.flush();
            self.open_key = Some(caps[1].to_string());
            return;
        }

        if let Some(caps) = inline_regex().captures(line) {
            self.found = true;
            self.flush();
            self.open_key = Some(caps[1].to_string());
            self.value.push_str(&caps[2]);
            return;
        }

        if self.found {
            if !self.value.is_empty() {
                self.value.push('\n');
            }
            self.value.push_str(line.trim());
        }
    }

    fn flush(&mut self) {
        let value = std::mem::take(&mut self.value);
        if let Some(key) = self.open_key.take() {
            self.page.insert(&key, value);
        }
    }

    /// Returns the title page if the header produced at least one pair.
    fn finish(mut self) -> Option<TitlePage> {
        if !self.found || (self.value.is_empty() && self.page.is_empty()) {
            return None;
        }
        self.flush();
        (!self.page.is_empty()).then_some(self.page)
    }
}
