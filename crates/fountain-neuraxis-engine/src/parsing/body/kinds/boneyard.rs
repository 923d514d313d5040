/// Boneyard (`/* ... */`) block comment syntax.
pub struct Boneyard;

/// What a boneyard-opening line looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneyardOpen<'a> {
    /// Opens and closes on the same line; carries the enclosed text.
    SingleLine(&'a str),
    /// Opens a multi-line block; carries the text after the opener.
    Block(&'a str),
}

impl Boneyard {
    pub const OPEN: &'static str = "/*";
    pub const CLOSE: &'static str = "*/";

    /// Detects a line starting with `/*`. The closing marker is looked for
    /// on the whole line, so it may share the `*` of the opener (`/*/`).
    pub fn open(line: &str) -> Option<BoneyardOpen<'_>> {
        let rest = line.strip_prefix(Self::OPEN)?;
        match Self::close(line) {
            Some(before) => Some(BoneyardOpen::SingleLine(
                before.strip_prefix(Self::OPEN).unwrap_or(before),
            )),
            None => Some(BoneyardOpen::Block(rest)),
        }
    }

    /// Detects a line ending with `*/` (trailing whitespace allowed),
    /// returning the text in front of the marker.
    pub fn close(line: &str) -> Option<&str> {
        line.trim_end().strip_suffix(Self::CLOSE)
    }
}
