/// Trailing sentinel appended to every normalized document.
///
/// Guarantees that the title page boundary search always finds a `\n\n` and
/// that the last content line always has a (blank) successor.
pub const SENTINEL: &str = "\n\n";

/// Trims the document, unifies line endings to `\n` and appends [`SENTINEL`].
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len() + SENTINEL.len());
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            // \r\n and lone \r both become \n
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out.push_str(SENTINEL);
    out
}
