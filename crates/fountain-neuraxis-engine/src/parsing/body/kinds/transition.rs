/// Transition syntax, including the `>` forcing sigil it shares with
/// centered action (`> THE END <`).
pub struct Transition;

/// Fixed transition phrases, kept sorted for binary search.
pub const TRANSITIONS: [&str; 5] = [
    "CUT TO BLACK.",
    "CUT TO:",
    "FADE OUT.",
    "MATCH CUT TO:",
    "SMASH CUT TO:",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedSig<'a> {
    /// `>text<`: markers removed, inner text untouched.
    Centered(&'a str),
    /// `>text`: marker removed, trimmed.
    Transition(&'a str),
}

impl Transition {
    pub const FORCE: char = '>';
    pub const CENTER_END: char = '<';
    pub const SUFFIX: &'static str = "TO:";

    pub fn forced(line: &str) -> Option<ForcedSig<'_>> {
        let rest = line.strip_prefix(Self::FORCE)?;
        match rest.strip_suffix(Self::CENTER_END) {
            Some(inner) => Some(ForcedSig::Centered(inner)),
            None => Some(ForcedSig::Transition(rest.trim())),
        }
    }

    /// One of [`TRANSITIONS`] (case-insensitive) or any line ending `TO:`.
    pub fn is_canonical(line: &str) -> bool {
        let trimmed = line.trim();
        TRANSITIONS
            .binary_search(&trimmed.to_uppercase().as_str())
            .is_ok()
            || trimmed.ends_with(Self::SUFFIX)
    }
}
