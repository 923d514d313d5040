/// Character cue syntax.
pub struct Character;

impl Character {
    pub const DUAL_MARKER: char = '^';

    /// A cue has no lowercase letters at all.
    pub fn is_cue_text(line: &str) -> bool {
        !line.chars().any(char::is_lowercase)
    }

    /// A trailing `^` pairs this cue with the previous one.
    pub fn is_dual(line: &str) -> bool {
        line.trim().ends_with(Self::DUAL_MARKER)
    }
}

/// Parenthetical syntax inside a dialogue block.
pub struct Parenthetical;

impl Parenthetical {
    pub const OPEN: char = '(';

    pub fn opens(line: &str) -> bool {
        line.trim().starts_with(Self::OPEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("JOHN", true)]
    #[case("JOHN (V.O.)", true)]
    #[case("R2-D2", true)]
    #[case("ÉMILE", true)]
    #[case("McCLANE", false)]
    #[case("émile", false)]
    #[case("ΑΛΕΞΗΣ", true)]
    #[case("αβγ", false)]
    fn cue_text(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(Character::is_cue_text(line), expected);
    }

    #[test]
    fn dual_marker() {
        assert!(Character::is_dual("JANE ^ "));
        assert!(!Character::is_dual("JANE"));
    }

    #[test]
    fn parenthetical() {
        assert!(Parenthetical::opens("  (quietly)"));
        assert!(!Parenthetical::opens("quietly)"));
    }
}
