/// Section heading (`#`, `##`, ...) syntax.
pub struct SectionHeading;

/// A line that starts (after whitespace) with the section marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSig<'a> {
    /// Text after the marker run, trimmed. Empty for a malformed heading.
    pub text: &'a str,
    /// Characters consumed in front of the text.
    ///
    /// Counts leading whitespace as well as `#` characters, so `"  ## Act"`
    /// has depth 4. Existing documents rely on this value.
    pub depth: usize,
}

impl SectionHeading {
    pub const MARKER: char = '#';

    pub fn parse(line: &str) -> Option<SectionSig<'_>> {
        if !line.trim_start().starts_with(Self::MARKER) {
            return None;
        }
        let rest = line.trim_start().trim_start_matches(Self::MARKER);
        let depth = line[..line.len() - rest.len()].chars().count();
        Some(SectionSig {
            text: rest.trim(),
            depth,
        })
    }
}

impl SectionSig<'_> {
    pub fn is_malformed(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Act", "Act", 1)]
    #[case("## Act One", "Act One", 2)]
    #[case("###Sequence  ", "Sequence", 3)]
    #[case("  ## Act", "Act", 4)]
    fn depth_and_text(#[case] line: &str, #[case] text: &str, #[case] depth: usize) {
        let sig = SectionHeading::parse(line).unwrap();
        assert_eq!(sig.text, text);
        assert_eq!(sig.depth, depth);
        assert!(!sig.is_malformed());
    }

    #[test]
    fn marker_only_is_malformed() {
        let sig = SectionHeading::parse("##   ").unwrap();
        assert!(sig.is_malformed());
        assert_eq!(sig.depth, 2);
    }

    #[test]
    fn not_a_section() {
        assert_eq!(SectionHeading::parse("Act #1"), None);
    }
}
