use super::kinds::{
    Boneyard, BoneyardOpen, Character, Comment, ForcedSig, PageBreak, Parenthetical,
    SceneHeading, SectionHeading, Synopsis, Transition,
};

/// Which of the mutually exclusive scan modes the builder is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Scanning,
    InBoneyard,
    InDialogueBlock,
}

/// Context the classifier needs beyond the line itself.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub mode: Mode,
    /// Consecutive blank lines since the last content line.
    pub blank_run: usize,
    /// The following source line, if any.
    pub next_line: Option<&'a str>,
}

impl ScanContext<'_> {
    fn after_blank(&self) -> bool {
        self.blank_run > 0
    }

    fn next_has_content(&self) -> bool {
        self.next_line.is_some_and(|l| !l.trim().is_empty())
    }
}

/// The decision for a single body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    /// `/* ... */` on one line; enclosed text.
    BoneyardLine(&'a str),
    /// Opens a multi-line boneyard; text after `/*`.
    BoneyardOpen(&'a str),
    /// Closes the open boneyard; text before `*/`.
    BoneyardClose(&'a str),
    /// Raw line inside an open boneyard.
    BoneyardContent(&'a str),
    PageBreak,
    Synopsis(&'a str),
    Comment(String),
    SectionHeading { text: &'a str, depth: usize },
    MalformedSectionHeading,
    SceneHeading { text: &'a str, scene_number: Option<&'a str> },
    CenteredAction(&'a str),
    Transition(&'a str),
    Character { dual: bool },
    Parenthetical,
    Dialogue,
    Action,
}

/// Classifies body lines. Rules are tried strictly in order; the first one
/// that matches decides the line.
pub struct FountainLineClassifier;

impl FountainLineClassifier {
    pub fn classify<'a>(&self, line: &'a str, ctx: &ScanContext<'_>) -> LineClass<'a> {
        if line.is_empty() || (ctx.mode != Mode::InBoneyard && line.trim().is_empty()) {
            return LineClass::Blank;
        }

        match Boneyard::open(line) {
            Some(BoneyardOpen::SingleLine(text)) => return LineClass::BoneyardLine(text),
            Some(BoneyardOpen::Block(rest)) => return LineClass::BoneyardOpen(rest),
            None => {}
        }

        if ctx.mode == Mode::InBoneyard {
            return match Boneyard::close(line) {
                Some(text) => LineClass::BoneyardClose(text),
                None => LineClass::BoneyardContent(line),
            };
        }

        if PageBreak::matches(line) {
            return LineClass::PageBreak;
        }

        if ctx.after_blank() {
            if let Some(text) = Synopsis::strip(line) {
                return LineClass::Synopsis(text);
            }
            if let Some(text) = Comment::parse(line) {
                return LineClass::Comment(text);
            }
            if let Some(sig) = SectionHeading::parse(line) {
                if sig.is_malformed() {
                    return LineClass::MalformedSectionHeading;
                }
                return LineClass::SectionHeading {
                    text: sig.text,
                    depth: sig.depth,
                };
            }
        }

        if let Some(sig) = SceneHeading::forced(line).or_else(|| SceneHeading::standard(line)) {
            return LineClass::SceneHeading {
                text: sig.text,
                scene_number: sig.scene_number,
            };
        }

        match Transition::forced(line) {
            Some(ForcedSig::Centered(text)) => return LineClass::CenteredAction(text),
            Some(ForcedSig::Transition(text)) => return LineClass::Transition(text),
            None => {}
        }

        if Transition::is_canonical(line) {
            return LineClass::Transition(line);
        }

        if ctx.after_blank() && Character::is_cue_text(line) && ctx.next_has_content() {
            return LineClass::Character {
                dual: Character::is_dual(line),
            };
        }

        if ctx.mode == Mode::InDialogueBlock {
            if !ctx.after_blank() && Parenthetical::opens(line) {
                return LineClass::Parenthetical;
            }
            return LineClass::Dialogue;
        }

        LineClass::Action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scanning(blank_run: usize) -> ScanContext<'static> {
        ScanContext {
            mode: Mode::Scanning,
            blank_run,
            next_line: Some("next"),
        }
    }

    fn classify<'a>(line: &'a str, ctx: ScanContext<'_>) -> LineClass<'a> {
        FountainLineClassifier.classify(line, &ctx)
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn blank_lines(#[case] line: &str) {
        assert_eq!(classify(line, scanning(0)), LineClass::Blank);
    }

    #[test]
    fn whitespace_inside_boneyard_is_content() {
        let ctx = ScanContext {
            mode: Mode::InBoneyard,
            blank_run: 0,
            next_line: None,
        };
        assert_eq!(classify("   ", ctx), LineClass::BoneyardContent("   "));
        assert_eq!(classify("", ctx), LineClass::Blank);
        assert_eq!(classify("INT. HOUSE", ctx), LineClass::BoneyardContent("INT. HOUSE"));
        assert_eq!(classify("done */", ctx), LineClass::BoneyardClose("done "));
    }

    #[test]
    fn stray_close_marker_outside_boneyard_is_action() {
        assert_eq!(classify("oops */", scanning(1)), LineClass::Action);
    }

    #[rstest]
    #[case("= synopsis")]
    #[case("[[comment]]")]
    #[case("# Act")]
    #[case("##")]
    fn blank_gated_rules_need_a_preceding_blank(#[case] line: &str) {
        assert_eq!(classify(line, scanning(0)), LineClass::Action);
    }

    #[test]
    fn page_break_beats_synopsis() {
        assert_eq!(classify("===", scanning(1)), LineClass::PageBreak);
        assert_eq!(classify("=", scanning(1)), LineClass::Synopsis(""));
    }

    #[test]
    fn section_before_forced_scene_heading() {
        assert_eq!(
            classify("# .INT", scanning(1)),
            LineClass::SectionHeading {
                text: ".INT",
                depth: 1
            }
        );
    }

    #[test]
    fn malformed_section() {
        assert_eq!(classify("###", scanning(2)), LineClass::MalformedSectionHeading);
    }

    #[test]
    fn scene_heading_beats_transition_suffix() {
        assert_eq!(
            classify("INT. CUT TO:", scanning(0)),
            LineClass::SceneHeading {
                text: "INT. CUT TO:",
                scene_number: None
            }
        );
    }

    #[test]
    fn transition_beats_character() {
        assert_eq!(classify("CUT TO:", scanning(1)), LineClass::Transition("CUT TO:"));
    }

    #[test]
    fn character_needs_following_content() {
        let ctx = ScanContext {
            mode: Mode::Scanning,
            blank_run: 1,
            next_line: Some("   "),
        };
        assert_eq!(classify("JOHN", ctx), LineClass::Action);

        let ctx = ScanContext {
            next_line: None,
            ..ctx
        };
        assert_eq!(classify("JOHN", ctx), LineClass::Action);

        assert_eq!(
            classify("JANE^", scanning(1)),
            LineClass::Character { dual: true }
        );
    }

    #[test]
    fn dialogue_block_lines() {
        let ctx = ScanContext {
            mode: Mode::InDialogueBlock,
            blank_run: 0,
            next_line: Some("x"),
        };
        assert_eq!(classify("(beat)", ctx), LineClass::Parenthetical);
        assert_eq!(classify("Hello.", ctx), LineClass::Dialogue);
        assert_eq!(classify("HELLO!", ctx), LineClass::Dialogue);
    }
}
