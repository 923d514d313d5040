use crate::models::{Element, ElementType};
use crate::parsing::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};

use super::classify::{FountainLineClassifier, LineClass, Mode, ScanContext};

/// Scan state carried between lines.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Scanning,
    /// `resume` is the mode to return to once the block closes.
    InBoneyard { buffer: String, resume: Mode },
    InDialogueBlock,
}

impl ScanState {
    fn mode(&self) -> Mode {
        match self {
            ScanState::Scanning => Mode::Scanning,
            ScanState::InBoneyard { .. } => Mode::InBoneyard,
            ScanState::InDialogueBlock => Mode::InDialogueBlock,
        }
    }

    fn resume(mode: Mode) -> Self {
        match mode {
            Mode::InDialogueBlock => ScanState::InDialogueBlock,
            Mode::Scanning | Mode::InBoneyard => ScanState::Scanning,
        }
    }
}

/// Builds the element sequence one body line at a time.
///
/// Elements are only ever appended; merges extend the last element's text
/// and dual dialogue flips an earlier character cue in place.
pub struct ElementBuilder {
    classifier: FountainLineClassifier,
    state: ScanState,
    blank_run: usize,
    out: Vec<Element>,
}

impl Default for ElementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBuilder {
    pub fn new() -> Self {
        Self {
            classifier: FountainLineClassifier,
            state: ScanState::Scanning,
            // start of the body behaves as if it followed a blank line
            blank_run: 1,
            out: vec![],
        }
    }

    pub fn push<S: DiagnosticSink + ?Sized>(
        &mut self,
        line_number: usize,
        line: &str,
        next_line: Option<&str>,
        sink: &mut S,
    ) {
        let ctx = ScanContext {
            mode: self.state.mode(),
            blank_run: self.blank_run,
            next_line,
        };

        match self.classifier.classify(line, &ctx) {
            LineClass::Blank => {
                self.blank_run += 1;
                match &mut self.state {
                    state @ ScanState::InDialogueBlock => *state = ScanState::Scanning,
                    ScanState::InBoneyard { resume, .. } => *resume = Mode::Scanning,
                    ScanState::Scanning => {}
                }
            }
            LineClass::BoneyardLine(text) => {
                let text = match std::mem::replace(&mut self.state, ScanState::Scanning) {
                    ScanState::InBoneyard { mut buffer, resume } => {
                        self.state = ScanState::resume(resume);
                        buffer.push_str(text);
                        buffer
                    }
                    other => {
                        self.state = other;
                        text.to_string()
                    }
                };
                self.emit(ElementType::Boneyard, text);
            }
            LineClass::BoneyardOpen(rest) => match &mut self.state {
                ScanState::InBoneyard { buffer, .. } => {
                    buffer.push_str(rest);
                    buffer.push('\n');
                }
                other => {
                    let resume = other.mode();
                    *other = ScanState::InBoneyard {
                        buffer: format!("{rest}\n"),
                        resume,
                    };
                }
            },
            LineClass::BoneyardClose(text) => {
                if let ScanState::InBoneyard { mut buffer, resume } =
                    std::mem::replace(&mut self.state, ScanState::Scanning)
                {
                    self.state = ScanState::resume(resume);
                    let text = text.trim();
                    if !text.is_empty() {
                        buffer.push_str(text);
                    }
                    self.emit(ElementType::Boneyard, buffer);
                }
            }
            LineClass::BoneyardContent(raw) => {
                if let ScanState::InBoneyard { buffer, .. } = &mut self.state {
                    buffer.push_str(raw);
                    buffer.push('\n');
                }
            }
            LineClass::PageBreak => {
                self.emit(ElementType::PageBreak, line);
                self.blank_run = 0;
            }
            LineClass::Synopsis(text) => {
                self.emit(ElementType::Synopsis, text);
            }
            LineClass::Comment(text) => {
                self.emit(ElementType::Comment, text);
            }
            LineClass::SectionHeading { text, depth } => {
                self.blank_run = 0;
                self.emit(ElementType::SectionHeading, text)
                    .set_section_depth(depth);
            }
            LineClass::MalformedSectionHeading => {
                self.blank_run = 0;
                sink.report(Diagnostic::new(
                    line_number,
                    DiagnosticKind::MalformedSectionHeading,
                ));
            }
            LineClass::SceneHeading { text, scene_number } => {
                self.blank_run = 0;
                self.emit(ElementType::SceneHeading, text)
                    .set_scene_number(scene_number.map(str::to_string));
            }
            LineClass::CenteredAction(text) => {
                self.blank_run = 0;
                self.emit(ElementType::Action, text).set_centered(true);
            }
            LineClass::Transition(text) => {
                self.blank_run = 0;
                self.emit(ElementType::Transition, text);
            }
            LineClass::Character { dual } => {
                self.blank_run = 0;
                if dual {
                    self.flip_previous_character();
                }
                self.emit(ElementType::Character, line)
                    .set_dual_dialogue(dual);
                self.state = ScanState::InDialogueBlock;
            }
            LineClass::Parenthetical => {
                self.blank_run = 0;
                self.emit(ElementType::Parenthetical, line);
            }
            LineClass::Dialogue => {
                self.blank_run = 0;
                match self.out.last_mut() {
                    Some(prev) if prev.is(ElementType::Dialogue) => prev.append_line(line),
                    _ => {
                        self.emit(ElementType::Dialogue, line);
                    }
                }
            }
            LineClass::Action => {
                let adjacent = self.blank_run == 0;
                self.blank_run = 0;
                match self.out.last_mut() {
                    Some(prev) if adjacent => prev.append_line(line),
                    _ => {
                        self.emit(ElementType::Action, line);
                    }
                }
            }
        }
    }

    pub fn finish(self) -> Vec<Element> {
        if let ScanState::InBoneyard { buffer, .. } = &self.state {
            log::debug!(
                "unterminated boneyard dropped ({} bytes buffered)",
                buffer.len()
            );
        }
        self.out
    }

    fn emit(&mut self, element_type: ElementType, text: impl Into<String>) -> &mut Element {
        self.out.push(Element::new(element_type, text));
        let last = self.out.len() - 1;
        &mut self.out[last]
    }

    /// Marks the nearest earlier character cue as dual dialogue.
    fn flip_previous_character(&mut self) {
        if let Some(prev) = self
            .out
            .iter_mut()
            .rev()
            .find(|e| e.is(ElementType::Character))
        {
            prev.set_dual_dialogue(true);
        }
    }
}
