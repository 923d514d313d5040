use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a parsed screenplay element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    #[default]
    None,
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    SectionHeading,
    Synopsis,
    Comment,
    Boneyard,
    PageBreak,
}

impl ElementType {
    /// Human readable label, used by the outline output.
    pub fn label(self) -> &'static str {
        match self {
            ElementType::None => "None",
            ElementType::SceneHeading => "Scene Heading",
            ElementType::Action => "Action",
            ElementType::Character => "Character",
            ElementType::Dialogue => "Dialogue",
            ElementType::Parenthetical => "Parenthetical",
            ElementType::Transition => "Transition",
            ElementType::SectionHeading => "Section Heading",
            ElementType::Synopsis => "Synopsis",
            ElementType::Comment => "Comment",
            ElementType::Boneyard => "Boneyard",
            ElementType::PageBreak => "Page Break",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parsed unit of a screenplay.
///
/// The flag fields only carry meaning for a specific [`ElementType`]:
/// `centered` for action, `dual_dialogue` for character cues,
/// `scene_number` for scene headings and `section_depth` for section headings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    element_type: ElementType,
    text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    centered: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    dual_dialogue: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scene_number: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    section_depth: usize,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl Element {
    pub fn new(element_type: ElementType, text: impl Into<String>) -> Self {
        Self {
            element_type,
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    pub fn is_dual_dialogue(&self) -> bool {
        self.dual_dialogue
    }

    pub fn scene_number(&self) -> Option<&str> {
        self.scene_number.as_deref()
    }

    pub fn section_depth(&self) -> usize {
        self.section_depth
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends a source line to this element, separated by a newline.
    pub fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    pub fn set_centered(&mut self, centered: bool) {
        self.centered = centered;
    }

    pub fn set_dual_dialogue(&mut self, dual_dialogue: bool) {
        self.dual_dialogue = dual_dialogue;
    }

    pub fn set_scene_number(&mut self, scene_number: Option<String>) {
        self.scene_number = scene_number;
    }

    pub fn set_section_depth(&mut self, depth: usize) {
        self.section_depth = depth;
    }

    pub fn is(&self, element_type: ElementType) -> bool {
        self.element_type == element_type
    }
}

impl fmt::Display for Element {
    /// Formats as `"<type>[ (qualifier)]: <text>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element_type)?;
        if self.centered {
            write!(f, " (centered)")?;
        } else if self.dual_dialogue {
            write!(f, " (dual dialogue)")?;
        } else if self.section_depth > 0 {
            write!(f, " ({})", self.section_depth)?;
        }
        write!(f, ": {}", self.text)
    }
}
