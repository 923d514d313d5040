use serde::{Deserialize, Serialize};

use super::{Element, ElementType, TitlePage};

/// A parsed screenplay: the title page plus the ordered element sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    title_page: TitlePage,
    elements: Vec<Element>,
}

impl Document {
    pub fn new(title_page: TitlePage, elements: Vec<Element>) -> Self {
        Self {
            title_page,
            elements,
        }
    }

    pub fn title_page(&self) -> &TitlePage {
        &self.title_page
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// True when there is neither a title page nor any element.
    pub fn is_empty(&self) -> bool {
        self.title_page.is_empty() && self.elements.is_empty()
    }

    pub fn elements_of(&self, element_type: ElementType) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.is(element_type))
    }

    pub fn scene_headings(&self) -> impl Iterator<Item = &Element> {
        self.elements_of(ElementType::SceneHeading)
    }

    /// Distinct speaking characters in order of first appearance.
    ///
    /// Cue decorations are dropped: the dual dialogue `^` and any extension
    /// such as `(V.O.)` or `(CONT'D)`.
    pub fn characters(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for cue in self.elements_of(ElementType::Character) {
            let name = Self::cue_name(cue.text());
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    fn cue_name(cue: &str) -> &str {
        let cue = cue.trim().trim_end_matches('^');
        let name = match cue.find('(') {
            Some(idx) => &cue[..idx],
            None => cue,
        };
        name.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cue(text: &str) -> Element {
        Element::new(ElementType::Character, text)
    }

    #[test]
    fn empty_document() {
        assert!(Document::default().is_empty());
    }

    #[test]
    fn characters_are_distinct_and_undecorated() {
        let doc = Document::new(
            TitlePage::new(),
            vec![
                cue("JOHN"),
                Element::new(ElementType::Dialogue, "Hi."),
                cue("JANE (V.O.)"),
                cue("JOHN (CONT'D)"),
                cue("JANE^"),
            ],
        );
        assert_eq!(doc.characters(), vec!["JOHN", "JANE"]);
    }

    #[test]
    fn scene_headings_filter() {
        let doc = Document::new(
            TitlePage::new(),
            vec![
                Element::new(ElementType::SceneHeading, "INT. HOUSE - DAY"),
                Element::new(ElementType::Action, "Quiet."),
                Element::new(ElementType::SceneHeading, "EXT. YARD - NIGHT"),
            ],
        );
        let texts: Vec<_> = doc.scene_headings().map(Element::text).collect();
        assert_eq!(texts, vec!["INT. HOUSE - DAY", "EXT. YARD - NIGHT"]);
    }
}
