use fountain_neuraxis_engine::Document;
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

/// Title page entries followed by one line per element.
pub fn render_outline(doc: &Document) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if !doc.title_page().is_empty() {
        for (key, value) in doc.title_page().iter() {
            writeln!(out, "{key}: {}", value.replace('\n', " / "))?;
        }
        out.push('\n');
    }
    for element in doc.elements() {
        writeln!(out, "{}", element.to_string().replace('\n', "\\n"))?;
    }
    Ok(out)
}

pub fn render_json(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// Several documents as one JSON array of `{ "path", "document" }` objects.
pub fn render_json_batch(docs: &[(PathBuf, Document)]) -> serde_json::Result<String> {
    let values = docs
        .iter()
        .map(|(path, doc)| -> serde_json::Result<serde_json::Value> {
            Ok(serde_json::json!({
                "path": path.display().to_string(),
                "document": serde_json::to_value(doc)?,
            }))
        })
        .collect::<serde_json::Result<Vec<_>>>()?;
    serde_json::to_string_pretty(&values)
}

pub fn file_header(path: &Path) -> String {
    format!("== {} ==", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fountain_neuraxis_engine::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn outline_lists_title_page_and_elements() {
        let doc = parse("Title:\n  Big\n  Fish\n\nJOHN\nHi.\nBye.\n\n> THE END <");
        assert_eq!(
            render_outline(&doc).unwrap(),
            "Title: Big / Fish\n\nCharacter: JOHN\nDialogue: Hi.\\nBye.\nAction (centered):  THE END \n"
        );
    }

    #[test]
    fn outline_without_title_page() {
        let doc = parse("INT. HOUSE");
        assert_eq!(render_outline(&doc).unwrap(), "Scene Heading: INT. HOUSE\n");
    }

    #[test]
    fn json_uses_element_type_names() {
        let doc = parse("Title: X\n\n## Act");
        let value: serde_json::Value = serde_json::from_str(&render_json(&doc).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title_page": [{ "key": "Title", "value": "X" }],
                "elements": [
                    { "type": "SECTION_HEADING", "text": "Act", "section_depth": 2 }
                ],
            })
        );
    }

    #[test]
    fn json_batch_includes_paths() {
        let docs = vec![(PathBuf::from("a.fountain"), parse("INT. A"))];
        let value: serde_json::Value =
            serde_json::from_str(&render_json_batch(&docs).unwrap()).unwrap();
        assert_eq!(value[0]["path"], "a.fountain");
        assert_eq!(value[0]["document"]["elements"][0]["text"], "INT. A");
    }
}
