pub mod body;
pub mod diagnostics;
pub mod normalize;
pub mod title_page;

use body::ElementBuilder;
use diagnostics::{DiagnosticSink, LogSink};

use crate::models::Document;

/// Parses a Fountain screenplay, logging diagnostics as warnings.
pub fn parse(source: &str) -> Document {
    parse_with_sink(source, &mut LogSink)
}

/// Parses a Fountain screenplay, reporting diagnostics to `sink`.
///
/// Never fails: malformed lines are reported and skipped.
pub fn parse_with_sink<S: DiagnosticSink + ?Sized>(source: &str, sink: &mut S) -> Document {
    let doc = normalize::normalize(source);
    let split = title_page::extract(&doc);

    let mut builder = ElementBuilder::new();
    let mut lines = split.body.split('\n').enumerate().peekable();
    while let Some((idx, line)) = lines.next() {
        let next = lines.peek().map(|&(_, l)| l);
        builder.push(idx + 1 + split.line_offset, line, next, sink);
    }

    let elements = builder.finish();
    log::debug!(
        "parsed {} elements, {} title page entries",
        elements.len(),
        split.title_page.len()
    );
    Document::new(split.title_page, elements)
}
