use std::sync::OnceLock;

use regex::Regex;

/// Scene heading syntax: forced `.` headings and `INT`/`EXT`/`EST`/`I/E` slugs.
pub struct SceneHeading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSig<'a> {
    pub text: &'a str,
    pub scene_number: Option<&'a str>,
}

fn slug_regex() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| {
        Regex::new(r"(?i)^(INT|EXT|EST|I/?E)[.\-\s]").expect("Invalid scene slug regex")
    })
}

/// Trailing `#number#`, optionally followed by whitespace.
fn scene_number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"^(.*)#([^#]*?)#\s*$").expect("Invalid scene number regex"))
}

impl SceneHeading {
    pub const FORCE: char = '.';

    /// A leading `.` not followed by another `.` forces a scene heading.
    pub fn forced(line: &str) -> Option<SceneSig<'_>> {
        let mut chars = line.chars();
        if chars.next() != Some(Self::FORCE) {
            return None;
        }
        match chars.next() {
            Some(c) if c != Self::FORCE => {}
            _ => return None,
        }

        let rest = &line[Self::FORCE.len_utf8()..];
        Some(Self::split_number(rest).unwrap_or(SceneSig {
            text: rest.trim(),
            scene_number: None,
        }))
    }

    /// A line starting with a standard slug such as `INT.` or `ext -`.
    pub fn standard(line: &str) -> Option<SceneSig<'_>> {
        if !slug_regex().is_match(line) {
            return None;
        }
        Some(Self::split_number(line).unwrap_or(SceneSig {
            text: line,
            scene_number: None,
        }))
    }

    fn split_number(s: &str) -> Option<SceneSig<'_>> {
        let caps = scene_number_regex().captures(s)?;
        let text = caps.get(1)?.as_str().trim();
        let number = caps.get(2)?.as_str();
        Some(SceneSig {
            text,
            scene_number: Some(number),
        })
    }
}
