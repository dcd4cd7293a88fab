use std::sync::LazyLock;

use regex::Regex;

use super::model::{IDEA_COUNT, MAX_IDEA_CHARS, MIN_IDEA_CHARS};

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").expect("valid ordinal pattern"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s*").expect("valid bullet pattern"));

/// Turns free provider text into at most `IDEA_COUNT` ideas.
///
/// Markers are stripped from the line as written, so an indented `  1. x` keeps its
/// number. Lengths are counted in chars. Returns an empty list when nothing
/// qualifies; the caller treats that as a signal to fall back.
pub fn parse_ideas(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(clean_line)
        .filter(|idea| {
            let len = idea.chars().count();
            len > MIN_IDEA_CHARS && len < MAX_IDEA_CHARS
        })
        .take(IDEA_COUNT)
        .collect()
}

fn clean_line(line: &str) -> String {
    let line = ORDINAL.replace(line, "");
    let line = BULLET.replace(&line, "");
    line.trim().to_string()
}
