//! Playthrough block extraction.
//!
//! Isolates the `Playthrough:` section of a spoiler log. Everything before the
//! marker is ignored; after it, sphere headers (`<digits> : {`) open entries whose
//! braces are tracked line by line until they balance. The first non-blank line
//! outside an open entry that is not another header ends the section.

use regex::Regex;
use std::sync::LazyLock;

/// Literal line (after trimming) that starts the playthrough section.
pub const PLAYTHROUGH_MARKER: &str = "Playthrough:";

/// `<digits> : {` with flexible spacing around the colon.
pub(crate) static RE_SPHERE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*:\s*\{\s*$").expect("Invalid regex"));

/// Extract the playthrough block from a line-oriented document.
///
/// Returns an empty vec when the marker never appears. Retained lines keep their
/// leading indentation but lose trailing whitespace; blank lines are dropped.
pub fn extract_playthrough_block<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut in_section = false;
    let mut brace_depth: i64 = 0;
    let mut body = Vec::new();

    for line in lines {
        let raw = line.as_ref().trim_end();
        let stripped = raw.trim();

        if !in_section {
            if stripped == PLAYTHROUGH_MARKER {
                in_section = true;
            }
            continue;
        }

        if stripped.is_empty() {
            continue;
        }

        if RE_SPHERE_HEADER.is_match(raw) {
            body.push(raw.to_string());
            brace_depth = 1;
            continue;
        }

        if brace_depth > 0 {
            body.push(raw.to_string());
            brace_depth += count_char(raw, '{');
            brace_depth -= count_char(raw, '}');
            continue;
        }

        break;
    }

    if in_section {
        log::debug!("Playthrough block: {} line(s) retained", body.len());
    } else {
        log::debug!("Playthrough marker not found; no spheres to parse");
    }

    body
}

fn count_char(line: &str, needle: char) -> i64 {
    line.chars().filter(|c| *c == needle).count() as i64
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
