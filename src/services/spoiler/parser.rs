//! Sphere parser — turns an extracted playthrough block into a [`SphereIndex`].

use crate::services::spoiler::extract::RE_SPHERE_HEADER;
use crate::services::spoiler::grammar::LineGrammar;
use crate::types::errors::ParseError;
use crate::types::spoiler::{SphereId, SphereIndex};

/// Parse playthrough lines into spheres.
///
/// A header opens a sphere keyed by its digit token, a bare `}` closes it, and
/// every other non-blank line inside an open sphere must satisfy `grammar`.
/// Lines outside any sphere are ignored. The first grammar mismatch aborts the
/// whole parse; no partial index is returned.
pub fn parse_spheres<S: AsRef<str>>(
    block: &[S],
    grammar: &LineGrammar,
) -> Result<SphereIndex, ParseError> {
    let mut index = SphereIndex::new();
    let mut current: Option<SphereId> = None;

    for raw in block {
        let line = raw.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = RE_SPHERE_HEADER.captures(line) {
            let id = SphereId::new(&caps[1]);
            index.open(id.clone());
            current = Some(id);
            continue;
        }

        if line == "}" {
            current = None;
            continue;
        }

        let Some(id) = current.as_ref() else {
            continue;
        };

        let parsed = grammar
            .match_line(line)
            .ok_or_else(|| ParseError::GrammarMismatch {
                line: line.to_string(),
            })?;

        if let Some(sphere) = index.get_mut(id.as_str()) {
            sphere.insert(parsed.key, parsed.value);
        }
    }

    log::debug!("Parsed {} sphere(s) from playthrough block", index.len());
    Ok(index)
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
