//! Location line grammar, compiled from the room's player names.
//!
//! A sphere line reads `<location (Player)>` optionally followed by `: <unlock>`.
//! The location is captured lazily up to the first parenthetical that holds exactly
//! one known player name, so qualifiers such as `Cave (Upper) (Alice)` stay part of
//! the key. Names are escaped and matched case-sensitively; the line must match in
//! full.

use regex::Regex;

use crate::types::errors::GrammarError;

/// Compiled matcher for `key (Player): value` lines.
#[derive(Debug, Clone)]
pub struct LineGrammar {
    pattern: Regex,
}

/// Captured pieces of a grammar line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationLine {
    /// Location text up to and including the player parenthetical, trimmed.
    pub key: String,
    /// Unlock text after the colon, trimmed; empty when absent.
    pub value: String,
}

impl LineGrammar {
    /// Match a full line. `None` means the line is outside the grammar.
    pub fn match_line(&self, line: &str) -> Option<LocationLine> {
        let caps = self.pattern.captures(line)?;
        let key = caps.name("key")?.as_str().trim().to_string();
        let value = caps
            .name("value")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        Some(LocationLine { key, value })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Build the line grammar for a set of player display names.
///
/// Names are used verbatim; empty names are ignored. The alternation is sorted
/// so the same roster always compiles to the same pattern.
pub fn build_line_grammar<I, S>(players: I) -> Result<LineGrammar, GrammarError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = players
        .into_iter()
        .map(|p| p.as_ref().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    if names.is_empty() {
        return Err(GrammarError::NoPlayers);
    }

    names.sort();
    names.dedup();

    let alternatives = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(
        r"^(?P<key>.+?\((?:{alternatives})\))(?:\s*:\s*(?P<value>.+))?$"
    );

    Ok(LineGrammar {
        pattern: Regex::new(&pattern)?,
    })
}

#[cfg(test)]
#[path = "tests/grammar_tests.rs"]
mod tests;
