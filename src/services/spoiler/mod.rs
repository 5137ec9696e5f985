//! Spoiler log pipeline: playthrough extraction, line grammar and sphere parsing.

pub mod extract;
pub mod grammar;
pub mod parser;

use crate::types::errors::ScoutResult;
use crate::types::spoiler::SphereIndex;

/// Run the full text pipeline: extract the playthrough, build the grammar for
/// `players`, parse the spheres.
pub fn parse_spoiler<S, I, P>(document: &[S], players: I) -> ScoutResult<SphereIndex>
where
    S: AsRef<str>,
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let block = extract::extract_playthrough_block(document);
    let grammar = grammar::build_line_grammar(players)?;
    Ok(parser::parse_spheres(&block, &grammar)?)
}
