//! String similarity primitives on normalized names.
//!
//! Every function returns an integer percentage in `0..=100` built on the Indel
//! ratio `2 * LCS / (len_a + len_b)`, counted in chars and rounded half to even.
//! An empty side always scores 0 so an item that normalizes to nothing never
//! matches everything.

use std::collections::BTreeSet;

use super::normalizer::tokenize;

pub type SimilarityFn = fn(&str, &str) -> u8;

/// The similarity functions combined by [`best_similarity`], in evaluation order.
pub const SIMILARITY_FNS: [SimilarityFn; 4] =
    [ratio, partial_ratio, token_set_ratio, token_sort_ratio];

const PERFECT: u8 = 100;

/// Length of the longest common subsequence of `a` and `b`.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

fn indel_ratio(a: &[char], b: &[char]) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let total = (a.len() + b.len()) as f64;
    let score = 200.0 * lcs_len(a, b) as f64 / total;
    score.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Whole-string similarity.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    indel_ratio(&a, &b)
}

/// Best similarity of the shorter string against every alignment inside the longer,
/// including windows cut off at either end.
///
/// `master` against `aster sword` aligns with the clipped prefix `aster` → 91.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    if a.len() == b.len() {
        return aligned_ratio(&a, &b).max(aligned_ratio(&b, &a));
    }
    if a.len() < b.len() {
        aligned_ratio(&a, &b)
    } else {
        aligned_ratio(&b, &a)
    }
}

/// Score `needle` against the clipped prefixes, full-width windows and clipped
/// suffixes of `haystack`. Requires `needle.len() <= haystack.len()`.
fn aligned_ratio(needle: &[char], haystack: &[char]) -> u8 {
    let width = needle.len();
    let len = haystack.len();

    let prefixes = (1..width).map(|end| &haystack[..end]);
    let windows = haystack.windows(width);
    let suffixes = (len - width + 1..len).map(|start| &haystack[start..]);

    let mut best = 0;
    for candidate in prefixes.chain(windows).chain(suffixes) {
        best = best.max(indel_ratio(needle, candidate));
        if best == PERFECT {
            break;
        }
    }
    best
}

/// Order-insensitive comparison of sorted tokens (duplicates count).
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(&word_chars(a)), &sorted_tokens(&word_chars(b)))
}

/// Order- and count-insensitive comparison built from the shared token set.
///
/// Compares the sorted intersection against intersection + each side's leftovers,
/// and the two extended forms against each other.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let a = word_chars(a);
    let b = word_chars(b);
    let left: BTreeSet<&str> = tokenize(&a).into_iter().collect();
    let right: BTreeSet<&str> = tokenize(&b).into_iter().collect();

    let shared = join(left.intersection(&right).copied());
    let left_rest = join(left.difference(&right).copied());
    let right_rest = join(right.difference(&left).copied());

    let left_full = format!("{shared} {left_rest}").trim().to_string();
    let right_full = format!("{shared} {right_rest}").trim().to_string();

    [
        ratio(&shared, &left_full),
        ratio(&shared, &right_full),
        ratio(&left_full, &right_full),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

/// Maximum over [`SIMILARITY_FNS`], stopping early on a perfect score.
pub fn best_similarity(a: &str, b: &str) -> u8 {
    let mut best = 0;
    for similarity in SIMILARITY_FNS {
        let score = similarity(a, b);
        if score == PERFECT {
            return PERFECT;
        }
        best = best.max(score);
    }
    best
}

/// Token scorers only see letters and digits: everything else splits words.
fn word_chars(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens = tokenize(text);
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "tests/similarity_tests.rs"]
mod tests;
