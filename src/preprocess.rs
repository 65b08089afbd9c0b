/*!
 * Deterministic whitespace normalization.
 *
 * Pure function over the line sequence: length and order are preserved, and
 * preprocessing its own output is a fixed point.
 */

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Normalizes whitespace per line: trims leading/trailing whitespace,
/// replaces internal tabs with single spaces, and collapses runs of spaces
/// into one. Case, punctuation, and content are untouched.
pub fn preprocess_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let trimmed = line.trim().replace('\t', " ");
            SPACE_RUN_REGEX.replace_all(&trimmed, " ").into_owned()
        })
        .collect()
}
