/*!
 * Shared line-classification primitives.
 *
 * Both the validator and the segmenter classify raw script lines, and the
 * two stages must agree exactly on what counts as a scene header, a speaker
 * candidate, or a parenthetical. Every classification test lives here as a
 * pure function so the stages cannot drift apart.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length, in characters, of a speaker line.
pub const SPEAKER_MAX_LEN: usize = 40;

/// Punctuation a speaker line must not end with.
pub const SPEAKER_FORBIDDEN_TRAILING: [char; 6] = ['.', ',', '!', '?', ':', ';'];

// Scene headers start with INT. or EXT., case-sensitive, anchored at line start
static SCENE_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(INT\.|EXT\.)").unwrap()
});

/// Whether the line carries the scene-header prefix (`INT.` / `EXT.` at the
/// start of the line). This is the validator's header test; the segmenter
/// additionally requires the line to be fully upper-case.
pub fn has_scene_header_prefix(line: &str) -> bool {
    SCENE_HEADER_REGEX.is_match(line)
}

/// Whether the line is fully upper-case: it contains at least one cased
/// character and no lower-case character. Digits, punctuation, and spaces
/// carry no case and are ignored, so `"BOB: HELLO THERE"` qualifies while
/// `"123"` does not.
pub fn is_fully_uppercase(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// The segmenter's scene-header test: fully upper-case with the header prefix.
pub fn is_scene_header(line: &str) -> bool {
    is_fully_uppercase(line) && has_scene_header_prefix(line)
}

/// The segmenter's speaker test: fully upper-case and at most
/// [`SPEAKER_MAX_LEN`] characters.
pub fn is_speaker_line(line: &str) -> bool {
    is_fully_uppercase(line) && line.chars().count() <= SPEAKER_MAX_LEN
}

/// Whether a speaker candidate passes the validator's sanity rules:
/// non-empty, at most [`SPEAKER_MAX_LEN`] characters, and no forbidden
/// trailing punctuation.
pub fn is_valid_speaker_candidate(line: &str) -> bool {
    let len = line.chars().count();
    if len == 0 || len > SPEAKER_MAX_LEN {
        return false;
    }
    match line.chars().last() {
        Some(c) => !SPEAKER_FORBIDDEN_TRAILING.contains(&c),
        None => false,
    }
}

/// The segmenter's parenthetical test: starts with `(` and ends with `)`.
pub fn is_parenthetical(line: &str) -> bool {
    line.starts_with('(') && line.ends_with(')')
}
