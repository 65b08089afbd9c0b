/*!
 * Structural validation of raw script lines.
 *
 * The validator is a guard, not a parser: it walks the raw lines once and
 * rejects scripts the segmenter could not handle, using the same
 * classification primitives as the segmenter (see `line_rules`). On success
 * it returns nothing and leaves the input untouched.
 */

use log::debug;

use crate::errors::ValidationError;
use crate::line_rules;

/// Validates the raw line sequence before any processing.
///
/// Rejects scripts that are entirely blank, carry no scene header, place a
/// speaker candidate before the first header, or contain a malformed speaker
/// or parenthetical line.
pub fn validate_script(lines: &[String]) -> Result<(), ValidationError> {
    if !lines.iter().any(|line| !line.trim().is_empty()) {
        return Err(ValidationError::EmptyScript);
    }

    let mut headers_found = 0usize;
    let mut last_line_was_speaker = false;

    for line in lines {
        if line_rules::has_scene_header_prefix(line) {
            headers_found += 1;
            last_line_was_speaker = false;
            continue;
        }

        // Fully upper-case lines are speaker candidates
        if line_rules::is_fully_uppercase(line) {
            if headers_found == 0 {
                return Err(ValidationError::SpeakerBeforeHeader);
            }
            if !line_rules::is_valid_speaker_candidate(line) {
                return Err(ValidationError::InvalidSpeakerLine { line: line.clone() });
            }
            last_line_was_speaker = true;
            continue;
        }

        if line.starts_with('(') {
            // A parenthetical must be terminated and must directly follow a
            // speaker line
            if !line.ends_with(')') || !last_line_was_speaker {
                return Err(ValidationError::InvalidParenthetical { line: line.clone() });
            }
            last_line_was_speaker = false;
            continue;
        }

        // Any other line (dialogue content, action, blanks) clears the
        // speaker context
        last_line_was_speaker = false;
    }

    if headers_found == 0 {
        return Err(ValidationError::NoSceneHeaders);
    }

    debug!("Script validated: {} scene header(s) over {} line(s)", headers_found, lines.len());
    Ok(())
}
