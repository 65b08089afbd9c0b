/*!
 * Tests for script validation
 */

use scriptpulse::errors::ValidationError;
use scriptpulse::validator::validate_script;

use crate::common::script_lines;

#[test]
fn test_validate_script_withBlankOnlyLines_shouldRejectEmptyScript() {
    let lines = script_lines("\n   \n\t\n");
    assert_eq!(validate_script(&lines), Err(ValidationError::EmptyScript));
}

#[test]
fn test_validate_script_withNoHeaders_shouldRejectMissingHeaders() {
    let lines = script_lines("A quiet morning.\nNothing happens.");
    assert_eq!(validate_script(&lines), Err(ValidationError::NoSceneHeaders));
}

#[test]
fn test_validate_script_withSpeakerBeforeHeader_shouldReject() {
    let lines = script_lines("BOB\nINT. KITCHEN - DAY");
    assert_eq!(validate_script(&lines), Err(ValidationError::SpeakerBeforeHeader));
}

#[test]
fn test_validate_script_withTrailingExclamationSpeaker_shouldReject() {
    let lines = script_lines("INT. KITCHEN - DAY\nBOB!\nHello.");
    assert_eq!(
        validate_script(&lines),
        Err(ValidationError::InvalidSpeakerLine { line: "BOB!".to_string() })
    );
}

#[test]
fn test_validate_script_withOverlongSpeaker_shouldReject() {
    let shouting = "A".repeat(41);
    let lines = vec!["INT. KITCHEN - DAY".to_string(), shouting.clone()];
    assert_eq!(
        validate_script(&lines),
        Err(ValidationError::InvalidSpeakerLine { line: shouting })
    );
}

#[test]
fn test_validate_script_withColonInsideSpeaker_shouldAccept() {
    // Trailing punctuation is forbidden; internal punctuation is not
    let lines = script_lines("INT. KITCHEN - DAY\nBOB: HELLO THERE\nHello Bob.");
    assert_eq!(validate_script(&lines), Ok(()));
}

#[test]
fn test_validate_script_withUnterminatedParenthetical_shouldReject() {
    let lines = script_lines("INT. KITCHEN - DAY\nBOB\n(whisper\nHello.");
    assert_eq!(
        validate_script(&lines),
        Err(ValidationError::InvalidParenthetical { line: "(whisper".to_string() })
    );
}

#[test]
fn test_validate_script_withDanglingParenthetical_shouldReject() {
    // Valid shape but nothing speaker-like before it
    let lines = script_lines("INT. KITCHEN - DAY\nHe waits.\n(beat)");
    assert_eq!(
        validate_script(&lines),
        Err(ValidationError::InvalidParenthetical { line: "(beat)".to_string() })
    );
}

#[test]
fn test_validate_script_withBlankBetweenSpeakerAndParenthetical_shouldReject() {
    // A blank line clears the speaker context
    let lines = script_lines("INT. KITCHEN - DAY\nBOB\n\n(beat)");
    assert_eq!(
        validate_script(&lines),
        Err(ValidationError::InvalidParenthetical { line: "(beat)".to_string() })
    );
}

#[test]
fn test_validate_script_withWellFormedScript_shouldAccept() {
    let lines = crate::common::small_valid_script();
    assert_eq!(validate_script(&lines), Ok(()));
}

#[test]
fn test_validate_script_withValidInput_shouldNotMutateLines() {
    let lines = crate::common::small_valid_script();
    let before = lines.clone();
    validate_script(&lines).unwrap();
    assert_eq!(lines, before);
}
