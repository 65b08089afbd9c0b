/*!
 * Common test utilities for the scriptpulse test suite
 */

/// Splits a raw script into the newline-free line sequence the pipeline
/// expects
pub fn script_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// A small well-formed script: two scenes, dialogue and action
pub fn small_valid_script() -> Vec<String> {
    script_lines(
        "INT. KITCHEN - DAY\n\
         Bob stirs a pot of soup. Steam rises.\n\
         \n\
         BOB\n\
         (muttering)\n\
         This is never going to thicken.\n\
         \n\
         EXT. GARDEN - DAY\n\
         Alice kneels by the tomatoes.\n\
         \n\
         ALICE\n\
         Lunch ready yet?",
    )
}

/// One dense dialogue scene, reused verbatim across the strained script so
/// its heavy scenes normalize identically
fn heavy_scene() -> String {
    [
        "INT. WAR ROOM - NIGHT",
        "BOB",
        "We cannot hold the line any longer and you know it.",
        "ALICE",
        "Then we fall back to the river and we dig in there.",
        "BOB",
        "That is nine miles of open ground without cover.",
    ]
    .join("\n")
}

/// A script engineered to trip the alert logic: one light header-only scene
/// followed by ten identical dense scenes. Scenes 8, 9, and 10 are the only
/// indices where all three windows are observed above threshold.
pub fn strained_script() -> Vec<String> {
    let mut text = String::from("INT. VOID - DAY\n");
    for _ in 0..10 {
        text.push_str(&heavy_scene());
        text.push('\n');
    }
    script_lines(&text)
}
