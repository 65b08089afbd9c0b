/*!
 * Scene and block segmentation.
 *
 * This module turns preprocessed lines into an ordered list of scenes, each
 * holding typed content blocks. Classification runs as a small state machine
 * over the lines: each line is matched top-down against scene header, blank,
 * speaker, parenthetical, trailing-dialogue, and action rules, with the type
 * of the previous non-blank line as context. Blocks derive their sentence
 * list when they close.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::StructureError;
use crate::line_rules;

// Sentence boundaries; delimiters are discarded by the split
static SENTENCE_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").unwrap());

/// Kind of a content block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Scene description and stage direction
    Action,
    /// One speaker turn, parentheticals included
    Dialogue,
}

/// A contiguous run of uniformly classified content lines within a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Whether this is action or dialogue content
    pub kind: BlockKind,

    /// Content lines; for dialogue, the speaker line is not included
    pub lines: Vec<String>,

    /// Speaker name (dialogue blocks only)
    pub speaker: Option<String>,

    /// Sentences derived from the content lines when the block closed
    pub sentences: Vec<String>,
}

impl Block {
    fn action(first_line: String) -> Self {
        Self {
            kind: BlockKind::Action,
            lines: vec![first_line],
            speaker: None,
            sentences: Vec::new(),
        }
    }

    fn dialogue(speaker: String) -> Self {
        Self {
            kind: BlockKind::Dialogue,
            lines: Vec::new(),
            speaker: Some(speaker),
            sentences: Vec::new(),
        }
    }

    /// Derives the sentence list: content lines joined with single spaces,
    /// split on `.` `!` `?`, fragments trimmed, empties dropped.
    fn finalize(&mut self) {
        let full_text = self.lines.join(" ");
        self.sentences = SENTENCE_SPLIT_REGEX
            .split(&full_text)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect();
    }
}

/// A screenplay scene: one header line plus everything up to the next header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Zero-based index in assignment order
    pub index: usize,

    /// The scene-header line
    pub header: String,

    /// All raw lines of the scene, header included
    pub raw_lines: Vec<String>,

    /// Typed content blocks in order of appearance
    pub blocks: Vec<Block>,
}

impl Scene {
    fn new(index: usize, header: String) -> Self {
        Self {
            index,
            header: header.clone(),
            raw_lines: vec![header],
            blocks: Vec::new(),
        }
    }
}

// Context for the trailing-dialogue rule: the type of the previous non-blank
// line. Blank lines close blocks but leave this untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastLineKind {
    Speaker,
    Parenthetical,
    Dialogue,
    Action,
}

/// Segments preprocessed lines into scenes and typed blocks.
///
/// Classification of each line, first match wins: scene header, content
/// before any scene (error), blank, speaker, parenthetical, dialogue
/// continuation, action.
pub fn segment_scenes(lines: &[String]) -> Result<Vec<Scene>, StructureError> {
    let mut scenes: Vec<Scene> = Vec::new();
    let mut current_block: Option<Block> = None;
    let mut last_non_blank: Option<LastLineKind> = None;

    // Closes the open block into the open scene, deriving its sentences
    fn finalize_block(scenes: &mut [Scene], current_block: &mut Option<Block>) {
        if let Some(mut block) = current_block.take() {
            block.finalize();
            if let Some(scene) = scenes.last_mut() {
                scene.blocks.push(block);
            }
        }
    }

    for line in lines {
        if line_rules::is_scene_header(line) {
            finalize_block(&mut scenes, &mut current_block);
            let index = scenes.len();
            scenes.push(Scene::new(index, line.clone()));
            last_non_blank = None;
            continue;
        }

        let Some(scene) = scenes.last_mut() else {
            if line.is_empty() {
                continue;
            }
            return Err(StructureError::ContentBeforeFirstHeader { line: line.clone() });
        };

        scene.raw_lines.push(line.clone());

        if line.is_empty() {
            // Blank closes the block but does not update the non-blank context
            finalize_block(&mut scenes, &mut current_block);
        } else if line_rules::is_speaker_line(line) {
            finalize_block(&mut scenes, &mut current_block);
            current_block = Some(Block::dialogue(line.clone()));
            last_non_blank = Some(LastLineKind::Speaker);
        } else if line_rules::is_parenthetical(line) {
            // The validator guarantees parentheticals only follow speakers,
            // so an open dialogue block is the only live case
            if let Some(block) = current_block.as_mut() {
                if block.kind == BlockKind::Dialogue {
                    block.lines.push(line.clone());
                }
            }
            last_non_blank = Some(LastLineKind::Parenthetical);
        } else if matches!(
            last_non_blank,
            Some(LastLineKind::Speaker) | Some(LastLineKind::Parenthetical)
        ) {
            if let Some(block) = current_block.as_mut() {
                if block.kind == BlockKind::Dialogue {
                    block.lines.push(line.clone());
                }
            }
            last_non_blank = Some(LastLineKind::Dialogue);
        } else {
            if current_block
                .as_ref()
                .is_some_and(|block| block.kind == BlockKind::Dialogue)
            {
                finalize_block(&mut scenes, &mut current_block);
            }
            match current_block.as_mut() {
                None => current_block = Some(Block::action(line.clone())),
                Some(block) => block.lines.push(line.clone()),
            }
            last_non_blank = Some(LastLineKind::Action);
        }
    }

    finalize_block(&mut scenes, &mut current_block);

    if scenes.is_empty() {
        return Err(StructureError::NoScenesDetected);
    }

    Ok(scenes)
}
