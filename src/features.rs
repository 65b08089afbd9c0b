/*!
 * Per-scene structural feature extraction.
 *
 * Computes the fixed set of raw structural metrics for each scene, strictly
 * from that scene's blocks and raw lines. No cross-scene computation happens
 * here; normalization is a separate stage.
 */

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::segmenter::{BlockKind, Scene};

/// Raw structural metrics of one scene. Keys are fixed and exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFeatures {
    /// Total raw lines, header included
    pub lines: usize,
    /// Total whitespace-split tokens across non-blank raw lines
    pub words: usize,
    /// Total sentences across all blocks
    pub sentences: usize,
    /// Content-line count summed over action blocks
    pub action_lines: usize,
    /// Content-line count summed over dialogue blocks, speaker lines excluded
    pub dialogue_lines: usize,
    /// Number of dialogue blocks
    pub dialogue_turns: usize,
    /// Distinct non-empty speaker names
    pub speakers: usize,
    /// Scene-wide words divided by sentence count
    pub avg_sentence_length: f64,
    /// Largest token count of any single sentence
    pub max_sentence_length: usize,
    /// Population variance of per-sentence token counts
    pub sentence_variance: f64,
    /// Speaker changes between consecutive dialogue blocks
    pub speaker_switch_count: usize,
    /// DialogueLines / (ActionLines + 1)
    pub dialogue_action_ratio: f64,
    /// ActionLines / action-block count
    pub avg_action_block_length: f64,
    /// Longest run of consecutive non-blank raw lines
    pub max_continuous_lines: usize,
    /// Blank-line count over total lines
    pub whitespace_ratio: f64,
    /// DialogueTurns × AvgSentenceLength
    pub auditory_load: f64,
}

/// Computes one [`SceneFeatures`] per scene, in scene order.
pub fn extract_scene_features(scenes: &[Scene]) -> Vec<SceneFeatures> {
    let features: Vec<SceneFeatures> = scenes.iter().map(extract_one).collect();
    debug!("Extracted features for {} scene(s)", features.len());
    features
}

fn extract_one(scene: &Scene) -> SceneFeatures {
    let lines = scene.raw_lines.len();

    let words: usize = scene
        .raw_lines
        .iter()
        .map(|line| line.split_whitespace().count())
        .sum();

    let all_sentences: Vec<&str> = scene
        .blocks
        .iter()
        .flat_map(|block| block.sentences.iter().map(String::as_str))
        .collect();
    let sentences = all_sentences.len();

    let mut action_lines = 0usize;
    let mut dialogue_lines = 0usize;
    let mut action_block_count = 0usize;
    let mut dialogue_turns = 0usize;
    let mut unique_speakers: HashSet<&str> = HashSet::new();
    for block in &scene.blocks {
        match block.kind {
            BlockKind::Action => {
                action_lines += block.lines.len();
                action_block_count += 1;
            }
            BlockKind::Dialogue => {
                dialogue_lines += block.lines.len();
                dialogue_turns += 1;
                if let Some(speaker) = block.speaker.as_deref() {
                    if !speaker.is_empty() {
                        unique_speakers.insert(speaker);
                    }
                }
            }
        }
    }

    // Scene-wide word count over the sentence count, not a per-sentence
    // recomputation
    let avg_sentence_length = if sentences > 0 {
        words as f64 / sentences as f64
    } else {
        0.0
    };

    let sentence_lengths: Vec<usize> = all_sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    let max_sentence_length = sentence_lengths.iter().copied().max().unwrap_or(0);

    // Population variance: divide by N, zero below two sentences
    let sentence_variance = if sentences < 2 {
        0.0
    } else {
        let mean = sentence_lengths.iter().sum::<usize>() as f64 / sentences as f64;
        let sum_sq: f64 = sentence_lengths
            .iter()
            .map(|&len| {
                let d = len as f64 - mean;
                d * d
            })
            .sum();
        sum_sq / sentences as f64
    };

    // Adjacent-pair speaker changes over dialogue blocks only; action blocks
    // do not break adjacency
    let mut speaker_switch_count = 0usize;
    let mut previous_speaker: Option<&Option<String>> = None;
    for block in scene.blocks.iter().filter(|b| b.kind == BlockKind::Dialogue) {
        if let Some(previous) = previous_speaker {
            if *previous != block.speaker {
                speaker_switch_count += 1;
            }
        }
        previous_speaker = Some(&block.speaker);
    }

    let dialogue_action_ratio = dialogue_lines as f64 / (action_lines + 1) as f64;

    let avg_action_block_length = if action_block_count > 0 {
        action_lines as f64 / action_block_count as f64
    } else {
        0.0
    };

    let mut max_continuous_lines = 0usize;
    let mut current_run = 0usize;
    for line in &scene.raw_lines {
        if line.trim().is_empty() {
            max_continuous_lines = max_continuous_lines.max(current_run);
            current_run = 0;
        } else {
            current_run += 1;
        }
    }
    max_continuous_lines = max_continuous_lines.max(current_run);

    let whitespace_ratio = if lines > 0 {
        let blank_lines = scene
            .raw_lines
            .iter()
            .filter(|line| line.trim().is_empty())
            .count();
        blank_lines as f64 / lines as f64
    } else {
        0.0
    };

    let auditory_load = dialogue_turns as f64 * avg_sentence_length;

    SceneFeatures {
        lines,
        words,
        sentences,
        action_lines,
        dialogue_lines,
        dialogue_turns,
        speakers: unique_speakers.len(),
        avg_sentence_length,
        max_sentence_length,
        sentence_variance,
        speaker_switch_count,
        dialogue_action_ratio,
        avg_action_block_length,
        max_continuous_lines,
        whitespace_ratio,
        auditory_load,
    }
}
