//! Data models for composed practice sessions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scheduler::PracticeMode;

/// The question format of one practice item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickPracticeType {
    ChordSpelling,
    CadenceProgression,
    ScaleSpelling,
    IntervalBuilding,
}

impl From<PracticeMode> for QuickPracticeType {
    fn from(mode: PracticeMode) -> Self {
        match mode {
            PracticeMode::Chord => QuickPracticeType::ChordSpelling,
            PracticeMode::Cadence | PracticeMode::Progression => {
                QuickPracticeType::CadenceProgression
            }
            PracticeMode::Scale => QuickPracticeType::ScaleSpelling,
            PracticeMode::Interval => QuickPracticeType::IntervalBuilding,
        }
    }
}

/// A concrete pitch with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub name: String,
    pub midi: i32,
}

/// Coarse difficulty tag carried on each item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One question in a practice session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeItem {
    pub id: Uuid,
    pub practice_type: QuickPracticeType,
    pub question: String,
    pub display_name: String,
    /// Ordered correct-answer notes; exactly two for interval items
    pub correct_notes: Vec<Note>,
    pub difficulty: Difficulty,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
