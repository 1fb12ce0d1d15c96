//! Data models for the spaced repetition scheduler

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of drill a skill belongs to
///
/// Each mode is an independent review track: the same topic under two
/// different modes is two separate skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PracticeMode {
    Chord,
    Cadence,
    Scale,
    Interval,
    Progression,
}

impl PracticeMode {
    /// All modes, in catalog order
    pub const ALL: [PracticeMode; 5] = [
        PracticeMode::Chord,
        PracticeMode::Cadence,
        PracticeMode::Scale,
        PracticeMode::Interval,
        PracticeMode::Progression,
    ];
}

/// Identifies one reviewable unit of knowledge
///
/// `topic` names the specific item within the mode (chord quality, interval
/// name, scale type, progression pattern). `key` carries the musical key for
/// key-dependent modes and is `None` for key-independent ones (intervals).
/// The legal vocabulary is defined by the content catalogs; the scheduler
/// only cares about structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillId {
    pub mode: PracticeMode,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl SkillId {
    /// A skill in a musical key context (chords, scales, progressions)
    pub fn keyed(mode: PracticeMode, topic: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            mode,
            topic: topic.into(),
            key: Some(key.into()),
        }
    }

    /// A key-independent skill (intervals)
    pub fn keyless(mode: PracticeMode, topic: impl Into<String>) -> Self {
        Self {
            mode,
            topic: topic.into(),
            key: None,
        }
    }
}

/// Current spaced repetition state for a skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    /// SM-2 ease factor (default 2.5, floor 1.3)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f32,
    /// Days until the next review after the most recent correct answer
    #[serde(default = "default_interval_days")]
    pub interval_days: f32,
    /// Consecutive correct answers since the last failure
    #[serde(default)]
    pub repetitions: u32,
    /// When the skill is due for review
    pub due_date: DateTime<Utc>,
    /// Lifetime correct answers
    #[serde(default)]
    pub correct_count: u32,
    /// Lifetime answers
    #[serde(default)]
    pub total_count: u32,
}

fn default_ease_factor() -> f32 {
    2.5
}

fn default_interval_days() -> f32 {
    1.0
}

impl ScheduleRecord {
    /// A brand-new record, immediately due
    pub fn new() -> Self {
        Self {
            ease_factor: 2.5,
            interval_days: 1.0,
            repetitions: 0,
            due_date: Utc::now(),
            correct_count: 0,
            total_count: 0,
        }
    }

    /// Lifetime accuracy, 0.0 for an untested skill
    pub fn accuracy(&self) -> f32 {
        if self.total_count == 0 {
            0.0
        } else {
            self.correct_count as f32 / self.total_count as f32
        }
    }

    /// Check if the skill is due for review
    pub fn is_due(&self) -> bool {
        self.due_date <= Utc::now()
    }
}

impl Default for ScheduleRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate snapshot across all tracked skills
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerStats {
    pub total_items: usize,
    pub total_due: usize,
    pub total_reviews: u64,
    pub total_correct: u64,
    /// Mean per-skill accuracy over skills with at least one answer
    pub average_accuracy: f32,
}

impl Default for SchedulerStats {
    fn default() -> Self {
        Self {
            total_items: 0,
            total_due: 0,
            total_reviews: 0,
            total_correct: 0,
            average_accuracy: 0.0,
        }
    }
}
