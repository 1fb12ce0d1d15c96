//! Storage for per-skill schedule records
//!
//! One JSON file holds every record:
//! ```text
//! {data-dir}/scheduler/
//! └── schedule.json   # Array of { skill, record } entries
//! ```
//!
//! The store is constructed once at application start and passed by
//! reference to every consumer; hosts with concurrent callers wrap it in
//! `Arc<Mutex<SchedulerStore>>` so updates to a skill never interleave.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::algorithm::{next_review, quality_for_answer, ReviewResult};
use super::models::{PracticeMode, ScheduleRecord, SchedulerStats, SkillId};

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, SchedulerError>;

/// On-disk shape: the map flattened into an entry list
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedEntry {
    skill: SkillId,
    record: ScheduleRecord,
}

/// Owns the mapping from skill to schedule record
pub struct SchedulerStore {
    scheduler_dir: PathBuf,
    records: HashMap<SkillId, ScheduleRecord>,
}

impl SchedulerStore {
    /// Open (or create) a store rooted at `data_dir`
    ///
    /// A corrupted schedule file is logged and treated as empty: losing
    /// review history is preferable to blocking the learner.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let scheduler_dir = data_dir.join("scheduler");
        fs::create_dir_all(&scheduler_dir)?;

        let mut store = Self {
            scheduler_dir,
            records: HashMap::new(),
        };
        store.load();
        Ok(store)
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("cadenza"))
            .ok_or(SchedulerError::DataDirNotFound)
    }

    fn schedule_path(&self) -> PathBuf {
        self.scheduler_dir.join("schedule.json")
    }

    fn load(&mut self) {
        let path = self.schedule_path();
        if !path.exists() {
            return;
        }

        let entries: Vec<PersistedEntry> = match fs::read_to_string(&path)
            .map_err(SchedulerError::from)
            .and_then(|content| Ok(serde_json::from_str(&content)?))
        {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to load schedule file, starting fresh: {}", e);
                return;
            }
        };

        self.records = entries
            .into_iter()
            .map(|entry| (entry.skill, entry.record))
            .collect();
    }

    fn persist(&self) -> Result<()> {
        let entries: Vec<PersistedEntry> = self
            .records
            .iter()
            .map(|(skill, record)| PersistedEntry {
                skill: skill.clone(),
                record: record.clone(),
            })
            .collect();

        fs::write(
            self.schedule_path(),
            serde_json::to_string_pretty(&entries)?,
        )?;
        Ok(())
    }

    // ==================== Schedule Operations ====================

    /// Get the record for a skill, creating the default record on first access
    pub fn schedule_for(&mut self, id: &SkillId) -> &ScheduleRecord {
        self.records
            .entry(id.clone())
            .or_insert_with(ScheduleRecord::new)
    }

    /// Record an answer for a skill and reschedule it
    ///
    /// The in-memory update commits before the persist runs, so a storage
    /// failure surfaces as `Err` without leaving the record half-written.
    pub fn record_result(
        &mut self,
        id: &SkillId,
        was_correct: bool,
        response_time: Option<f32>,
    ) -> Result<ScheduleRecord> {
        let record = self
            .records
            .entry(id.clone())
            .or_insert_with(ScheduleRecord::new);

        let quality = quality_for_answer(was_correct, response_time);

        let ReviewResult {
            ease_factor,
            interval_days,
            repetitions,
            due_date,
        } = next_review(record, quality);

        record.ease_factor = ease_factor;
        record.interval_days = interval_days;
        record.repetitions = repetitions;
        record.due_date = due_date;
        record.total_count += 1;
        if was_correct {
            record.correct_count += 1;
        }

        let updated = record.clone();
        self.persist()?;

        Ok(updated)
    }

    // ==================== Due Queries ====================

    /// Count due skills in one practice mode
    pub fn due_count(&self, mode: PracticeMode) -> usize {
        self.records
            .iter()
            .filter(|(skill, record)| skill.mode == mode && record.is_due())
            .count()
    }

    /// Count due skills across all modes
    pub fn total_due_count(&self) -> usize {
        self.records.values().filter(|r| r.is_due()).count()
    }

    /// All due skills, most overdue first
    pub fn due_records(&self) -> Vec<(&SkillId, &ScheduleRecord)> {
        let mut due: Vec<_> = self
            .records
            .iter()
            .filter(|(_, record)| record.is_due())
            .collect();

        due.sort_by(|a, b| a.1.due_date.cmp(&b.1.due_date));
        due
    }

    /// Read-only view of a skill's record, without creating one
    pub fn get(&self, id: &SkillId) -> Option<&ScheduleRecord> {
        self.records.get(id)
    }

    // ==================== Maintenance ====================

    /// Aggregate statistics across every tracked skill
    pub fn statistics(&self) -> SchedulerStats {
        let mut stats = SchedulerStats::default();
        stats.total_items = self.records.len();

        let mut accuracy_sum = 0.0f32;
        let mut tested = 0usize;

        for record in self.records.values() {
            if record.is_due() {
                stats.total_due += 1;
            }
            stats.total_reviews += record.total_count as u64;
            stats.total_correct += record.correct_count as u64;
            if record.total_count > 0 {
                accuracy_sum += record.accuracy();
                tested += 1;
            }
        }

        if tested > 0 {
            stats.average_accuracy = accuracy_sum / tested as f32;
        }

        stats
    }

    /// Clear every record; subsequent lookups behave as first-time creation
    pub fn reset_all(&mut self) -> Result<()> {
        self.records.clear();
        self.persist()
    }
}
