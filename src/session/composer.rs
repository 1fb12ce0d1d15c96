//! Session composition
//!
//! Builds a bounded, shuffled, duplicate-free practice session from three
//! sources: the scheduler's due queue, a weak-area report, and recently
//! studied topics, backfilled with random items when any source runs short.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::scheduler::{SchedulerStore, SkillId};

use super::generator::{item_for_skill, random_skill};
use super::models::PracticeItem;

/// Items per composed session
pub const SESSION_SIZE: usize = 15;

/// Accuracy below which a skill counts as a weak area
pub const WEAKNESS_THRESHOLD: f32 = 0.75;

/// Supplies skills ranked by ascending accuracy, weakest first
pub trait WeakAreaSource {
    fn weak_areas(&self, threshold: f32) -> Vec<SkillId>;
}

/// Supplies recently studied curriculum topics, most recent first
pub trait RecentTopicSource {
    fn recently_studied_topics(&self, limit: usize) -> Vec<SkillId>;
}

/// Composes practice sessions from scheduler state and external signals
pub struct SessionComposer {
    session_size: usize,
    weakness_threshold: f32,
}

impl SessionComposer {
    pub fn new() -> Self {
        Self {
            session_size: SESSION_SIZE,
            weakness_threshold: WEAKNESS_THRESHOLD,
        }
    }

    /// Intended share of each source: 60% due, 25% weak, the rest recent
    fn targets(&self) -> (usize, usize, usize) {
        let due = (self.session_size as f32 * 0.6).round() as usize;
        let weak = (self.session_size as f32 * 0.25).round() as usize;
        let recent = self.session_size - due - weak;
        (due, weak, recent)
    }

    /// Build one practice session
    ///
    /// Always returns exactly `SESSION_SIZE` items with unique ids, in
    /// shuffled order. Skills the seed catalog cannot render are skipped.
    pub fn generate_session(
        &self,
        store: &SchedulerStore,
        weak: &dyn WeakAreaSource,
        recent: &dyn RecentTopicSource,
    ) -> Vec<PracticeItem> {
        let mut rng = thread_rng();
        let mut chosen: HashSet<SkillId> = HashSet::new();
        let mut items: Vec<PracticeItem> = Vec::with_capacity(self.session_size);

        let (due_target, weak_target, recent_target) = self.targets();

        // Due skills, most overdue first
        for (skill, _) in store.due_records() {
            if items.len() >= due_target {
                break;
            }
            if let Some(item) = item_for_skill(skill, &mut rng) {
                if chosen.insert(skill.clone()) {
                    items.push(item);
                }
            }
        }

        // Weak areas, weakest first, skipping skills already picked
        let mut weak_count = 0;
        for skill in weak.weak_areas(self.weakness_threshold) {
            if weak_count >= weak_target {
                break;
            }
            if chosen.contains(&skill) {
                continue;
            }
            if let Some(item) = item_for_skill(&skill, &mut rng) {
                chosen.insert(skill);
                items.push(item);
                weak_count += 1;
            }
        }

        // Recently studied topics
        let mut recent_count = 0;
        for skill in recent.recently_studied_topics(recent_target) {
            if recent_count >= recent_target {
                break;
            }
            if chosen.contains(&skill) {
                continue;
            }
            if let Some(item) = item_for_skill(&skill, &mut rng) {
                chosen.insert(skill);
                items.push(item);
                recent_count += 1;
            }
        }

        // Backfill with random items across all four practice types
        let mut attempts = 0;
        while items.len() < self.session_size {
            let skill = random_skill(&mut rng);
            attempts += 1;
            // The random vocabulary is far larger than a session, so a
            // fresh skill turns up quickly; the cap only guards the
            // degenerate case of a nearly-exhausted catalog.
            if !chosen.contains(&skill) || attempts > 1000 {
                if let Some(item) = item_for_skill(&skill, &mut rng) {
                    chosen.insert(skill);
                    items.push(item);
                }
            }
        }

        items.shuffle(&mut rng);
        items
    }
}

impl Default for SessionComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::PracticeMode;
    use crate::session::catalog;
    use crate::session::models::QuickPracticeType;
    use std::collections::HashSet;

    struct NoSignals;

    impl WeakAreaSource for NoSignals {
        fn weak_areas(&self, _threshold: f32) -> Vec<SkillId> {
            Vec::new()
        }
    }

    impl RecentTopicSource for NoSignals {
        fn recently_studied_topics(&self, _limit: usize) -> Vec<SkillId> {
            Vec::new()
        }
    }

    struct FixedSkills(Vec<SkillId>);

    impl WeakAreaSource for FixedSkills {
        fn weak_areas(&self, _threshold: f32) -> Vec<SkillId> {
            self.0.clone()
        }
    }

    impl RecentTopicSource for FixedSkills {
        fn recently_studied_topics(&self, limit: usize) -> Vec<SkillId> {
            self.0.iter().take(limit).cloned().collect()
        }
    }

    fn empty_store() -> (SchedulerStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = SchedulerStore::new(dir.path().to_path_buf()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_session_has_exactly_fifteen_unique_items() {
        let (store, _dir) = empty_store();
        let composer = SessionComposer::new();

        let session = composer.generate_session(&store, &NoSignals, &NoSignals);

        assert_eq!(session.len(), SESSION_SIZE);
        let ids: HashSet<_> = session.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), SESSION_SIZE);
        for item in &session {
            assert!(!item.question.is_empty());
        }
    }

    #[test]
    fn test_interval_items_are_semitone_correct() {
        let (store, _dir) = empty_store();
        let composer = SessionComposer::new();

        // Random backfill produces interval items often enough over a few runs
        for _ in 0..10 {
            let session = composer.generate_session(&store, &NoSignals, &NoSignals);
            for item in session {
                if item.practice_type != QuickPracticeType::IntervalBuilding {
                    continue;
                }
                assert_eq!(item.correct_notes.len(), 2);
                let root = item.correct_notes[0].midi;
                let target = item.correct_notes[1].midi;
                assert_ne!(root, target);

                let expected = catalog::interval(&item.display_name).unwrap().semitones;
                assert_eq!((target - root).rem_euclid(12), expected.rem_euclid(12));
            }
        }
    }

    #[test]
    fn test_due_skills_appear_in_session() {
        let (mut store, _dir) = empty_store();
        let skill = SkillId::keyed(PracticeMode::Chord, "maj7", "C");
        store.schedule_for(&skill);

        let composer = SessionComposer::new();
        let session = composer.generate_session(&store, &NoSignals, &NoSignals);

        let matches = session
            .iter()
            .filter(|i| i.display_name == "Cmaj7")
            .count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_weak_skill_not_duplicated_when_also_due() {
        let (mut store, _dir) = empty_store();
        let skill = SkillId::keyed(PracticeMode::Chord, "m7", "F");
        store.schedule_for(&skill);

        let weak = FixedSkills(vec![skill.clone()]);
        let composer = SessionComposer::new();
        let session = composer.generate_session(&store, &weak, &NoSignals);

        assert_eq!(session.len(), SESSION_SIZE);
        let matches = session.iter().filter(|i| i.display_name == "Fm7").count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_weak_and_recent_skills_included() {
        let (store, _dir) = empty_store();
        let weak = FixedSkills(vec![SkillId::keyed(PracticeMode::Scale, "dorian", "D")]);
        let recent = FixedSkills(vec![SkillId::keyless(PracticeMode::Interval, "Major 3rd")]);

        let composer = SessionComposer::new();
        let session = composer.generate_session(&store, &weak, &recent);

        assert!(session.iter().any(|i| i.display_name == "D dorian"));
        assert!(session.iter().any(|i| i.display_name == "Major 3rd"));
    }

    #[test]
    fn test_unrenderable_skills_are_skipped() {
        let (store, _dir) = empty_store();
        let weak = FixedSkills(vec![SkillId::keyed(PracticeMode::Chord, "nonsense", "C")]);

        let composer = SessionComposer::new();
        let session = composer.generate_session(&store, &weak, &NoSignals);

        assert_eq!(session.len(), SESSION_SIZE);
        assert!(!session.iter().any(|i| i.display_name.contains("nonsense")));
    }

    #[test]
    fn test_successive_sessions_are_not_identical() {
        let (store, _dir) = empty_store();
        let composer = SessionComposer::new();

        let first: Vec<String> = composer
            .generate_session(&store, &NoSignals, &NoSignals)
            .into_iter()
            .map(|i| i.display_name)
            .collect();
        let second: Vec<String> = composer
            .generate_session(&store, &NoSignals, &NoSignals)
            .into_iter()
            .map(|i| i.display_name)
            .collect();

        assert_ne!(first, second);
    }

    #[test]
    fn test_share_targets_sum_to_session_size() {
        let composer = SessionComposer::new();
        let (due, weak, recent) = composer.targets();
        assert_eq!(due, 9);
        assert_eq!(weak, 4);
        assert_eq!(recent, 2);
        assert_eq!(due + weak + recent, SESSION_SIZE);
    }
}
