//! Renders scheduled skills into concrete practice items
//!
//! Note math happens here: chord and scale spellings come from the catalog
//! semitone formulas, and interval items always carry exactly two notes at
//! the named semitone distance.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::scheduler::{PracticeMode, SkillId};

use super::catalog::{self, ROOT_OCTAVE_BASE};
use super::models::{Note, PracticeItem, QuickPracticeType};

fn note_at(midi: i32) -> Note {
    Note {
        name: catalog::note_name(midi),
        midi,
    }
}

/// Render a skill into a concrete question
///
/// Topics the seed catalog does not know yield `None` and are skipped by the
/// composer; the full content databases validate the vocabulary upstream.
pub fn item_for_skill<R: Rng>(skill: &SkillId, rng: &mut R) -> Option<PracticeItem> {
    match skill.mode {
        PracticeMode::Chord => {
            let quality = catalog::chord(&skill.topic)?;
            let key = skill.key.as_deref()?;
            let root = ROOT_OCTAVE_BASE + catalog::pitch_class(key)?;

            Some(PracticeItem {
                id: Uuid::new_v4(),
                practice_type: QuickPracticeType::ChordSpelling,
                question: format!("Spell the {} {} chord", key, quality.display),
                display_name: format!("{}{}", key, quality.symbol),
                correct_notes: quality.intervals.iter().map(|i| note_at(root + i)).collect(),
                difficulty: quality.difficulty,
                category: "Chords".to_string(),
                hint: Some(format!("Stack the {} formula starting on {}", quality.display, key)),
            })
        }
        PracticeMode::Interval => {
            let kind = catalog::interval(&skill.topic)?;
            let root = ROOT_OCTAVE_BASE + rng.gen_range(0..12);
            let target = root + kind.semitones;

            Some(PracticeItem {
                id: Uuid::new_v4(),
                practice_type: QuickPracticeType::IntervalBuilding,
                question: format!("Build a {} above {}", kind.name, catalog::note_name(root)),
                display_name: kind.name.to_string(),
                correct_notes: vec![note_at(root), note_at(target)],
                difficulty: kind.difficulty,
                category: "Intervals".to_string(),
                hint: Some(format!("{} semitones up", kind.semitones)),
            })
        }
        PracticeMode::Scale => {
            let scale = catalog::scale(&skill.topic)?;
            let key = skill.key.as_deref()?;
            let tonic = ROOT_OCTAVE_BASE + catalog::pitch_class(key)?;

            Some(PracticeItem {
                id: Uuid::new_v4(),
                practice_type: QuickPracticeType::ScaleSpelling,
                question: format!("Spell the {} {} scale", key, scale.name),
                display_name: format!("{} {}", key, scale.name),
                correct_notes: scale.steps.iter().map(|s| note_at(tonic + s)).collect(),
                difficulty: scale.difficulty,
                category: "Scales".to_string(),
                hint: None,
            })
        }
        PracticeMode::Cadence | PracticeMode::Progression => {
            let pattern = catalog::progression(&skill.topic)?;
            let key = skill.key.as_deref()?;
            let tonic = ROOT_OCTAVE_BASE + catalog::pitch_class(key)?;
            let category = if skill.mode == PracticeMode::Cadence {
                "Cadences"
            } else {
                "Progressions"
            };

            Some(PracticeItem {
                id: Uuid::new_v4(),
                practice_type: QuickPracticeType::CadenceProgression,
                question: format!("Play the {} progression in {}", pattern.name, key),
                display_name: format!("{} in {}", pattern.name, key),
                correct_notes: pattern.degrees.iter().map(|d| note_at(tonic + d)).collect(),
                difficulty: pattern.difficulty,
                category: category.to_string(),
                hint: Some("Chord roots, in order".to_string()),
            })
        }
    }
}

/// A uniformly random skill spanning the four practice types
pub fn random_skill<R: Rng>(rng: &mut R) -> SkillId {
    let practice_type = [
        QuickPracticeType::ChordSpelling,
        QuickPracticeType::CadenceProgression,
        QuickPracticeType::ScaleSpelling,
        QuickPracticeType::IntervalBuilding,
    ]
    .choose(rng)
    .copied()
    .unwrap();

    let key = *catalog::KEYS.choose(rng).unwrap();

    match practice_type {
        QuickPracticeType::ChordSpelling => {
            let quality = catalog::CHORDS.choose(rng).unwrap();
            SkillId::keyed(PracticeMode::Chord, quality.symbol, key)
        }
        QuickPracticeType::CadenceProgression => {
            let pattern = catalog::PROGRESSIONS.choose(rng).unwrap();
            SkillId::keyed(PracticeMode::Progression, pattern.name, key)
        }
        QuickPracticeType::ScaleSpelling => {
            let scale = catalog::SCALES.choose(rng).unwrap();
            SkillId::keyed(PracticeMode::Scale, scale.name, key)
        }
        QuickPracticeType::IntervalBuilding => {
            let kind = catalog::INTERVALS.choose(rng).unwrap();
            SkillId::keyless(PracticeMode::Interval, kind.name)
        }
    }
}
