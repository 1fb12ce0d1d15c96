//! Seed content tables for item generation
//!
//! The full chord/scale/progression databases live outside this crate; the
//! generator only needs a small vocabulary with semitone formulas so it can
//! render scheduled skills into questions and fabricate fill items.

use super::models::Difficulty;

/// Pitch-class spellings used when naming generated notes
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Keys offered for key-dependent fill items
pub const KEYS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// MIDI pitch of the octave generated items are rooted in (C4)
pub const ROOT_OCTAVE_BASE: i32 = 60;

pub struct ChordQuality {
    pub symbol: &'static str,
    pub display: &'static str,
    /// Semitone offsets from the root
    pub intervals: &'static [i32],
    pub difficulty: Difficulty,
}

pub const CHORDS: &[ChordQuality] = &[
    ChordQuality { symbol: "maj", display: "Major Triad", intervals: &[0, 4, 7], difficulty: Difficulty::Beginner },
    ChordQuality { symbol: "min", display: "Minor Triad", intervals: &[0, 3, 7], difficulty: Difficulty::Beginner },
    ChordQuality { symbol: "dim", display: "Diminished Triad", intervals: &[0, 3, 6], difficulty: Difficulty::Intermediate },
    ChordQuality { symbol: "aug", display: "Augmented Triad", intervals: &[0, 4, 8], difficulty: Difficulty::Intermediate },
    ChordQuality { symbol: "maj7", display: "Major 7th", intervals: &[0, 4, 7, 11], difficulty: Difficulty::Intermediate },
    ChordQuality { symbol: "m7", display: "Minor 7th", intervals: &[0, 3, 7, 10], difficulty: Difficulty::Intermediate },
    ChordQuality { symbol: "7", display: "Dominant 7th", intervals: &[0, 4, 7, 10], difficulty: Difficulty::Intermediate },
    ChordQuality { symbol: "m7b5", display: "Half-Diminished 7th", intervals: &[0, 3, 6, 10], difficulty: Difficulty::Advanced },
    ChordQuality { symbol: "dim7", display: "Diminished 7th", intervals: &[0, 3, 6, 9], difficulty: Difficulty::Advanced },
];

pub struct IntervalKind {
    pub name: &'static str,
    pub semitones: i32,
    pub difficulty: Difficulty,
}

pub const INTERVALS: &[IntervalKind] = &[
    IntervalKind { name: "Minor 2nd", semitones: 1, difficulty: Difficulty::Beginner },
    IntervalKind { name: "Major 2nd", semitones: 2, difficulty: Difficulty::Beginner },
    IntervalKind { name: "Minor 3rd", semitones: 3, difficulty: Difficulty::Beginner },
    IntervalKind { name: "Major 3rd", semitones: 4, difficulty: Difficulty::Beginner },
    IntervalKind { name: "Perfect 4th", semitones: 5, difficulty: Difficulty::Beginner },
    IntervalKind { name: "Tritone", semitones: 6, difficulty: Difficulty::Intermediate },
    IntervalKind { name: "Perfect 5th", semitones: 7, difficulty: Difficulty::Beginner },
    IntervalKind { name: "Minor 6th", semitones: 8, difficulty: Difficulty::Intermediate },
    IntervalKind { name: "Major 6th", semitones: 9, difficulty: Difficulty::Intermediate },
    IntervalKind { name: "Minor 7th", semitones: 10, difficulty: Difficulty::Intermediate },
    IntervalKind { name: "Major 7th", semitones: 11, difficulty: Difficulty::Advanced },
    IntervalKind { name: "Octave", semitones: 12, difficulty: Difficulty::Beginner },
];

pub struct ScaleType {
    pub name: &'static str,
    /// Semitone offsets from the tonic
    pub steps: &'static [i32],
    pub difficulty: Difficulty,
}

pub const SCALES: &[ScaleType] = &[
    ScaleType { name: "major", steps: &[0, 2, 4, 5, 7, 9, 11], difficulty: Difficulty::Beginner },
    ScaleType { name: "natural minor", steps: &[0, 2, 3, 5, 7, 8, 10], difficulty: Difficulty::Beginner },
    ScaleType { name: "harmonic minor", steps: &[0, 2, 3, 5, 7, 8, 11], difficulty: Difficulty::Intermediate },
    ScaleType { name: "dorian", steps: &[0, 2, 3, 5, 7, 9, 10], difficulty: Difficulty::Intermediate },
    ScaleType { name: "mixolydian", steps: &[0, 2, 4, 5, 7, 9, 10], difficulty: Difficulty::Intermediate },
    ScaleType { name: "lydian", steps: &[0, 2, 4, 6, 7, 9, 11], difficulty: Difficulty::Advanced },
];

pub struct ProgressionPattern {
    pub name: &'static str,
    /// Semitone offsets of each chord root from the tonic
    pub degrees: &'static [i32],
    pub difficulty: Difficulty,
}

pub const PROGRESSIONS: &[ProgressionPattern] = &[
    ProgressionPattern { name: "I-IV-V", degrees: &[0, 5, 7], difficulty: Difficulty::Beginner },
    ProgressionPattern { name: "ii-V-I", degrees: &[2, 7, 0], difficulty: Difficulty::Intermediate },
    ProgressionPattern { name: "I-vi-ii-V", degrees: &[0, 9, 2, 7], difficulty: Difficulty::Intermediate },
    ProgressionPattern { name: "I-V-vi-IV", degrees: &[0, 7, 9, 5], difficulty: Difficulty::Beginner },
    ProgressionPattern { name: "iii-vi-ii-V", degrees: &[4, 9, 2, 7], difficulty: Difficulty::Advanced },
];

pub fn chord(symbol: &str) -> Option<&'static ChordQuality> {
    CHORDS.iter().find(|c| c.symbol == symbol)
}

pub fn interval(name: &str) -> Option<&'static IntervalKind> {
    INTERVALS.iter().find(|i| i.name == name)
}

pub fn scale(name: &str) -> Option<&'static ScaleType> {
    SCALES.iter().find(|s| s.name == name)
}

pub fn progression(name: &str) -> Option<&'static ProgressionPattern> {
    PROGRESSIONS.iter().find(|p| p.name == name)
}

/// Pitch class (0-11) of a key name, accepting sharp and flat spellings
pub fn pitch_class(key: &str) -> Option<i32> {
    let mut chars = key.chars();
    let letter = chars.next()?;
    let base = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    let shift: i32 = chars
        .map(|c| match c {
            '#' => 1,
            'b' => -1,
            _ => 0,
        })
        .sum();
    Some((base + shift).rem_euclid(12))
}

/// Sharp-spelled name of a MIDI pitch class
pub fn note_name(midi: i32) -> String {
    NOTE_NAMES[midi.rem_euclid(12) as usize].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_spellings() {
        assert_eq!(pitch_class("C"), Some(0));
        assert_eq!(pitch_class("C#"), Some(1));
        assert_eq!(pitch_class("Db"), Some(1));
        assert_eq!(pitch_class("Eb"), Some(3));
        assert_eq!(pitch_class("B"), Some(11));
        assert_eq!(pitch_class("Cb"), Some(11));
        assert_eq!(pitch_class("X"), None);
    }

    #[test]
    fn test_chord_lookup() {
        let maj7 = chord("maj7").unwrap();
        assert_eq!(maj7.intervals, &[0, 4, 7, 11]);
        assert!(chord("sus13").is_none());
    }

    #[test]
    fn test_interval_semitones() {
        assert_eq!(interval("Perfect 5th").unwrap().semitones, 7);
        assert_eq!(interval("Octave").unwrap().semitones, 12);
    }
}
