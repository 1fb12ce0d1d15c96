//! SM-2 Spaced Repetition Algorithm
//!
//! Implementation of the SuperMemo 2 update rule, driven by answer
//! correctness and response time rather than a self-reported rating.
//!
//! Quality scores used here:
//! - 2: Incorrect answer
//! - 4: Correct, but slower than the fast-response threshold
//! - 5: Correct within the fast-response threshold (or no timing supplied)

use chrono::{DateTime, Duration, Utc};

use super::models::ScheduleRecord;

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f32 = 1.3;

/// Response time (seconds) at or under which a correct answer rates quality 5
pub const FAST_RESPONSE_SECS: f32 = 3.0;

/// Quality score assigned to an incorrect answer
const FAILED_QUALITY: i32 = 2;

/// Result of calculating the next review
#[derive(Debug, Clone)]
pub struct ReviewResult {
    pub ease_factor: f32,
    pub interval_days: f32,
    pub repetitions: u32,
    pub due_date: DateTime<Utc>,
}

/// Map an answer to an SM-2 quality score
///
/// Negative response times come from a controlled internal caller and are
/// clamped to zero rather than rejected.
pub fn quality_for_answer(was_correct: bool, response_time: Option<f32>) -> i32 {
    if !was_correct {
        return FAILED_QUALITY;
    }
    match response_time {
        Some(secs) if secs.max(0.0) > FAST_RESPONSE_SECS => 4,
        _ => 5,
    }
}

/// Calculate the next review interval and ease factor using SM-2
///
/// Correct answers (quality >= 3) grow the interval 1 -> 6 -> previous x ease,
/// using the ease factor from *before* this update so growth is strictly
/// increasing across consecutive correct answers. Incorrect answers reset
/// repetitions and interval and push the ease factor through the same
/// adjustment formula at the failed quality score.
pub fn next_review(record: &ScheduleRecord, quality: i32) -> ReviewResult {
    // Clamp quality to valid range
    let quality = quality.clamp(0, 5);

    let mut ease_factor = record.ease_factor;
    let interval_days;
    let repetitions;

    if quality >= 3 {
        repetitions = record.repetitions + 1;

        interval_days = match repetitions {
            1 => 1.0,
            2 => 6.0,
            _ => record.interval_days * ease_factor,
        };

        ease_factor = adjust_ease_factor(ease_factor, quality);
    } else {
        repetitions = 0;
        interval_days = 1.0;
        ease_factor = adjust_ease_factor(ease_factor, quality);
    }

    let due_date = Utc::now() + Duration::seconds((interval_days * 86_400.0) as i64);

    ReviewResult {
        ease_factor,
        interval_days,
        repetitions,
        due_date,
    }
}

/// EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored at 1.3
///
/// The constants are the published SM-2 values; persisted history depends on
/// them staying exactly as-is.
fn adjust_ease_factor(ease_factor: f32, quality: i32) -> f32 {
    let miss = (5 - quality) as f32;
    let adjusted = ease_factor + (0.1 - miss * (0.08 + miss * 0.02));
    adjusted.max(MIN_EASE_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_fast_correct() {
        assert_eq!(quality_for_answer(true, None), 5);
        assert_eq!(quality_for_answer(true, Some(1.2)), 5);
        assert_eq!(quality_for_answer(true, Some(3.0)), 5);
    }

    #[test]
    fn test_quality_slow_correct() {
        assert_eq!(quality_for_answer(true, Some(3.1)), 4);
        assert_eq!(quality_for_answer(true, Some(20.0)), 4);
    }

    #[test]
    fn test_quality_incorrect_ignores_timing() {
        assert_eq!(quality_for_answer(false, None), 2);
        assert_eq!(quality_for_answer(false, Some(0.5)), 2);
    }

    #[test]
    fn test_quality_negative_time_clamped() {
        assert_eq!(quality_for_answer(true, Some(-4.0)), 5);
    }

    #[test]
    fn test_first_correct_answer() {
        let record = ScheduleRecord::new();
        let result = next_review(&record, 5);

        assert_eq!(result.interval_days, 1.0);
        assert_eq!(result.repetitions, 1);
        assert!(result.ease_factor >= 2.5);
    }

    #[test]
    fn test_second_correct_answer() {
        let mut record = ScheduleRecord::new();
        record.repetitions = 1;
        record.interval_days = 1.0;

        let result = next_review(&record, 5);

        assert_eq!(result.interval_days, 6.0);
        assert_eq!(result.repetitions, 2);
    }

    #[test]
    fn test_subsequent_answers_grow_geometrically() {
        let mut record = ScheduleRecord::new();
        record.repetitions = 2;
        record.interval_days = 6.0;
        record.ease_factor = 2.5;

        let result = next_review(&record, 4);

        // 6.0 * 2.5, using the pre-update ease factor
        assert_eq!(result.interval_days, 15.0);
        assert!(result.interval_days > record.interval_days);
    }

    #[test]
    fn test_incorrect_resets_and_penalizes() {
        let mut record = ScheduleRecord::new();
        record.repetitions = 5;
        record.interval_days = 42.0;
        record.ease_factor = 2.5;

        let result = next_review(&record, 2);

        assert_eq!(result.repetitions, 0);
        assert_eq!(result.interval_days, 1.0);
        assert!(result.ease_factor < 2.5);
        assert!(result.ease_factor >= MIN_EASE_FACTOR);
    }

    #[test]
    fn test_ease_factor_never_below_floor() {
        let mut record = ScheduleRecord::new();

        for _ in 0..10 {
            let result = next_review(&record, 2);
            assert!(result.ease_factor >= MIN_EASE_FACTOR);
            record.ease_factor = result.ease_factor;
            record.interval_days = result.interval_days;
            record.repetitions = result.repetitions;
        }

        assert_eq!(record.ease_factor, MIN_EASE_FACTOR);
    }

    #[test]
    fn test_quality_five_never_shrinks_ease() {
        let record = ScheduleRecord::new();
        let result = next_review(&record, 5);
        assert!(result.ease_factor >= record.ease_factor);
    }

    #[test]
    fn test_quality_four_increase_is_smaller() {
        let record = ScheduleRecord::new();
        let fast = next_review(&record, 5);
        let slow = next_review(&record, 4);
        assert!(slow.ease_factor <= fast.ease_factor);
        assert!(slow.ease_factor >= record.ease_factor - f32::EPSILON);
    }
}
