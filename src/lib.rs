//! Cadenza — the "what should I practice next" engine for skill drilling
//!
//! Two components: an SM-2 spaced-repetition [`scheduler`] that tracks
//! per-skill mastery state and due dates, and a [`session`] composer that
//! samples bounded practice sessions from the due queue plus weak-area and
//! recency signals.
//!
//! The store is constructed once at application start and handed to every
//! consumer; there is no global state in this crate.
//!
//! ```no_run
//! use cadenza::scheduler::{PracticeMode, SchedulerStore, SkillId};
//!
//! let data_dir = SchedulerStore::default_data_dir().unwrap();
//! let mut store = SchedulerStore::new(data_dir).unwrap();
//!
//! let skill = SkillId::keyed(PracticeMode::Chord, "maj7", "Eb");
//! store.record_result(&skill, true, Some(2.1)).unwrap();
//! println!("due now: {}", store.total_due_count());
//! ```

pub mod scheduler;
pub mod session;
