//! Practice session composition
//!
//! This module provides:
//! - Practice item models (question, notes, difficulty, hints)
//! - A seed content catalog with semitone formulas
//! - Item generation from scheduled skills or at random
//! - The session composer mixing due, weak, recent, and fill items

pub mod catalog;
pub mod composer;
pub mod generator;
pub mod models;

pub use composer::{RecentTopicSource, SessionComposer, WeakAreaSource, SESSION_SIZE};
pub use models::*;
