//! Spaced repetition scheduler
//!
//! This module provides:
//! - Skill identifiers and per-skill schedule records
//! - SM-2 review scheduling driven by answer correctness and timing
//! - A persistent store with due-date queries and aggregate statistics

pub mod algorithm;
pub mod models;
pub mod store;

pub use models::*;
pub use store::{SchedulerError, SchedulerStore};
