//! Class-wide aggregate statistics.
//!
//! Aggregates combine each student's own derived statistics (class average is
//! a mean of per-student averages, extrema come from per-student extrema);
//! raw grades are never pooled across students.

use serde::{Deserialize, Serialize};

use crate::model::{Identity, LetterGrade, Student};
use crate::roster::Roster;

/// A top or bottom performer at the moment a snapshot was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standing {
    pub identity: Identity,
    pub name: String,
    pub average: f64,
    pub letter: LetterGrade,
}

impl Standing {
    fn of(student: &Student) -> Self {
        Self {
            identity: student.identity().clone(),
            name: student.name().to_string(),
            average: student.average(),
            letter: student.letter_grade(),
        }
    }
}

/// Aggregate statistics across the whole roster.
///
/// Derived values only: recomputed from the roster on every query and never
/// stored back or cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassStats {
    pub student_count: usize,
    /// Mean of per-student averages; each student contributes one term.
    pub class_average: f64,
    /// Max over per-student maxima; `None` until any grade is recorded.
    pub class_highest: Option<f64>,
    /// Min over per-student minima; `None` until any grade is recorded.
    pub class_lowest: Option<f64>,
    pub top: Option<Standing>,
    pub bottom: Option<Standing>,
}

impl ClassStats {
    /// Snapshot the roster's aggregate statistics.
    pub fn compute(roster: &Roster) -> Self {
        Self {
            student_count: roster.len(),
            class_average: roster.class_average(),
            class_highest: roster.class_highest(),
            class_lowest: roster.class_lowest(),
            top: roster.top_student().map(Standing::of),
            bottom: roster.bottom_student().map(Standing::of),
        }
    }
}
