//! Core data model types for gradebook.
//!
//! The leaf record of the system: a student, the identity that keys them, and
//! the grade sequence they accumulate over a session.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GradebookError;

/// The unique key distinguishing one student from another.
///
/// A roster may be keyed by display name (compared case-insensitively) or by
/// numeric id; which variant a deployment uses is shell configuration, not a
/// roster concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Identity {
    /// Case-insensitive unique name.
    Name(String),
    /// Numeric student id.
    Id(u32),
}

impl Identity {
    /// Whether two identities refer to the same student.
    ///
    /// Name comparison is case-insensitive; an id never matches a name.
    pub fn matches(&self, other: &Identity) -> bool {
        match (self, other) {
            (Identity::Name(a), Identity::Name(b)) => a.eq_ignore_ascii_case(b),
            (Identity::Id(a), Identity::Id(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Name(name) => write!(f, "{name}"),
            Identity::Id(id) => write!(f, "{id}"),
        }
    }
}

/// Which identity variant a session uses when reading operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityMode {
    Name,
    Id,
}

impl fmt::Display for IdentityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityMode::Name => write!(f, "name"),
            IdentityMode::Id => write!(f, "id"),
        }
    }
}

impl FromStr for IdentityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(IdentityMode::Name),
            "id" => Ok(IdentityMode::Id),
            other => Err(format!("unknown identity mode: {other}")),
        }
    }
}

/// Single-letter categorical summary of an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Map an average to its letter band.
    ///
    /// Thresholds are inclusive lower bounds, checked top-down; first match
    /// wins.
    pub fn from_average(average: f64) -> Self {
        match average {
            a if a >= 90.0 => LetterGrade::A,
            a if a >= 80.0 => LetterGrade::B,
            a if a >= 70.0 => LetterGrade::C,
            a if a >= 60.0 => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            LetterGrade::A => 'A',
            LetterGrade::B => 'B',
            LetterGrade::C => 'C',
            LetterGrade::D => 'D',
            LetterGrade::F => 'F',
        };
        write!(f, "{letter}")
    }
}

/// A student and the grades recorded for them during this session.
///
/// Identity is fixed at creation. The grade sequence keeps insertion order,
/// allows duplicates, and has no upper bound on length. All statistics are
/// derived on demand; nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    identity: Identity,
    name: String,
    grades: Vec<f64>,
}

impl Student {
    /// Create a student with an empty grade sequence.
    pub fn new(identity: Identity, name: impl Into<String>) -> Self {
        Self {
            identity,
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a grade.
    ///
    /// Values outside [0, 100] — including non-finite ones — are rejected and
    /// never enter the sequence.
    pub fn add_grade(&mut self, value: f64) -> Result<(), GradebookError> {
        if !(0.0..=100.0).contains(&value) {
            return Err(GradebookError::GradeOutOfRange { value });
        }
        tracing::debug!(student = %self.identity, value, "grade recorded");
        self.grades.push(value);
        Ok(())
    }

    /// Read-only view of the recorded grades, in insertion order.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Arithmetic mean of the recorded grades; 0.0 when none exist.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Highest recorded grade, or `None` when no grades exist.
    pub fn highest(&self) -> Option<f64> {
        self.grades.iter().copied().reduce(f64::max)
    }

    /// Lowest recorded grade, or `None` when no grades exist.
    pub fn lowest(&self) -> Option<f64> {
        self.grades.iter().copied().reduce(f64::min)
    }

    /// Letter band for the current average.
    pub fn letter_grade(&self) -> LetterGrade {
        LetterGrade::from_average(self.average())
    }
}
