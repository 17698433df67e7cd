//! Session summary report built from roster snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Identity, LetterGrade, Student};
use crate::roster::Roster;
use crate::statistics::ClassStats;

/// One student's line in the summary report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub identity: Identity,
    pub name: String,
    pub grade_count: usize,
    pub average: f64,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
    pub letter: LetterGrade,
}

impl StudentSummary {
    fn of(student: &Student) -> Self {
        Self {
            identity: student.identity().clone(),
            name: student.name().to_string(),
            grade_count: student.grade_count(),
            average: student.average(),
            highest: student.highest(),
            lowest: student.lowest(),
            letter: student.letter_grade(),
        }
    }
}

/// A complete summary report for the current roster.
///
/// The numbers are frozen at build time; rendering is free to vary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Per-student summaries, in insertion order.
    pub students: Vec<StudentSummary>,
    /// Class-wide aggregates.
    pub class: ClassStats,
}

impl SummaryReport {
    /// Snapshot the roster into a report.
    pub fn build(roster: &Roster) -> Self {
        Self {
            created_at: Utc::now(),
            students: roster.students().iter().map(StudentSummary::of).collect(),
            class: ClassStats::compute(roster),
        }
    }

    /// Render the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Student Summary Report\n");
        out.push_str("----------------------\n");

        if self.students.is_empty() {
            out.push_str("No students.\n");
            return out;
        }

        for s in &self.students {
            match (s.highest, s.lowest) {
                (Some(high), Some(low)) => {
                    out.push_str(&format!(
                        "{}: avg {:.2}, high {:.1}, low {:.1}, letter {} ({} grade(s))\n",
                        label(&s.identity, &s.name),
                        s.average,
                        high,
                        low,
                        s.letter,
                        s.grade_count,
                    ));
                }
                _ => {
                    out.push_str(&format!("{}: no scores yet\n", label(&s.identity, &s.name)));
                }
            }
        }

        out.push_str("----------------------\n");
        out.push_str(&format!("Students: {}\n", self.class.student_count));

        // No grade anywhere means no meaningful class statistics.
        let (Some(high), Some(low)) = (self.class.class_highest, self.class.class_lowest) else {
            out.push_str("No scores entered yet.\n");
            return out;
        };

        out.push_str(&format!("Class Average: {:.2}\n", self.class.class_average));
        out.push_str(&format!("Highest Score: {high:.1}\n"));
        out.push_str(&format!("Lowest Score: {low:.1}\n"));

        if let Some(top) = &self.class.top {
            out.push_str(&format!(
                "Top Performer: {} (avg {:.2}, {})\n",
                label(&top.identity, &top.name),
                top.average,
                top.letter,
            ));
        }
        if let Some(bottom) = &self.class.bottom {
            out.push_str(&format!(
                "Needs Improvement: {} (avg {:.2}, {})\n",
                label(&bottom.identity, &bottom.name),
                bottom.average,
                bottom.letter,
            ));
        }

        out
    }
}

/// Display label for a student: the bare name in name mode, `#id name` when
/// the identity is numeric.
fn label(identity: &Identity, name: &str) -> String {
    match identity {
        Identity::Name(_) => name.to_string(),
        Identity::Id(id) => format!("#{id} {name}"),
    }
}
