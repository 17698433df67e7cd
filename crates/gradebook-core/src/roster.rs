//! The owning collection of students for a session.

use serde::{Deserialize, Serialize};

use crate::error::GradebookError;
use crate::model::{Identity, Student};

/// All students registered in the current session, in insertion order.
///
/// Identity uniqueness is enforced at insertion. Lookup is a linear scan: the
/// roster lives for one interactive session and holds at most a classroom's
/// worth of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new student with an empty grade sequence.
    ///
    /// Fails without modifying the roster if the identity is already taken.
    pub fn add_student(
        &mut self,
        identity: Identity,
        name: impl Into<String>,
    ) -> Result<(), GradebookError> {
        if self.find_student(&identity).is_some() {
            return Err(GradebookError::DuplicateStudent(identity));
        }
        let student = Student::new(identity, name);
        tracing::debug!(student = %student.identity(), "student added");
        self.students.push(student);
        Ok(())
    }

    /// Remove a student and their grades.
    ///
    /// Absence is an expected outcome, not an error.
    pub fn remove_student(&mut self, identity: &Identity) -> bool {
        let before = self.students.len();
        self.students.retain(|s| !s.identity().matches(identity));
        let removed = self.students.len() < before;
        if removed {
            tracing::debug!(student = %identity, "student removed");
        }
        removed
    }

    pub fn find_student(&self, identity: &Identity) -> Option<&Student> {
        self.students.iter().find(|s| s.identity().matches(identity))
    }

    pub fn find_student_mut(&mut self, identity: &Identity) -> Option<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.identity().matches(identity))
    }

    /// Record a grade for an existing student.
    pub fn add_grade_to(
        &mut self,
        identity: &Identity,
        value: f64,
    ) -> Result<(), GradebookError> {
        let student = self
            .find_student_mut(identity)
            .ok_or_else(|| GradebookError::StudentNotFound(identity.clone()))?;
        student.add_grade(value)
    }

    /// Read-only view of all students, in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Mean of each student's own average; 0.0 on an empty roster.
    ///
    /// Every student contributes exactly one term regardless of how many
    /// grades they hold, so a student with no grades pulls the class down
    /// with their 0.
    pub fn class_average(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let total: f64 = self.students.iter().map(Student::average).sum();
        total / self.students.len() as f64
    }

    /// Highest grade held by any student, or `None` until a grade exists.
    ///
    /// Computed over per-student maxima, not the flattened grade pool.
    pub fn class_highest(&self) -> Option<f64> {
        self.students
            .iter()
            .filter_map(Student::highest)
            .reduce(f64::max)
    }

    /// Lowest grade held by any student, or `None` until a grade exists.
    pub fn class_lowest(&self) -> Option<f64> {
        self.students
            .iter()
            .filter_map(Student::lowest)
            .reduce(f64::min)
    }

    /// Student with the highest average; `None` on an empty roster.
    ///
    /// Strict comparison against the running best, so the first-inserted
    /// student wins ties.
    pub fn top_student(&self) -> Option<&Student> {
        let mut best: Option<&Student> = None;
        for student in &self.students {
            match best {
                Some(b) if student.average() > b.average() => best = Some(student),
                Some(_) => {}
                None => best = Some(student),
            }
        }
        best
    }

    /// Student with the lowest average; `None` on an empty roster.
    pub fn bottom_student(&self) -> Option<&Student> {
        let mut worst: Option<&Student> = None;
        for student in &self.students {
            match worst {
                Some(w) if student.average() < w.average() => worst = Some(student),
                Some(_) => {}
                None => worst = Some(student),
            }
        }
        worst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Identity {
        Identity::Name(s.into())
    }

    #[test]
    fn add_and_find_by_name_case_insensitive() {
        let mut roster = Roster::new();
        roster.add_student(name("Ann"), "Ann").unwrap();
        assert!(roster.find_student(&name("ann")).is_some());
        assert!(roster.find_student(&name("ANN")).is_some());
        assert!(roster.find_student(&name("Bob")).is_none());
    }

    #[test]
    fn duplicate_add_leaves_roster_unchanged() {
        let mut roster = Roster::new();
        roster.add_student(name("Ann"), "Ann").unwrap();
        let err = roster.add_student(name("aNN"), "Ann").unwrap_err();
        assert_eq!(err, GradebookError::DuplicateStudent(name("aNN")));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut roster = Roster::new();
        roster.add_student(Identity::Id(7), "Ann").unwrap();
        assert!(roster.add_student(Identity::Id(7), "Bob").is_err());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn remove_is_a_boolean_outcome() {
        let mut roster = Roster::new();
        roster.add_student(name("Ann"), "Ann").unwrap();
        assert!(!roster.remove_student(&name("Bob")));
        assert_eq!(roster.len(), 1);
        assert!(roster.remove_student(&name("ANN")));
        assert!(roster.is_empty());
    }

    #[test]
    fn add_grade_to_missing_student() {
        let mut roster = Roster::new();
        let err = roster.add_grade_to(&name("Ann"), 90.0).unwrap_err();
        assert_eq!(err, GradebookError::StudentNotFound(name("Ann")));
    }

    #[test]
    fn add_grade_to_rejects_out_of_range() {
        let mut roster = Roster::new();
        roster.add_student(name("Ann"), "Ann").unwrap();
        assert!(roster.add_grade_to(&name("Ann"), 101.0).is_err());
        assert!(roster.find_student(&name("Ann")).unwrap().grades().is_empty());
    }

    #[test]
    fn students_view_is_stable_without_mutation() {
        let mut roster = Roster::new();
        roster.add_student(name("Ann"), "Ann").unwrap();
        roster.add_student(name("Bob"), "Bob").unwrap();
        let first: Vec<String> = roster.students().iter().map(|s| s.name().into()).collect();
        let second: Vec<String> = roster.students().iter().map(|s| s.name().into()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["Ann".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn class_average_of_averages() {
        let mut roster = Roster::new();
        assert_eq!(roster.class_average(), 0.0);

        roster.add_student(name("Ann"), "Ann").unwrap();
        roster.add_grade_to(&name("Ann"), 80.0).unwrap();
        roster.add_grade_to(&name("Ann"), 90.0).unwrap();
        assert_eq!(roster.class_average(), 85.0);

        // A grade-less student contributes a 0 term, not nothing.
        roster.add_student(name("Bob"), "Bob").unwrap();
        assert_eq!(roster.class_average(), 42.5);
    }

    #[test]
    fn class_extrema_from_per_student_extrema() {
        let mut roster = Roster::new();
        assert_eq!(roster.class_highest(), None);
        assert_eq!(roster.class_lowest(), None);

        roster.add_student(name("Ann"), "Ann").unwrap();
        roster.add_student(name("Bob"), "Bob").unwrap();
        // Bob has no grades yet; extrema only cover students with data.
        roster.add_grade_to(&name("Ann"), 72.0).unwrap();
        roster.add_grade_to(&name("Ann"), 95.0).unwrap();
        assert_eq!(roster.class_highest(), Some(95.0));
        assert_eq!(roster.class_lowest(), Some(72.0));

        roster.add_grade_to(&name("Bob"), 40.0).unwrap();
        assert_eq!(roster.class_highest(), Some(95.0));
        assert_eq!(roster.class_lowest(), Some(40.0));
    }

    #[test]
    fn top_and_bottom_tie_break_on_insertion_order() {
        let mut roster = Roster::new();
        assert!(roster.top_student().is_none());
        assert!(roster.bottom_student().is_none());

        roster.add_student(name("Ann"), "Ann").unwrap();
        roster.add_grade_to(&name("Ann"), 90.0).unwrap();
        roster.add_student(name("Bob"), "Bob").unwrap();
        roster.add_grade_to(&name("Bob"), 90.0).unwrap();

        assert_eq!(roster.top_student().unwrap().name(), "Ann");
        assert_eq!(roster.bottom_student().unwrap().name(), "Ann");
    }

    #[test]
    fn end_to_end_scenario() {
        let mut roster = Roster::new();
        roster.add_student(Identity::Id(1), "Ann").unwrap();
        roster.add_grade_to(&Identity::Id(1), 100.0).unwrap();
        roster.add_grade_to(&Identity::Id(1), 80.0).unwrap();
        roster.add_student(Identity::Id(2), "Bob").unwrap();

        let ann = roster.find_student(&Identity::Id(1)).unwrap();
        assert_eq!(ann.average(), 90.0);
        assert_eq!(ann.highest(), Some(100.0));
        assert_eq!(ann.lowest(), Some(80.0));
        assert_eq!(ann.letter_grade().to_string(), "A");

        assert_eq!(roster.class_average(), 45.0);
        assert_eq!(roster.bottom_student().unwrap().name(), "Bob");
        assert_eq!(roster.top_student().unwrap().name(), "Ann");
    }
}
