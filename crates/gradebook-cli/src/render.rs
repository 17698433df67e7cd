//! Console rendering for roster views.

use comfy_table::{Cell, Table};

use gradebook_core::model::{Identity, Student};
use gradebook_core::roster::Roster;

/// Tabular listing of every student with their derived statistics.
pub fn roster_table(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No students.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Key", "Name", "Avg", "High", "Low", "Grade", "Count"]);

    for student in roster.students() {
        table.add_row(vec![
            Cell::new(student.identity()),
            Cell::new(student.name()),
            Cell::new(format!("{:.2}", student.average())),
            Cell::new(opt_grade(student.highest())),
            Cell::new(opt_grade(student.lowest())),
            Cell::new(student.letter_grade()),
            Cell::new(student.grade_count()),
        ]);
    }

    table.to_string()
}

/// Detail block for a single student.
pub fn student_details(student: &Student) -> String {
    let mut out = String::new();
    out.push_str(&format!("Name: {}\n", student.name()));
    if let Identity::Id(id) = student.identity() {
        out.push_str(&format!("Id: {id}\n"));
    }
    out.push_str(&format!("Grades recorded: {}\n", student.grade_count()));

    if student.grade_count() == 0 {
        out.push_str("No grades recorded yet.");
        return out;
    }

    out.push_str(&format!("Average: {:.2}\n", student.average()));
    if let Some(high) = student.highest() {
        out.push_str(&format!("Highest: {high:.1}\n"));
    }
    if let Some(low) = student.lowest() {
        out.push_str(&format!("Lowest: {low:.1}\n"));
    }
    out.push_str(&format!("Letter: {}\n", student.letter_grade()));

    let grades: Vec<String> = student.grades().iter().map(|g| format!("{g:.1}")).collect();
    out.push_str(&format!("All grades: {}", grades.join(", ")));
    out
}

fn opt_grade(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roster_listing() {
        assert_eq!(roster_table(&Roster::new()), "No students.");
    }

    #[test]
    fn listing_contains_every_student_row() {
        let mut roster = Roster::new();
        roster.add_student(Identity::Id(1), "Ann").unwrap();
        roster.add_grade_to(&Identity::Id(1), 88.0).unwrap();
        roster.add_student(Identity::Id(2), "Bob").unwrap();

        let table = roster_table(&roster);
        assert!(table.contains("Ann"));
        assert!(table.contains("88.00"));
        assert!(table.contains("Bob"));
        // Bob has no grades: average 0, letter F.
        assert!(table.contains("0.00"));
        assert!(table.contains('F'));
    }

    #[test]
    fn details_without_grades() {
        let student = Student::new(Identity::Name("Ann".into()), "Ann");
        let details = student_details(&student);
        assert!(details.contains("Name: Ann"));
        assert!(details.contains("No grades recorded yet."));
        assert!(!details.contains("Average"));
    }

    #[test]
    fn details_with_grades() {
        let mut student = Student::new(Identity::Id(3), "Cleo");
        student.add_grade(70.0).unwrap();
        student.add_grade(80.0).unwrap();

        let details = student_details(&student);
        assert!(details.contains("Id: 3"));
        assert!(details.contains("Average: 75.00"));
        assert!(details.contains("Highest: 80.0"));
        assert!(details.contains("Lowest: 70.0"));
        assert!(details.contains("Letter: C"));
        assert!(details.contains("All grades: 70.0, 80.0"));
    }
}
