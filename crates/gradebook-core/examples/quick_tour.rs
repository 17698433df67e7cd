//! Quick tour — minimal programmatic usage of gradebook-core.
//!
//! Builds a small roster, records a few grades, and prints the summary
//! report.
//!
//! ```bash
//! cargo run --example quick_tour
//! ```

use gradebook_core::error::GradebookError;
use gradebook_core::model::Identity;
use gradebook_core::report::SummaryReport;
use gradebook_core::roster::Roster;

fn main() -> Result<(), GradebookError> {
    let mut roster = Roster::new();

    // Register students keyed by numeric id.
    roster.add_student(Identity::Id(1), "Ann")?;
    roster.add_student(Identity::Id(2), "Bob")?;
    roster.add_student(Identity::Id(3), "Cleo")?;

    // Record grades.
    roster.add_grade_to(&Identity::Id(1), 100.0)?;
    roster.add_grade_to(&Identity::Id(1), 80.0)?;
    roster.add_grade_to(&Identity::Id(2), 72.5)?;
    roster.add_grade_to(&Identity::Id(3), 58.0)?;
    roster.add_grade_to(&Identity::Id(3), 64.0)?;

    // Statistics are derived on demand.
    println!("class average: {:.2}", roster.class_average());
    if let Some(top) = roster.top_student() {
        println!("top performer: {}", top.name());
    }
    println!();

    println!("{}", SummaryReport::build(&roster).to_text());
    Ok(())
}
