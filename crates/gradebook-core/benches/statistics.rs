use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::model::Identity;
use gradebook_core::report::SummaryReport;
use gradebook_core::roster::Roster;
use gradebook_core::statistics::ClassStats;

fn make_roster(students: u32, grades_each: u32) -> Roster {
    let mut roster = Roster::new();
    for i in 0..students {
        roster
            .add_student(Identity::Id(i), format!("student-{i}"))
            .unwrap();
        let student = roster.find_student_mut(&Identity::Id(i)).unwrap();
        for g in 0..grades_each {
            student.add_grade(f64::from((i * 7 + g * 13) % 101)).unwrap();
        }
    }
    roster
}

fn bench_class_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("class_stats");

    let small = make_roster(30, 10);
    group.bench_function("students=30,grades=10", |b| {
        b.iter(|| ClassStats::compute(black_box(&small)))
    });

    let medium = make_roster(300, 10);
    group.bench_function("students=300,grades=10", |b| {
        b.iter(|| ClassStats::compute(black_box(&medium)))
    });

    let large = make_roster(300, 100);
    group.bench_function("students=300,grades=100", |b| {
        b.iter(|| ClassStats::compute(black_box(&large)))
    });

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let roster = make_roster(300, 10);

    group.bench_function("build", |b| {
        b.iter(|| SummaryReport::build(black_box(&roster)))
    });

    let report = SummaryReport::build(&roster);
    group.bench_function("to_text", |b| b.iter(|| black_box(&report).to_text()));

    group.finish();
}

criterion_group!(benches, bench_class_stats, bench_report);
criterion_main!(benches);
