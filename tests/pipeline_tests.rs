//! End-to-end tests: semester CSVs on disk → SQLite store → views and search

use nu_enroll::core::models::CourseRecord;
use nu_enroll::core::pipeline::populate_store;
use nu_enroll::core::report::{reporter_for, ReportFormat, ViewSeries};
use nu_enroll::core::store::{list_period_tables, read_unified, Store};
use nu_enroll::core::EnrollError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "ID,Size,NumEnrl,Name\n";

fn write_period(dir: &Path, period: &str, rows: &str) {
    fs::write(dir.join(format!("{period}.csv")), format!("{HEADER}{rows}"))
        .expect("write period csv");
}

/// Two semesters sharing MATH101, plus a few other courses
fn sample_semesters() -> (TempDir, Store) {
    let dir = TempDir::new().expect("temp dir");
    write_period(
        dir.path(),
        "F20",
        "MATH101,30,25,Calculus I\nMATH150,25,20,Linear Algebra\nCS150,40,39,Intro to CS\n",
    );
    write_period(
        dir.path(),
        "S21",
        "MATH101,30,28,Calculus I\nCS200,35,10,\"Data Structures, Part 1\"\n",
    );
    let store = Store::new(dir.path().join("db").join("classes.db"));
    (dir, store)
}

#[test]
fn unified_row_count_is_sum_of_periods() {
    let (dir, store) = sample_semesters();
    let summary = populate_store(&store, dir.path()).expect("populate");

    assert_eq!(summary.periods, vec![("F20".to_string(), 3), ("S21".to_string(), 2)]);
    assert_eq!(summary.unified_rows, 5);
    assert_eq!(summary.unified_rows, summary.period_rows());
}

#[test]
fn math101_is_summed_and_searchable_across_semesters() {
    let (dir, store) = sample_semesters();
    populate_store(&store, dir.path()).expect("populate");

    let rows = store.enrollment_by_course(50).expect("enrollment view");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].course_id, "MATH101");
    assert_eq!(rows[0].total_enrolled, 53);

    let hits = store.search("MATH101").expect("search");
    let periods: Vec<_> = hits.iter().map(|h| h.period.as_str()).collect();
    assert_eq!(periods, vec!["S21", "F20"]);
}

#[test]
fn enrollment_view_respects_threshold_and_order() {
    let (dir, store) = sample_semesters();
    populate_store(&store, dir.path()).expect("populate");

    for threshold in [0, 1, 20, 40, 100] {
        let rows = store.enrollment_by_course(threshold).expect("enrollment view");
        assert!(rows.iter().all(|r| r.total_enrolled >= threshold));
        assert!(rows
            .windows(2)
            .all(|w| w[0].total_enrolled >= w[1].total_enrolled));
    }
    assert!(store.enrollment_by_course(100).expect("view").is_empty());
}

#[test]
fn popularity_view_is_ordered_and_filtered_on_enrollment() {
    let (dir, store) = sample_semesters();
    populate_store(&store, dir.path()).expect("populate");

    let rows = store.popularity_by_course(20).expect("popularity view");
    let ids: Vec<_> = rows.iter().map(|r| r.course_id.as_str()).collect();
    // CS150 39/40, MATH101 53/60, MATH150 20/25; CS200 is below the threshold
    assert_eq!(ids, vec!["CS150", "MATH101", "MATH150"]);
    assert!(rows.windows(2).all(|w| w[0].popularity >= w[1].popularity));
    assert!(rows.iter().all(|r| r.total_enrolled >= 20));
}

#[test]
fn repopulating_yields_the_same_unified_table() {
    let (dir, store) = sample_semesters();
    populate_store(&store, dir.path()).expect("first populate");
    let first = store.with_connection(|conn| read_unified(conn)).expect("read");

    populate_store(&store, dir.path()).expect("second populate");
    let second = store.with_connection(|conn| read_unified(conn)).expect("read");

    assert_eq!(first, second);
    assert_eq!(second.len(), 5);
}

#[test]
fn header_only_semester_contributes_no_rows() {
    let (dir, store) = sample_semesters();
    write_period(dir.path(), "Su21", "");

    let summary = populate_store(&store, dir.path()).expect("populate");
    assert!(summary.periods.contains(&("Su21".to_string(), 0)));
    assert_eq!(summary.unified_rows, 5);
    assert!(store.search("Su21").expect("search").is_empty());
}

#[test]
fn malformed_row_leaves_previous_tables_intact() {
    let (dir, store) = sample_semesters();
    populate_store(&store, dir.path()).expect("populate");

    write_period(dir.path(), "F21", "MATH101,thirty,25,Calculus I\n");
    write_period(dir.path(), "F20", "ONLY101,10,10,Replacement\n");

    let err = populate_store(&store, dir.path()).expect_err("malformed row");
    match err {
        EnrollError::Parse {
            source_name, line, ..
        } => {
            assert_eq!(source_name, "F21.csv");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }

    let tables = store.with_connection(|conn| list_period_tables(conn)).expect("tables");
    assert_eq!(tables, vec!["F20", "S21"]);
    assert_eq!(store.enrollment_by_course(0).expect("view").len(), 4);
    assert!(store.search("ONLY101").expect("search").is_empty());
}

#[test]
fn periods_differing_only_by_case_abort_before_writing() {
    let dir = TempDir::new().expect("temp dir");
    write_period(dir.path(), "F20", "A,10,5,Alpha\n");
    write_period(dir.path(), "f20", "B,10,7,Beta\n");
    if fs::read_dir(dir.path()).expect("read dir").count() < 2 {
        // Case-insensitive filesystem: only one source exists
        return;
    }
    let store = Store::new(dir.path().join("classes.db"));

    assert!(matches!(
        populate_store(&store, dir.path()),
        Err(EnrollError::Configuration(_))
    ));
    assert!(!store.path().exists());
}

#[test]
fn multiline_course_name_survives_the_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    write_period(dir.path(), "F20", "A,10,5,\"Intro\nPart 2\"\nB,4,4,Seminar\n");
    let store = Store::new(dir.path().join("classes.db"));

    let summary = populate_store(&store, dir.path()).expect("populate");
    assert_eq!(summary.unified_rows, 2);
    let hits = store.search("Part 2").expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Intro\nPart 2");
}

#[test]
fn consolidate_stored_rebuilds_from_existing_tables() {
    let (dir, store) = sample_semesters();
    populate_store(&store, dir.path()).expect("populate");

    let drawing = CourseRecord::new("ART100", 20, 15, "Drawing");
    store
        .replace_period("W22", &[drawing])
        .expect("replace period");
    assert!(store.search("ART100").expect("search").is_empty());

    assert_eq!(store.consolidate_stored().expect("consolidate"), 6);
    assert_eq!(store.search("ART100").expect("search").len(), 1);
}

#[test]
fn views_require_a_built_store() {
    let dir = TempDir::new().expect("temp dir");
    let store = Store::new(dir.path().join("empty.db"));

    assert!(matches!(store.enrollment_by_course(1), Err(EnrollError::Query(_))));
    assert!(matches!(store.search("Algebra"), Err(EnrollError::Query(_))));
    assert!(matches!(
        store.consolidate_stored(),
        Err(EnrollError::Configuration(_))
    ));
}

#[test]
fn views_export_in_every_format() {
    let (dir, store) = sample_semesters();
    populate_store(&store, dir.path()).expect("populate");
    let rows = store.enrollment_by_course(50).expect("view");
    let series = ViewSeries::enrollment(&rows, 50);

    for format in [ReportFormat::Text, ReportFormat::Csv, ReportFormat::Markdown] {
        let out = dir.path().join(format!("enrollment.{}", format.extension()));
        reporter_for(format).generate(&series, &out).expect("write view");
        let text = fs::read_to_string(&out).expect("read view");
        assert!(text.contains("MATH101"), "{format} output: {text}");
        assert!(text.contains("53"), "{format} output: {text}");
    }
}
