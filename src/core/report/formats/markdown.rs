//! Markdown view renderer

use crate::core::report::{ViewReporter, ViewSeries};
use std::fmt::Write;

/// Renders a view as a level-2 heading and a two-column table
pub struct MarkdownReporter;

impl ViewReporter for MarkdownReporter {
    fn render(&self, series: &ViewSeries) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "## {}\n", series.title);
        let _ = writeln!(
            out,
            "| {} | {} |",
            ViewSeries::LABEL_HEADER,
            series.value_label
        );
        out.push_str("|---|---:|\n");
        for (label, value) in &series.points {
            let _ = writeln!(out, "| {} | {value} |", label.replace('|', "\\|"));
        }
        out
    }
}
