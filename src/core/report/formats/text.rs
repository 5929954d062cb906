//! Plain-text view renderer

use crate::core::report::{ViewReporter, ViewSeries};
use std::fmt::Write;

/// Renders a view as a title followed by two aligned columns
pub struct TextReporter;

impl ViewReporter for TextReporter {
    fn render(&self, series: &ViewSeries) -> String {
        let label_width = series
            .points
            .iter()
            .map(|(label, _)| label.chars().count())
            .chain(std::iter::once(ViewSeries::LABEL_HEADER.len()))
            .max()
            .unwrap_or_default();

        let mut out = String::new();
        let _ = writeln!(out, "{}", series.title);
        let _ = writeln!(
            out,
            "{:<label_width$}  {}",
            ViewSeries::LABEL_HEADER,
            series.value_label
        );
        if series.points.is_empty() {
            out.push_str("(no courses)\n");
        }
        for (label, value) in &series.points {
            let _ = writeln!(out, "{label:<label_width$}  {value}");
        }
        out
    }
}
