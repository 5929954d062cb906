//! CSV view renderer

use crate::core::report::{ViewReporter, ViewSeries};
use std::fmt::Write;

/// Renders a view as `Course ID,<value label>` rows
pub struct CsvReporter;

/// Quote a field if it holds a comma, quote, or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl ViewReporter for CsvReporter {
    fn render(&self, series: &ViewSeries) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{},{}",
            ViewSeries::LABEL_HEADER,
            escape_field(series.value_label)
        );
        for (label, value) in &series.points {
            let _ = writeln!(out, "{},{}", escape_field(label), value.raw());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::MetricValue;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("MATH101"), "MATH101");
        assert_eq!(escape_field("A,B"), "\"A,B\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_ratios_keep_full_precision() {
        let series = ViewSeries {
            title: "ignored".to_string(),
            value_label: "Popularity",
            points: vec![("CS150".to_string(), MetricValue::Ratio(0.975))],
        };
        assert_eq!(
            CsvReporter.render(&series),
            "Course ID,Popularity\nCS150,0.975\n"
        );
    }
}
