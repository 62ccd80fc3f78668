//! Result rendering as table, JSON or CSV.

use std::str::FromStr;

use serde::Serialize;

use crate::{CliError, Result};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    Table,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// A record that can be shown as one table row.
pub trait TableRow {
    /// Column headings.
    fn headers() -> Vec<&'static str>;

    /// Cell text, one per heading.
    fn cells(&self) -> Vec<String>;
}

/// Renders `rows` in the requested format.
pub fn render<R>(format: OutputFormat, rows: &[R]) -> Result<String>
where
    R: Serialize + TableRow,
{
    match format {
        OutputFormat::Table => Ok(render_table(&R::headers(), &rows.iter().map(R::cells).collect::<Vec<_>>())),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => render_csv(rows),
    }
}

fn render_csv<R: Serialize>(rows: &[R]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CliError::InvalidArgument(e.to_string()))
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r.get(i).map_or(0, |c| c.chars().count()))
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| format!(" {:<w$} ", cells.get(i).map_or("", String::as_str), w = w))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = vec![rule("┌", "┬", "┐"), line(&header_cells), rule("├", "┼", "┤")];
    if rows.is_empty() {
        let empty = vec!["(no data)".to_string()];
        out.push(line(&empty));
    }
    out.extend(rows.iter().map(|r| line(r)));
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}

/// Formats an optional number for a table cell.
pub fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.6}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Point {
        x: f64,
        y: Option<f64>,
    }

    impl TableRow for Point {
        fn headers() -> Vec<&'static str> {
            vec!["x", "y"]
        }

        fn cells(&self) -> Vec<String> {
            vec![cell(Some(self.x)), cell(self.y)]
        }
    }

    fn points() -> Vec<Point> {
        vec![Point { x: 1.0, y: Some(2.5) }, Point { x: 3.0, y: None }]
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_render_csv() {
        let text = render(OutputFormat::Csv, &points()).unwrap();
        assert_eq!(text, "x,y\n1.0,2.5\n3.0,\n");
    }

    #[test]
    fn test_render_json() {
        let text = render(OutputFormat::Json, &points()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["y"], 2.5);
        assert!(value[1]["y"].is_null());
    }

    #[test]
    fn test_render_table() {
        let text = render(OutputFormat::Table, &points()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains(" x "));
        assert!(lines[3].contains("1.000000"));
        assert!(lines[4].contains(" - "));
        assert!(lines[5].starts_with('└'));
    }

    #[test]
    fn test_render_empty_table() {
        let text = render::<Point>(OutputFormat::Table, &[]).unwrap();
        assert!(text.contains("(no data)"));
    }
}
