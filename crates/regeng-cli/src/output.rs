//! Output rendering for `rge` commands.
//!
//! Every command result is a serde-serializable value; rendering goes through
//! its JSON form so tables never need per-type code. Arrays of objects become
//! aligned tables, single objects become key/value tables.

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(render_rows(&["field", "value"], &rows))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_rows(&["value"], &rows);
    }

    // Column order follows the first row; later-only fields are appended.
    let mut headers: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| {
                    item.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    render_rows(&header_refs, &rows)
}

/// Render a simple aligned table.
fn render_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| format!("{header:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.len());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_array_renders_placeholder() {
        let rendered = render(&Vec::<Value>::new(), OutputFormat::Table).unwrap();
        assert_eq!(rendered, "(no rows)");
    }

    #[test]
    fn array_of_objects_renders_aligned_columns() {
        let items = json!([
            {"service": "admin", "status": "healthy"},
            {"service": "ingestion", "status": "unhealthy"}
        ]);
        let rendered = render(&items, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("service"));
        assert!(lines[2].starts_with("admin"));
        assert!(lines[3].starts_with("ingestion"));
    }

    #[test]
    fn json_format_is_pretty() {
        let rendered = render(&json!({"a": 1}), OutputFormat::Json).unwrap();
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn null_cell_renders_dash() {
        let items = json!([{"key_id": "key_01", "description": null}]);
        let rendered = render(&items, OutputFormat::Table).unwrap();
        assert!(rendered.contains('-'));
    }
}
