//! Stateless rendering of tables and result rows as aligned text.
//!
//! Every function takes its input by reference and returns a freshly
//! built string; there is no shared formatter state.

use crate::table::{Row, Table};

/// Render a header and rows with every column padded to its widest cell.
///
/// The header is separated from the data rows by a rule. The last
/// column is not padded, so lines carry no trailing spaces.
pub fn render_rows(attributes: &[String], rows: &[Row]) -> String {
    let mut widths: Vec<usize> = attributes.iter().map(String::len).collect();
    for row in rows {
        for (column, field) in row.iter().enumerate() {
            if column == widths.len() {
                widths.push(field.len());
            } else if field.len() > widths[column] {
                widths[column] = field.len();
            }
        }
    }

    let mut output = String::new();
    push_line(&mut output, attributes, &widths);

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    output.push_str(&rule.join("-+-"));
    output.push('\n');

    for row in rows {
        push_line(&mut output, row, &widths);
    }

    output
}

/// Render a loaded table, header and all data rows.
pub fn render_table(table: &Table) -> String {
    render_rows(table.attributes(), table.rows())
}

fn push_line(output: &mut String, fields: &[String], widths: &[usize]) {
    for (column, field) in fields.iter().enumerate() {
        if column > 0 {
            output.push_str(" | ");
        }
        if column + 1 < fields.len() {
            let width = widths[column];
            output.push_str(&format!("{field:<width$}"));
        } else {
            output.push_str(field);
        }
    }
    output.push('\n');
}
