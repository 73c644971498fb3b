// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Minimal aligned-column rendering for terminal output.

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One column of a table: a header, an alignment, and per-row
/// formatting/coloring functions.
pub struct Column<T> {
    pub header: &'static str,
    pub align: Align,
    pub format: fn(&T) -> String,
    pub color: fn(&T) -> Option<Color>,
}

/// Renders rows into aligned, optionally colored lines.
///
/// The last column is never padded when left-aligned, so long free-text
/// cells do not drag trailing whitespace onto every line.
pub fn render<T>(columns: &[Column<T>], rows: &[T]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|col| (col.format)(row)).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|col| col.header.width()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    render_row(&mut out, columns, &widths, None, |col| {
        col.header.to_string()
    });
    for (row, cells) in rows.iter().zip(&cells) {
        let mut iter = cells.iter();
        render_row(&mut out, columns, &widths, Some(row), |_| {
            iter.next().cloned().unwrap_or_default()
        });
    }
    out
}

fn render_row<T>(
    out: &mut String,
    columns: &[Column<T>],
    widths: &[usize],
    row: Option<&T>,
    mut cell_of: impl FnMut(&Column<T>) -> String,
) {
    for (i, (col, width)) in columns.iter().zip(widths).enumerate() {
        let cell = cell_of(col);
        let last = i == columns.len() - 1;
        let pad = width.saturating_sub(cell.width());

        let cell = match col.align {
            Align::Left if last => cell,
            Align::Left => format!("{cell}{}", " ".repeat(pad)),
            Align::Right => format!("{}{cell}", " ".repeat(pad)),
        };
        let cell = match row.and_then(|row| (col.color)(row)) {
            Some(color) => cell.color(color).to_string(),
            None => cell,
        };

        out.push_str(&cell);
        out.push_str(if last { "\n" } else { "  " });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column<(&'static str, u32)>> {
        vec![
            Column {
                header: "Name",
                align: Align::Left,
                format: |row| row.0.to_string(),
                color: |_| None,
            },
            Column {
                header: "N",
                align: Align::Right,
                format: |row| row.1.to_string(),
                color: |_| None,
            },
        ]
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![("a", 1), ("longer", 42)];
        let rendered = render(&columns(), &rows);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["Name     N", "a        1", "longer  42"]);
    }

    #[test]
    fn empty_rows_render_header_only() {
        let rows: Vec<(&str, u32)> = vec![];
        let rendered = render(&columns(), &rows);
        assert_eq!(rendered.lines().count(), 1);
    }
}
