//! Results Grid Module for castq
//!
//! Renders query results as fixed-width aligned text. The grid performs
//! no filtering or sorting of its own; row order is whatever the query
//! returned.

use crate::catalog::{Actor, Category};

pub const MATCHES_HEADING: &str = "Your matches are:";
pub const NO_MATCHES: &str = "Could not find any matches.";

/// Column widths for the rendered tables, overridable from the display
/// configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidths {
    pub actor_id: usize,
    pub first_name: usize,
    pub last_name: usize,
    pub category_id: usize,
    pub category_name: usize,
}

impl Default for TableWidths {
    fn default() -> Self {
        TableWidths {
            actor_id: 8,
            first_name: 45,
            last_name: 45,
            category_id: 11,
            category_name: 25,
        }
    }
}

/// A header row plus data rows, each cell left-aligned and padded to its
/// column width. Cells wider than their column are printed in full rather
/// than truncated.
#[derive(Debug, Clone)]
pub struct ResultsGrid {
    headers: Vec<String>,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl ResultsGrid {
    pub fn new(headers: Vec<String>, widths: Vec<usize>) -> Self {
        ResultsGrid {
            headers,
            widths,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the header line followed by one line per row.
    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(&format_line(&self.headers, &self.widths));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&format_line(row, &self.widths));
            output.push('\n');
        }
        output
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!("{:<width$}", cell, width = width));
        line.push('|');
    }
    line
}

/// Renders an actor result set. An empty set yields the no-matches
/// message instead of an empty table.
pub fn actor_table(actors: &[Actor], widths: &TableWidths) -> String {
    if actors.is_empty() {
        return format!("{}\n", NO_MATCHES);
    }

    let mut grid = ResultsGrid::new(
        vec![
            "Actor ID".to_string(),
            "First Name".to_string(),
            "Last Name".to_string(),
        ],
        vec![widths.actor_id, widths.first_name, widths.last_name],
    );
    for actor in actors {
        grid.add_row(vec![
            actor.actor_id.to_string(),
            actor.first_name.clone(),
            actor.last_name.clone(),
        ]);
    }
    format!("{}\n\n{}", MATCHES_HEADING, grid.render())
}

/// Renders the category listing. The header line is printed even when the
/// store holds no categories.
pub fn category_table(categories: &[Category], widths: &TableWidths) -> String {
    let mut grid = ResultsGrid::new(
        vec!["Category ID".to_string(), "Category".to_string()],
        vec![widths.category_id, widths.category_name],
    );
    for category in categories {
        grid.add_row(vec![category.category_id.to_string(), category.name.clone()]);
    }
    grid.render()
}
