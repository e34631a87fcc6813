/// A simple text table for rendering the transaction queue in the terminal
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render the table as an aligned string
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut output = String::new();
        output.push_str(&Self::render_cells(&self.headers, &widths));
        output.push('\n');
        output.push_str(&Self::render_rule(&widths));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::render_cells(row, &widths));
            output.push('\n');
        }

        output
    }

    /// Widest cell per column, headers included
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn render_cells(row: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, &width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&format!("{:<width$}", cell, width = width));
            if i < widths.len() - 1 {
                line.push_str("  ");
            }
        }
        line.trim_end().to_string()
    }

    fn render_rule(widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, &width) in widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < widths.len() - 1 {
                line.push_str("  ");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_table() {
        let mut table = Table::new(&["#", "Type", "Gas", "Sel"]);
        table.add_row(vec![
            "1".to_string(),
            "Transfer".to_string(),
            "21.0k".to_string(),
            "[x]".to_string(),
        ]);
        table.add_row(vec![
            "2".to_string(),
            "Swap".to_string(),
            "150.0k".to_string(),
            "[ ]".to_string(),
        ]);

        let rendered = table.render();
        assert!(rendered.contains("Type"));
        assert!(rendered.contains("Transfer"));
        assert!(rendered.contains("150.0k"));
        // Header separator spans the widest cell of each column
        assert!(rendered.contains("--------"));
    }

    #[test]
    fn test_short_row_padded() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(vec!["only".to_string()]);
        let rendered = table.render();
        assert!(rendered.contains("only"));
    }
}
