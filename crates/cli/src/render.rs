//! Plain-text rendering of the consolidated table.
//!
//! The table is paginated into fixed-size pages, matching how a slide
//! renderer would chunk the rows. Rendering here is text only; slide
//! output is a separate concern.

use report_core::ConsolidatedTable;

/// Render the table as indented text blocks, one block per project,
/// with a page marker between pages.
pub fn render_text(table: &ConsolidatedTable, rows_per_page: usize) -> String {
    let pages = table.paginate(rows_per_page);
    let mut out = String::new();

    for (page_idx, page) in pages.iter().enumerate() {
        if pages.len() > 1 {
            out.push_str(&format!("== Page {}/{} ==\n\n", page_idx + 1, pages.len()));
        }

        for row in *page {
            out.push_str(&row.project);
            out.push('\n');
            out.push_str("  this week:\n");
            push_indented(&mut out, &row.this_period);
            out.push_str("  next week:\n");
            push_indented(&mut out, &row.next_period);
            out.push('\n');
        }
    }

    out
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_core::ConsolidatedRow;

    fn table(projects: &[&str]) -> ConsolidatedTable {
        ConsolidatedTable {
            rows: projects
                .iter()
                .map(|p| ConsolidatedRow {
                    project: p.to_string(),
                    this_period: "• did X\n• did Y".to_string(),
                    next_period: "-".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_page_has_no_page_marker() {
        let rendered = render_text(&table(&["P1"]), 6);
        assert!(!rendered.contains("== Page"));
        assert!(rendered.starts_with("P1\n"));
        assert!(rendered.contains("    • did X\n    • did Y\n"));
        assert!(rendered.contains("  next week:\n    -\n"));
    }

    #[test]
    fn test_multiple_pages_are_marked() {
        let rendered = render_text(&table(&["P1", "P2", "P3"]), 2);
        assert!(rendered.contains("== Page 1/2 =="));
        assert!(rendered.contains("== Page 2/2 =="));
    }

    #[test]
    fn test_empty_table_renders_empty() {
        let rendered = render_text(&ConsolidatedTable::default(), 6);
        assert!(rendered.is_empty());
    }
}
