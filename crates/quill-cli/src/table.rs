//! Fixed-width table rendering for list/search output

/// Render a header row plus data rows, with per-column widths computed
/// from the content. Every row must have one cell per header.
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(ToString::to_string).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_row(&header_cells, &widths));
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    lines
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn columns_widen_to_longest_cell() {
        let lines = render(
            &["ID", "MEMBER"],
            &[
                vec!["1".to_string(), "A4521".to_string()],
                vec!["120".to_string(), "B7".to_string()],
            ],
        );

        assert_eq!(lines[0], "ID   MEMBER");
        assert_eq!(lines[1], "1    A4521");
        assert_eq!(lines[2], "120  B7");
    }

    #[test]
    fn headers_alone_render_without_trailing_padding() {
        let lines = render(&["ID", "NOTES"], &[]);

        assert_eq!(lines, vec!["ID  NOTES".to_string()]);
    }
}
