use scraper::{Html, Selector};

/// Sum of the parseable cells of one rendered page. Built once per seed
/// and folded into the grand total.
pub struct PageResult {
    pub seed: u64,
    pub sum: f64,
}

/// Parse one cell's text as a float. Non-numeric content is skipped, not
/// an error.
pub fn parse_cell(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Sum every `td` cell in the document. All tables on the page are merged
/// into one set of cells.
pub fn sum_table_cells(html_content: &str) -> f64 {
    let td_selector = Selector::parse("td").unwrap();
    let html_document = Html::parse_document(html_content);

    html_document
        .select(&td_selector)
        .filter_map(|cell| {
            let text: String = cell.text().collect();
            parse_cell(&text)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{parse_cell, sum_table_cells};

    #[test]
    fn parse_cell_accepts_float_literals() {
        assert_eq!(parse_cell("10"), Some(10.0));
        assert_eq!(parse_cell("5.5"), Some(5.5));
        assert_eq!(parse_cell("-3.25"), Some(-3.25));
        assert_eq!(parse_cell("  42 "), Some(42.0));
    }

    #[test]
    fn parse_cell_skips_non_numeric_text() {
        assert_eq!(parse_cell("abc"), None);
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("   "), None);
        assert_eq!(parse_cell("12,5"), None);
        assert_eq!(parse_cell("NaN"), None);
    }

    #[test]
    fn sum_table_cells_mixed_content() {
        let html = r#"
            <html><body><table>
                <tr><td>10</td><td>abc</td></tr>
                <tr><td>5.5</td><td></td></tr>
            </table></body></html>
        "#;
        assert_eq!(sum_table_cells(html), 15.5);
    }

    #[test]
    fn sum_table_cells_merges_all_tables() {
        let html = r#"
            <html><body>
                <table><tr><td>1</td><td>2</td></tr></table>
                <table><tr><td>3.5</td></tr></table>
            </body></html>
        "#;
        assert_eq!(sum_table_cells(html), 6.5);
    }

    #[test]
    fn sum_table_cells_ignores_headers() {
        let html = "<table><tr><th>100</th></tr><tr><td>7</td></tr></table>";
        assert_eq!(sum_table_cells(html), 7.0);
    }

    #[test]
    fn sum_table_cells_without_cells_is_zero() {
        assert_eq!(sum_table_cells("<html><body><p>no tables</p></body></html>"), 0.0);
        assert_eq!(sum_table_cells("<table></table>"), 0.0);
    }

    #[test]
    fn page_sums_fold_into_grand_total() {
        let page_1 = "<table><tr><td>60</td><td>40</td></tr></table>";
        let page_2 = "<table><tr><td>200</td></tr></table>";

        let grand_total = sum_table_cells(page_1) + sum_table_cells(page_2);
        assert_eq!(grand_total, 300.0);
    }
}
