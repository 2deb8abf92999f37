//! Terminal table rendering.

use crate::export::CSV_COLUMNS;
use pecalc_valuation::ValuationRecord;

const DASHBOARD_HEADERS: [&str; 7] = [
    "Ticker",
    "Price",
    "Trailing EPS",
    "Trailing P/E",
    "Forward EPS",
    "Forward P/E",
    "Notes",
];

/// Table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// Field names as headers, full-precision numbers, `NaN` for missing values.
    #[default]
    Plain,
    /// Display headers, two decimals with thousands separators, `-` for
    /// missing values.
    Dashboard,
}

/// Options for [`render_table`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Layout to use.
    pub style: TableStyle,
    /// Appended to prices in the dashboard layout, e.g. `₺`.
    pub currency_suffix: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

// ticker, 5 numeric columns, notes
const ALIGNMENT: [Align; 7] = [
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Left,
];

/// Render `records` as an aligned text table, one line per record plus a
/// header line. Columns follow the CSV order.
pub fn render_table(records: &[ValuationRecord], options: &TableOptions) -> String {
    let headers = match options.style {
        TableStyle::Plain => CSV_COLUMNS,
        TableStyle::Dashboard => DASHBOARD_HEADERS,
    };

    let rows: Vec<[String; 7]> = records.iter().map(|r| row(r, options)).collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row(record: &ValuationRecord, options: &TableOptions) -> [String; 7] {
    let number = |value: Option<f64>| match options.style {
        TableStyle::Plain => value.map_or_else(|| "NaN".to_string(), |v| v.to_string()),
        TableStyle::Dashboard => value.map_or_else(|| "-".to_string(), |v| grouped(v, 2)),
    };

    let price = match (options.style, record.price, &options.currency_suffix) {
        (TableStyle::Dashboard, Some(p), Some(suffix)) => format!("{} {suffix}", grouped(p, 2)),
        _ => number(record.price),
    };

    [
        record.ticker.clone(),
        price,
        number(record.trailing_eps),
        number(record.trailing_pe),
        number(record.forward_eps),
        number(record.forward_pe),
        record.notes.trim_end().to_string(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = widths[i].saturating_sub(cell.chars().count());
        match ALIGNMENT[i] {
            Align::Left => {
                line.push_str(cell);
                line.extend(std::iter::repeat_n(' ', pad));
            }
            Align::Right => {
                line.extend(std::iter::repeat_n(' ', pad));
                line.push_str(cell);
            }
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Fixed decimals with `,` thousands separators.
fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .map_or((formatted.as_str(), None), |(i, f)| (i, Some(f)));

    let mut digits = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            digits.push(',');
        }
        digits.push(c);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{sign}{digits}.{frac}"),
        None => format!("{sign}{digits}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(ticker: &str, price: Option<f64>, trailing_pe: Option<f64>) -> ValuationRecord {
        ValuationRecord {
            ticker: ticker.to_string(),
            price,
            trailing_eps: None,
            forward_eps: None,
            trailing_pe,
            forward_pe: None,
            notes: String::new(),
        }
    }

    #[rstest]
    #[case(0.0, "0.00")]
    #[case(12.346, "12.35")]
    #[case(999.999, "1,000.00")]
    #[case(1234567.891, "1,234,567.89")]
    #[case(-1234.5, "-1,234.50")]
    #[case(-0.001, "0.00")]
    fn test_grouped(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(grouped(value, 2), expected);
    }

    #[test]
    fn test_plain_table() {
        let records = vec![
            record("GARAN.IS", Some(120.5), Some(4.016667)),
            record("AKBNK.IS", None, None),
        ];
        let table = render_table(&records, &TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ticker"));
        assert!(lines[0].contains("trailingPE"));
        assert!(lines[1].contains("120.5"));
        assert!(lines[1].contains("4.016667"));
        assert!(lines[2].contains("NaN"));
    }

    #[test]
    fn test_plain_table_aligns_numbers_right() {
        let records = vec![
            record("A", Some(5.0), None),
            record("B", Some(12345.5), None),
        ];
        let table = render_table(&records, &TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        let end_a = lines[1].find('5').unwrap() + 1;
        let end_b = lines[2].find("12345.5").unwrap() + "12345.5".len();
        assert_eq!(end_a, end_b);
    }

    #[test]
    fn test_dashboard_table() {
        let records = vec![
            record("GARAN.IS", Some(1234.5), Some(4.016667)),
            record("AKBNK.IS", None, None),
        ];
        let options = TableOptions {
            style: TableStyle::Dashboard,
            currency_suffix: Some("₺".to_string()),
        };
        let table = render_table(&records, &options);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Ticker"));
        assert!(lines[0].contains("Trailing P/E"));
        assert!(lines[1].contains("1,234.50 ₺"));
        assert!(lines[1].contains("4.02"));
        assert!(lines[2].contains('-'));
        assert!(!lines[2].contains("NaN"));
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = render_table(&[], &TableOptions::default());
        assert_eq!(table.lines().count(), 1);
    }
}
