//! PHP literal formatting for seed rows.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Row, Value};

use super::template::indent;

// Decimal with optional sign, fraction and exponent. A leading zero may only be
// followed by the fraction, so zero-padded codes such as "007" stay strings.
static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:0|[1-9][0-9]*)(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric literal pattern is valid")
});

/// Whether `text` can be emitted as a bare PHP number without changing its value.
pub fn looks_numeric(text: &str) -> bool {
    NUMERIC_LITERAL.is_match(text)
}

/// Single-quoted PHP string literal.
///
/// Inside single quotes PHP only interprets `\\` and `\'`.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

/// Renders one value as a PHP literal.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Number(n) => n.clone(),
        Value::Text(t) if looks_numeric(t) => t.clone(),
        Value::Text(t) => quote(t),
    }
}

/// Renders one row as an indented PHP array element.
pub fn format_row(row: &Row) -> String {
    let mut block = format!("{}[\n", indent(3));
    for (column, value) in row {
        block.push_str(&format!(
            "{}{} => {},\n",
            indent(4),
            quote(column),
            format_value(value)
        ));
    }
    block.push_str(&format!("{}],\n", indent(3)));
    block
}

/// Renders a page of rows, one block per row, in order.
pub fn format_rows(rows: &[Row]) -> String {
    rows.iter().map(format_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_numeric() {
        for numeric in ["42", "0", "-7", "+3", "1.5", "0.25", ".5", "5.", "3e4", "-2.5E-3"] {
            assert!(looks_numeric(numeric), "{numeric} should be numeric");
        }
        for text in ["", " 1", "1 ", "007", "1e", "0x1A", "1,000", "abc", "NaN", "--1", "."] {
            assert!(!looks_numeric(text), "{text:?} should not be numeric");
        }
    }

    #[test]
    fn test_format_value_by_kind() {
        assert_eq!(format_value(&Value::Null), "null");
        assert_eq!(format_value(&Value::Number("2.5".to_string())), "2.5");
        assert_eq!(format_value(&Value::Text("42".to_string())), "42");
        assert_eq!(format_value(&Value::Text("Alice".to_string())), "'Alice'");
        assert_eq!(format_value(&Value::Text(String::new())), "''");
    }

    #[test]
    fn test_quote_escapes_quotes_and_backslashes() {
        assert_eq!(quote("O'Brien"), r"'O\'Brien'");
        assert_eq!(quote(r"C:\temp"), r"'C:\\temp'");
        assert_eq!(quote(r"\'"), r"'\\\''");
        assert_eq!(quote("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_null_text_and_literal_null_differ() {
        assert_ne!(
            format_value(&Value::Null),
            format_value(&Value::Text("null".to_string()))
        );
        assert_eq!(format_value(&Value::Text("null".to_string())), "'null'");
    }

    #[test]
    fn test_format_row_preserves_column_order() {
        let mut row = Row::new();
        row.insert("id".to_string(), Value::from(1i64));
        row.insert("name".to_string(), Value::from("Ada"));
        row.insert("deleted_at".to_string(), Value::Null);

        let expected = concat!(
            "            [\n",
            "                'id' => 1,\n",
            "                'name' => 'Ada',\n",
            "                'deleted_at' => null,\n",
            "            ],\n",
        );
        assert_eq!(format_row(&row), expected);
    }

    #[test]
    fn test_format_rows_concatenates_blocks() {
        let mut a = Row::new();
        a.insert("v".to_string(), Value::from(1i64));
        let mut b = Row::new();
        b.insert("v".to_string(), Value::from(2i64));

        let rendered = format_rows(&[a, b]);
        assert_eq!(rendered.matches("            [\n").count(), 2);
        assert!(rendered.find("=> 1").unwrap() < rendered.find("=> 2").unwrap());
    }
}
