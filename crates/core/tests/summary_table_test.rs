//! Tests for the Annex A summary table and its row splitter.

use opgen_core::annex_a::ROWS;
use opgen_core::summary::split_row;

#[test]
fn test_table_has_expected_row_count() {
    assert_eq!(ROWS.len(), 73);
}

#[test]
fn test_every_row_splits() {
    for (i, line) in ROWS.iter().enumerate() {
        let row = split_row(line).unwrap_or_else(|e| panic!("row {i} failed to split: {e}"));
        assert!(!row.name.is_empty(), "row {i} has an empty name");
    }
}

#[test]
fn test_operator_names_are_unique() {
    let mut names: Vec<&str> = ROWS
        .iter()
        .map(|line| split_row(line).unwrap().name)
        .collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ROWS.len());
}

#[test]
fn test_row_with_trailing_page_number() {
    let row =
        split_row("b closepath, fill, stroke Close, fill, and stroke path using nonzero winding number rule 60")
            .unwrap();
    assert_eq!(row.name, "b");
    assert_eq!(
        row.text,
        "closepath, fill, stroke Close, fill, and stroke path using nonzero winding number rule"
    );
    assert_eq!(row.page, Some(60));
}

#[test]
fn test_row_without_page_number() {
    let row = split_row("Tc Set character spacing").unwrap();
    assert_eq!(row.name, "Tc");
    assert_eq!(row.text, "Set character spacing");
    assert_eq!(row.page, None);
}

#[test]
fn test_exactly_the_known_text_state_rows_lack_pages() {
    let mut pageless: Vec<&str> = ROWS
        .iter()
        .map(|line| split_row(line).unwrap())
        .filter(|row| row.page.is_none())
        .map(|row| row.name)
        .collect();
    pageless.sort_unstable();
    assert_eq!(pageless, ["TL", "Tc", "Tf", "Tr", "Ts", "Tw", "Tz"]);
}

#[test]
fn test_quote_operators_are_present() {
    let names: Vec<&str> = ROWS
        .iter()
        .map(|line| split_row(line).unwrap().name)
        .collect();
    assert!(names.contains(&"'"));
    assert!(names.contains(&"\""));
}
