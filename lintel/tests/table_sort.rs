use lintel::components::table::policy::natural_order;
use lintel::components::table::{
    CellValue, Column, Comparator, Row, SortDirection, SorterFactory, Table, TableConfig,
};
use std::cmp::Ordering;
use std::sync::Arc;

fn table(values: &[i64]) -> Table {
    let table = Table::new(
        vec![Column::new("n", "N").numeric(), Column::new("name", "Name")],
        TableConfig::new().sortable(true),
    )
    .unwrap();
    table.set_rows(
        values
            .iter()
            .map(|n| Row::new().with("n", *n).with("name", format!("row {}", n)))
            .collect(),
    );
    table
}

fn column(table: &Table, key: &str) -> Vec<String> {
    table
        .visible_rows()
        .iter()
        .map(|r| r.display(key).plain_text())
        .collect()
}

#[test]
fn test_first_click_sorts_ascending_then_toggles() {
    let table = table(&[3, 1, 2]);
    assert_eq!(table.toggle_sort("n"), Some(SortDirection::Asc));
    assert_eq!(column(&table, "n"), vec!["1", "2", "3"]);

    assert_eq!(table.toggle_sort("n"), Some(SortDirection::Desc));
    assert_eq!(column(&table, "n"), vec!["3", "2", "1"]);

    assert_eq!(table.toggle_sort("n"), Some(SortDirection::Asc));
    assert_eq!(column(&table, "n"), vec!["1", "2", "3"]);
}

#[test]
fn test_switching_column_resets_to_ascending() {
    let table = table(&[3, 1, 2]);
    table.toggle_sort("n");
    table.toggle_sort("n");
    assert_eq!(table.toggle_sort("name"), Some(SortDirection::Asc));
    assert_eq!(table.sort(), Some(("name".to_string(), SortDirection::Asc)));
    assert_eq!(column(&table, "name"), vec!["row 1", "row 2", "row 3"]);
}

#[test]
fn test_numbers_sort_numerically() {
    let table = table(&[10, 9, 100]);
    table.toggle_sort("n");
    assert_eq!(column(&table, "n"), vec!["9", "10", "100"]);
}

#[test]
fn test_sort_is_stable() {
    let table = Table::new(
        vec![Column::new("group", "Group"), Column::new("name", "Name")],
        TableConfig::new().sortable(true),
    )
    .unwrap();
    table.set_rows(vec![
        Row::new().with("group", "b").with("name", "first"),
        Row::new().with("group", "a").with("name", "second"),
        Row::new().with("group", "b").with("name", "third"),
        Row::new().with("group", "a").with("name", "fourth"),
    ]);
    table.toggle_sort("group");
    assert_eq!(column(&table, "name"), vec!["second", "fourth", "first", "third"]);
}

#[test]
fn test_sort_ignored_when_not_sortable() {
    let table = Table::new(vec![Column::new("n", "N")], TableConfig::new()).unwrap();
    assert_eq!(table.toggle_sort("n"), None);
    assert_eq!(table.sort(), None);

    let table = Table::new(
        vec![Column::new("n", "N").sortable(false)],
        TableConfig::new().sortable(true),
    )
    .unwrap();
    assert_eq!(table.toggle_sort("n"), None);
    assert_eq!(table.toggle_sort("missing"), None);
}

#[test]
fn test_sorter_survives_new_rows() {
    let table = table(&[3, 1, 2]);
    table.toggle_sort("n");
    table.set_rows(vec![
        Row::new().with("n", 5),
        Row::new().with("n", 4),
    ]);
    assert_eq!(column(&table, "n"), vec!["4", "5"]);
}

#[test]
fn test_custom_sorter_factory() {
    // Sort by string length, ignoring direction for ties.
    let by_length: SorterFactory = Arc::new(|key: &str, direction: SortDirection| {
        let key = key.to_string();
        let compare: Comparator = Arc::new(move |a: &Row, b: &Row| {
            let len = |r: &Row| r.display(&key).plain_text().len();
            let order = len(a).cmp(&len(b));
            if direction == SortDirection::Desc { order.reverse() } else { order }
        });
        compare
    });
    let table = Table::new(
        vec![Column::new("word", "Word").custom_sorter_factory(by_length)],
        TableConfig::new().sortable(true),
    )
    .unwrap();
    table.set_rows(
        ["ccc", "a", "bb"]
            .iter()
            .map(|w| Row::new().with("word", *w))
            .collect(),
    );
    table.toggle_sort("word");
    assert_eq!(column(&table, "word"), vec!["a", "bb", "ccc"]);
    table.toggle_sort("word");
    assert_eq!(column(&table, "word"), vec!["ccc", "bb", "a"]);
}

#[test]
fn test_natural_order_mixed_kinds_is_total() {
    let values = [
        CellValue::from("b"),
        CellValue::from(2),
        CellValue::Empty,
        CellValue::from("a"),
        CellValue::from(1),
    ];
    for a in &values {
        assert_eq!(natural_order(a, a), Ordering::Equal);
        for b in &values {
            assert_eq!(natural_order(a, b), natural_order(b, a).reverse());
        }
    }
    assert_eq!(natural_order(&CellValue::from(1), &CellValue::from(2)), Ordering::Less);
    assert_eq!(natural_order(&CellValue::from("a"), &CellValue::from("b")), Ordering::Less);
}
