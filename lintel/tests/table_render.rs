use lintel::components::table::{
    CellValue, Column, Row, RowId, Table, TableConfig, format_number,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use lintel::handlers::events;
use lintel::{EventData, RenderContext};
use webdom::Element;
use webdom::element::{find_by_class, find_by_tag, find_element};

fn people() -> Table {
    let table = Table::new(
        vec![
            Column::new("name", "Name"),
            Column::new("age", "Age").numeric().width("80px"),
            Column::new("note", "Note").filterable(false).sortable(false),
        ],
        TableConfig::new()
            .id("people")
            .filterable(true)
            .sortable(true)
            .selectable(true)
            .unique_id_key("id")
            .items_per_page(2),
    )
    .unwrap();
    table.set_rows(vec![
        Row::new().with("id", "a").with("name", "Ada").with("age", 36).with("note", "first"),
        Row::new().with("id", "b").with("name", "Bob").with("age", 41),
        Row::new().with("id", "c").with("name", "Cy").with("age", 29),
    ]);
    table
}

fn body_text(root: &Element, column: usize) -> Vec<String> {
    find_by_class(root, "row")
        .iter()
        .map(|tr| {
            let cells: Vec<&Element> = tr
                .child_elements()
                .iter()
                .filter(|c| c.has_class("cell"))
                .collect();
            cells[column].text_content()
        })
        .collect()
}

#[test]
fn test_cell_resolution() {
    let row = Row::new()
        .with("empty", CellValue::Empty)
        .with("number", 42)
        .with("flag", true)
        .with("off", false)
        .with("computed", CellValue::computed(|_: &Row| "X".into()))
        .with("text", "  verbatim ");

    assert_eq!(row.display("empty").plain_text(), "");
    assert_eq!(row.display("number").plain_text(), "42");
    assert_eq!(row.display("flag").plain_text(), "True");
    assert_eq!(row.display("off").plain_text(), "False");
    assert_eq!(row.display("computed").plain_text(), "X");
    assert_eq!(row.display("text").plain_text(), "  verbatim ");
    assert_eq!(row.display("missing").plain_text(), "");
}

#[test]
fn test_computed_cell_reads_its_row() {
    let row = Row::new()
        .with("first", "Ada")
        .with("last", "Lovelace")
        .with(
            "full",
            CellValue::computed(|r: &Row| {
                format!("{} {}", r.display("first").plain_text(), r.display("last").plain_text())
                    .into()
            }),
        );
    assert_eq!(row.display("full").plain_text(), "Ada Lovelace");
}

#[test]
fn test_number_formatting() {
    assert_eq!(format_number(42.0), "42");
    assert_eq!(format_number(-0.5), "-0.5");
    assert_eq!(format_number(0.000001), "0.000001");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(-2.5e25), "-2.5e+25");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_custom_value_replaces_cell_resolution() {
    let evaluated = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let counter = evaluated.clone();
    let computed = CellValue::computed(move |_: &Row| {
        counter.fetch_add(1, Ordering::SeqCst);
        "computed".into()
    });
    let record = seen.clone();
    let column = Column::new("score", "Score").custom_value(move |raw: &CellValue, row: &Row| {
        record.lock().unwrap().push(format!("{raw:?}"));
        format!("custom {}", row.display("id").plain_text()).into()
    });

    let table = Table::new(vec![column], TableConfig::new()).unwrap();
    table.set_rows(vec![Row::new().with("id", "r1").with("score", computed)]);

    let root = table.render(&RenderContext::default());
    assert_eq!(body_text(&root, 0), vec!["custom r1"]);
    assert_eq!(*seen.lock().unwrap(), vec!["Computed(...)".to_string()]);
    assert_eq!(evaluated.load(Ordering::SeqCst), 0);
}

#[test]
fn test_embedded_cell_passes_markup_through() {
    let table = Table::new(vec![Column::new("link", "Link")], TableConfig::new()).unwrap();
    let link = Element::new("a").attr("href", "/x").with_text("open");
    table.set_rows(vec![Row::new().with("link", link.clone())]);

    let root = table.render(&RenderContext::default());
    let cell = find_by_class(&root, "cell")[0];
    assert_eq!(cell.child_elements(), &[link]);
}

#[test]
fn test_head_rows() {
    let cx = RenderContext::default();
    let root = people().render(&cx);

    assert_eq!(root.id.as_deref(), Some("people"));
    assert!(root.has_class("table-root"));

    let filter_row = find_by_class(&root, "filter-row")[0];
    // Selection placeholder, two filter inputs, one placeholder for note.
    assert_eq!(filter_row.child_elements().len(), 4);
    assert_eq!(find_by_class(filter_row, "filter-input").len(), 2);
    let name_filter = find_element(&root, "people-filter-name").unwrap();
    assert_eq!(name_filter.get_attr("placeholder"), Some("Name"));
    assert_eq!(name_filter.get_attr("value"), Some(""));

    let headers = find_by_class(&root, "header");
    assert_eq!(headers.len(), 3);
    assert_eq!(headers[2].text_content(), "Note");
    let age_sort = find_element(&root, "people-sort-age").unwrap();
    assert_eq!(age_sort.get_attr("data-sort"), Some("none"));
    assert!(find_element(&root, "people-sort-note").is_none());

    let html = cx.to_html(&root);
    assert!(html.contains("width: 80px"));
    assert!(html.contains("text-align: right"));
}

#[test]
fn test_filter_row_hidden_when_not_filterable() {
    let table = Table::new(vec![Column::new("a", "A")], TableConfig::new()).unwrap();
    let root = table.render(&RenderContext::default());
    assert!(find_by_class(&root, "filter-row").is_empty());
    assert!(find_by_class(&root, "pagination-container").is_empty());
}

#[test]
fn test_body_shows_current_page_only() {
    let root = people().render(&RenderContext::default());
    assert_eq!(body_text(&root, 0), vec!["Ada", "Bob"]);
    assert_eq!(body_text(&root, 1), vec!["36", "41"]);
    assert_eq!(body_text(&root, 2), vec!["first", ""]);

    let label = find_by_class(&root, "pagination-label")[0];
    assert_eq!(label.text_content(), "1 of 2");
    let prev = find_element(&root, "people-prev").unwrap();
    assert!(prev.has_flag("disabled"));
    let next = find_element(&root, "people-next").unwrap();
    assert!(!next.has_flag("disabled"));
}

#[test]
fn test_dispatch_filter_input() {
    let table = people();
    let cx = RenderContext::default();
    table.render(&cx);

    let handled = cx.registry().dispatch(
        "people-filter-name",
        events::INPUT,
        &EventData::Input { text: "bo".into() },
    );
    assert!(handled);
    assert_eq!(table.filter("name").as_deref(), Some("bo"));

    let root = table.render(&cx);
    assert_eq!(body_text(&root, 0), vec!["Bob"]);
    let input = find_element(&root, "people-filter-name").unwrap();
    assert_eq!(input.get_attr("value"), Some("bo"));
}

#[test]
fn test_dispatch_sort_click() {
    let table = people();
    let cx = RenderContext::default();
    table.render(&cx);

    cx.registry().dispatch("people-sort-age", events::CLICK, &EventData::None);
    let root = table.render(&cx);
    assert_eq!(body_text(&root, 1), vec!["29", "36"]);
    let control = find_element(&root, "people-sort-age").unwrap();
    assert_eq!(control.get_attr("data-sort"), Some("asc"));
    assert_eq!(find_by_class(control, "sort-icon")[0].text_content(), "▲");

    cx.registry().dispatch("people-sort-age", events::CLICK, &EventData::None);
    let root = table.render(&cx);
    assert_eq!(body_text(&root, 1), vec!["41", "36"]);
    let control = find_element(&root, "people-sort-age").unwrap();
    assert_eq!(control.get_attr("data-sort"), Some("desc"));
}

#[test]
fn test_dispatch_pagination_buttons() {
    let table = people();
    let cx = RenderContext::default();
    table.render(&cx);

    cx.registry().dispatch("people-next", events::CLICK, &EventData::None);
    assert_eq!(table.page(), Some(1));

    // Next is disabled on the last page, so a fresh render registers no handler.
    cx.registry().clear();
    let root = table.render(&cx);
    assert_eq!(body_text(&root, 0), vec!["Cy"]);
    assert!(!cx.registry().dispatch("people-next", events::CLICK, &EventData::None));
    assert!(cx.registry().dispatch("people-prev", events::CLICK, &EventData::None));
    assert_eq!(table.page(), Some(0));
}

#[test]
fn test_dispatch_checkbox_change() {
    let table = people();
    let cx = RenderContext::default();
    table.render(&cx);

    cx.registry().dispatch(
        "people-select-b",
        events::CHANGE,
        &EventData::Change { checked: true },
    );
    assert_eq!(table.selected_ids(), vec![RowId::from("b")]);

    // A repeated `checked: true` does not deselect.
    cx.registry().dispatch(
        "people-select-b",
        events::CHANGE,
        &EventData::Change { checked: true },
    );
    assert!(table.is_selected(&RowId::from("b")));

    let root = table.render(&cx);
    assert!(find_element(&root, "people-select-b").unwrap().has_flag("checked"));
    assert!(!find_element(&root, "people-select-a").unwrap().has_flag("checked"));
    assert_eq!(find_by_class(&root, "selection-count")[0].text_content(), "1");

    cx.registry().dispatch(
        "people-select-b",
        events::CHANGE,
        &EventData::Change { checked: false },
    );
    assert!(table.selected_ids().is_empty());
    let root = table.render(&cx);
    assert_eq!(find_by_class(&root, "selection-count")[0].text_content(), "");
}

#[test]
fn test_render_uses_table_elements() {
    let root = people().render(&RenderContext::default());
    assert_eq!(find_by_tag(&root, "table").len(), 1);
    assert_eq!(find_by_tag(&root, "thead").len(), 1);
    assert_eq!(find_by_tag(&root, "tbody").len(), 1);
    assert_eq!(find_by_tag(&root, "tr").len(), 4);
}
