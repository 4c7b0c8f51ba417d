//! Table Example
//!
//! Builds an employee table with filtering, sorting, selection, and
//! pagination, then drives it through the handler registry the way a host
//! page would and prints the markup after each step.

use std::fs::File;

use lintel::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const EMPLOYEES: &str = r#"[
    {"id": "e1", "name": "Ada Lovelace", "department": "Research", "salary": 142000, "remote": true},
    {"id": "e2", "name": "Grace Hopper", "department": "Compilers", "salary": 138000, "remote": false},
    {"id": "e3", "name": "Alan Turing", "department": "Research", "salary": 151000, "remote": true},
    {"id": "e4", "name": "Edsger Dijkstra", "department": "Algorithms", "salary": 127000, "remote": false},
    {"id": "e5", "name": "Barbara Liskov", "department": "Languages", "salary": 133000, "remote": true},
    {"id": "e6", "name": "Donald Knuth", "department": "Algorithms", "salary": 129000, "remote": false},
    {"id": "e7", "name": "Frances Allen", "department": "Compilers", "salary": 136000, "remote": true}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("table.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut rows = Row::from_json_array(EMPLOYEES)?;
    for row in &mut rows {
        row.insert(
            "initials",
            CellValue::computed(|row: &Row| {
                let name = row.display("name").plain_text();
                name.split_whitespace()
                    .filter_map(|part| part.chars().next())
                    .collect::<String>()
                    .into()
            }),
        );
    }

    let config = TableConfig::from_json(
        r#"{
            "id": "employees",
            "filterable": true,
            "sortable": true,
            "selectable": true,
            "unique_id_key": "id",
            "items_per_page": 3
        }"#,
    )?;

    let table = Table::new(
        vec![
            Column::new("initials", "").width("3em").filterable(false).sortable(false),
            Column::new("name", "Name"),
            Column::new("department", "Department"),
            Column::new("salary", "Salary")
                .numeric()
                .filterable(false)
                .custom_value(|value: &CellValue, _: &Row| match value {
                    CellValue::Number(n) => format!("${:.0}k", n / 1000.0).into(),
                    other => other.clone(),
                }),
            Column::new("remote", "Remote").sortable(false),
        ],
        config,
    )?
    .on_selection_change(|ids: &[RowId]| {
        let ids: Vec<&str> = ids.iter().map(RowId::as_str).collect();
        println!("selection: {:?}", ids);
    });
    table.set_rows(rows);

    let cx = RenderContext::default();
    let registry = cx.registry().clone();

    println!("{}\n", cx.to_html(&table.render(&cx)));

    registry.dispatch(
        "employees-filter-department",
        events::INPUT,
        &EventData::Input { text: "re".into() },
    );
    registry.dispatch("employees-sort-salary", events::CLICK, &EventData::None);
    registry.dispatch("employees-sort-salary", events::CLICK, &EventData::None);
    println!("{}\n", cx.to_html(&table.render(&cx)));

    registry.dispatch(
        "employees-select-e3",
        events::CHANGE,
        &EventData::Change { checked: true },
    );
    registry.dispatch("employees-next", events::CLICK, &EventData::None);
    println!("{}", cx.to_html(&table.render(&cx)));

    Ok(())
}
