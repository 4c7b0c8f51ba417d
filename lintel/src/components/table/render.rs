//! Markup for the Table component.

use webdom::{Element, StyleValue};

use super::Table;
use super::cell::{CellContent, Row};
use super::column::Column;
use super::pagination::Pagination;
use super::policy::SortDirection;
use super::state::TableInner;
use crate::components::button::Button;
use crate::context::RenderContext;
use crate::handlers::{HandlerRegistry, events};

/// Sort indicator icons.
const ICON_UNSORTED: &str = "↕";
const ICON_ASC: &str = "▲";
const ICON_DESC: &str = "▼";

impl Table {
    /// Render the table and register handlers for its controls in the
    /// context's registry.
    ///
    /// Control ids are derived from the table id: `{id}-filter-{key}`,
    /// `{id}-sort-{key}`, `{id}-select-{row id}`, `{id}-prev`, `{id}-next`.
    pub fn render(&self, cx: &RenderContext) -> Element {
        let registry = cx.registry();
        self.inner.read(|inner| {
            log::trace!("Rendering table {}", inner.config.id);

            let table = Element::table()
                .class("table")
                .child(self.render_head(inner, registry))
                .child(self.render_body(inner, registry));

            let mut root = Element::div()
                .id(&inner.config.id)
                .class("table-root")
                .child(table);

            if let Some(pagination) = &inner.pagination {
                root = root.child(self.render_pagination(&inner.config.id, pagination, registry));
            }
            root
        })
    }

    fn render_head(&self, inner: &TableInner, registry: &HandlerRegistry) -> Element {
        let mut head = Element::thead();

        if inner.shows_filters() {
            let mut filter_row = Element::tr().class("filter-row");
            if inner.config.selectable {
                filter_row = filter_row.child(Element::th().class("filter-placeholder"));
            }
            for column in &inner.columns {
                filter_row = filter_row.child(self.render_filter_cell(inner, column, registry));
            }
            head = head.child(filter_row);
        }

        let mut header_row = Element::tr()
            .class("header-row")
            .css("border-bottom-color", StyleValue::var("table-header-row-border"));
        if inner.config.selectable {
            let count = inner.selection.len();
            let text = if count > 0 { count.to_string() } else { String::new() };
            header_row = header_row.child(Element::th().class("selection-count").with_text(text));
        }
        for column in &inner.columns {
            header_row = header_row.child(self.render_header_cell(inner, column, registry));
        }
        head.child(header_row)
    }

    fn render_filter_cell(
        &self,
        inner: &TableInner,
        column: &Column,
        registry: &HandlerRegistry,
    ) -> Element {
        if !inner.column_filterable(column) {
            return Element::th().class("filter-placeholder");
        }

        let id = format!("{}-filter-{}", inner.config.id, column.key);
        let query = inner
            .filters
            .get(&column.key)
            .map(|f| f.query.clone())
            .unwrap_or_default();
        registry.register(&id, events::INPUT, self.filter_handler(&column.key));

        Element::th().class("filter-cell").child(
            Element::input("text")
                .id(id)
                .class("filter-input")
                .attr("value", query)
                .attr("placeholder", column.text.clone()),
        )
    }

    fn render_header_cell(
        &self,
        inner: &TableInner,
        column: &Column,
        registry: &HandlerRegistry,
    ) -> Element {
        let th = Element::th()
            .class("header")
            .css("width", column.css_width())
            .css("text-align", column.alignment().as_css());

        if !inner.column_sortable(column) {
            return th.with_text(column.text.clone());
        }

        let direction = inner
            .sorter
            .as_ref()
            .filter(|s| s.column_key == column.key)
            .map(|s| s.direction);
        let (state, icon) = match direction {
            None => ("none", ICON_UNSORTED),
            Some(SortDirection::Asc) => ("asc", ICON_ASC),
            Some(SortDirection::Desc) => ("desc", ICON_DESC),
        };

        let id = format!("{}-sort-{}", inner.config.id, column.key);
        registry.register(&id, events::CLICK, self.sort_handler(&column.key));

        th.child(
            Element::span()
                .id(id)
                .class("sort-control")
                .attr("data-sort", state)
                .child(Element::text(column.text.clone()))
                .child(Element::text(icon).class("sort-icon")),
        )
    }

    fn render_body(&self, inner: &TableInner, registry: &HandlerRegistry) -> Element {
        let rows = inner
            .visible_indices()
            .iter()
            .map(|&i| self.render_row(inner, &inner.rows[i], registry));
        Element::tbody().children(rows)
    }

    fn render_row(&self, inner: &TableInner, row: &Row, registry: &HandlerRegistry) -> Element {
        let mut tr = Element::tr()
            .class("row")
            .css("border-bottom-color", StyleValue::var("table-row-border"));

        if inner.config.selectable
            && let Some(row_id) = inner.row_id(row)
        {
            let id = format!("{}-select-{}", inner.config.id, row_id);
            let checked = inner.selection.contains(&row_id);
            registry.register(&id, events::CHANGE, self.select_handler(row_id));
            tr = tr.child(
                Element::td().class("selection-cell").child(
                    Element::input("checkbox")
                        .id(id)
                        .flag("checked", checked),
                ),
            );
        }

        for column in &inner.columns {
            let content = column.cell_value(row).resolve(row);
            let td = Element::td()
                .class("cell")
                .css("text-align", column.alignment().as_css());
            tr = tr.child(match content {
                CellContent::Text(text) => td.with_text(text),
                embedded @ CellContent::Embedded(_) => td.child(embedded.into_element()),
            });
        }
        tr
    }

    fn render_pagination(
        &self,
        table_id: &str,
        pagination: &Pagination,
        registry: &HandlerRegistry,
    ) -> Element {
        let prev = Button::new()
            .label("Prev")
            .id(format!("{}-prev", table_id))
            .disabled(!pagination.has_prev())
            .build(registry, Some(self.prev_handler()));
        let next = Button::new()
            .label("Next")
            .id(format!("{}-next", table_id))
            .disabled(!pagination.has_next())
            .build(registry, Some(self.next_handler()));

        Element::div()
            .class("pagination-container")
            .child(prev)
            .child(Element::text(pagination.label()).class("pagination-label"))
            .child(next)
    }
}
