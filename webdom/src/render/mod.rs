//! HTML serialization of an element tree.

use std::fmt::Write;

use crate::element::{Content, Element};
use crate::types::{StyleContext, Theme};

/// Elements that never have a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Render an element tree to HTML, resolving style variables against `theme`.
pub fn render(root: &Element, theme: &dyn Theme) -> String {
    let ctx = StyleContext::new(theme);
    let mut out = String::new();
    render_element(root, &ctx, &mut out);
    out
}

fn render_element(element: &Element, ctx: &StyleContext, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    if let Some(id) = &element.id {
        write_attr(out, "id", id);
    }
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attrs {
        write_attr(out, name, value);
    }
    for flag in &element.flags {
        out.push(' ');
        out.push_str(flag);
    }

    let style = element
        .style
        .declarations
        .iter()
        .filter_map(|(property, value)| {
            ctx.resolve(value).map(|v| format!("{}: {}", property, v))
        })
        .collect::<Vec<_>>()
        .join("; ");
    if !style.is_empty() {
        write_attr(out, "style", &style);
    }

    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Html(html) => out.push_str(html),
        Content::Children(children) => {
            for child in children {
                render_element(child, ctx, out);
            }
        }
    }

    let _ = write!(out, "</{}>", element.tag);
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, escape(value));
}

/// Escape text for use in HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
