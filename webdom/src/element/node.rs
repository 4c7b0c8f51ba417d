use super::Content;
use crate::types::{Style, StyleValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,

    // Attributes, in insertion order
    pub attrs: Vec<(String, String)>,
    /// Boolean attributes (`disabled`, `checked`, ...). Rendered bare.
    pub flags: Vec<String>,

    // Visual
    pub style: Style,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    /// A `span` holding escaped text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::span().content(Content::Text(content.into()))
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn th() -> Self {
        Self::new("th")
    }

    pub fn td() -> Self {
        Self::new("td")
    }

    pub fn input(kind: &str) -> Self {
        Self::new("input").attr("type", kind)
    }

    pub fn button() -> Self {
        Self::new("button").attr("type", "button")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn class_if(self, cond: bool, class: impl Into<String>) -> Self {
        if cond { self.class(class) } else { self }
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        self.flags.retain(|f| *f != name);
        if on {
            self.flags.push(name);
        }
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = self.style.merge(style);
        self
    }

    pub fn css(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style = self.style.set(property, value);
        self
    }

    // Content
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.content(Content::Text(text.into()))
    }

    // Queries

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|f| f == name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::Text(s) => out.push_str(s),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Content::None | Content::Html(_) => {}
        }
    }
}
