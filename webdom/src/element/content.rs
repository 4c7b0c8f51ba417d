#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Escaped text.
    Text(String),
    Children(Vec<super::Element>),
    /// Pre-rendered markup emitted verbatim. The caller vouches for it.
    Html(String),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Content::None => true,
            Content::Text(s) | Content::Html(s) => s.is_empty(),
            Content::Children(c) => c.is_empty(),
        }
    }
}
