/// A CSS value, either literal or looked up in the theme at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    Literal(String),
    /// Theme variable name, resolved through `StyleContext`.
    Var(String),
}

impl StyleValue {
    pub fn var(name: impl Into<String>) -> Self {
        StyleValue::Var(name.into())
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Literal(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Literal(value)
    }
}

/// Inline style declarations, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub declarations: Vec<(String, StyleValue)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing an earlier declaration of the same name.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    pub fn var(self, property: impl Into<String>, name: impl Into<String>) -> Self {
        self.set(property, StyleValue::var(name))
    }

    /// Declarations from `other` win.
    pub fn merge(mut self, other: Style) -> Self {
        for (property, value) in other.declarations {
            self = self.set(property, value);
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
