use std::collections::HashMap;

use thiserror::Error;

use super::StyleValue;

/// A theme provides named style variables.
pub trait Theme: Send + Sync {
    /// Resolve a variable name to a CSS value.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&str>;
}

/// Theme that resolves nothing.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<&str> {
        None
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Base variables other entries are derived from.
const BASE_VARIABLES: &[(&str, &str)] = &[
    ("primary-color-1", "#4e7494"),
    ("success-color", "#8de057"),
    ("error-color", "#e05757"),
    ("warning-color", ""),
    ("separator-border-color", "#e0e0e0"),
    ("selectable-hover-color", "#becad4"),
];

const GLOBAL_VARIABLES: &[(&str, &str)] = &[
    ("font-family", "Roboto"),
    ("font-size", "16px"),
    ("color", "#333"),
    ("shadow", "0 3px 6px rgba(0,0,0,0.16), 0 3px 6px rgba(0,0,0,0.23)"),
    ("card-border-radius", "3px"),
    ("input-border-color", "#c3c3c3"),
    ("input-padding", ".375rem .75rem"),
    ("input-font-size", "1rem"),
    ("popover-max-width", "120px"),
    ("popover-min-width", "320px"),
    ("popover-padding", ".75rem"),
];

/// Variables computed from a base variable.
const DERIVED_VARIABLES: &[(&str, &str)] = &[
    ("button-color", "primary-color-1"),
    ("card-border-color", "primary-color-1"),
    ("table-header-row-border", "primary-color-1"),
    ("table-row-border", "separator-border-color"),
    ("list-item-border", "separator-border-color"),
    ("list-item-link-hover", "selectable-hover-color"),
    ("line-chart-default-line-color", "primary-color-1"),
    ("input-error-color", "error-color"),
];

/// The library's stock style variables.
///
/// Built once at startup (optionally through [`ThemeBuilder`]) and injected
/// into rendering; it is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    variables: HashMap<String, String>,
}

impl DefaultTheme {
    pub fn new() -> Self {
        ThemeBuilder::new().build()
    }

    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}

/// Startup-time overrides for [`DefaultTheme`].
///
/// Overriding a base variable (e.g. `primary-color-1`) also moves every
/// variable derived from it, unless that derived variable is overridden too.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    base: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self {
            base: BASE_VARIABLES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            overrides: HashMap::new(),
        }
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if self.base.contains_key(&name) {
            self.base.insert(name, value);
        } else {
            self.overrides.insert(name, value);
        }
        self
    }

    /// Apply overrides from a flat JSON object of `name -> value` strings.
    pub fn merge_json(mut self, json: &str) -> Result<Self, ThemeError> {
        let values: HashMap<String, String> = serde_json::from_str(json)?;
        for (name, value) in values {
            self = self.set(name, value);
        }
        Ok(self)
    }

    pub fn build(self) -> DefaultTheme {
        let mut variables: HashMap<String, String> = GLOBAL_VARIABLES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        for (name, source) in DERIVED_VARIABLES {
            if let Some(value) = self.base.get(*source) {
                variables.insert(name.to_string(), value.clone());
            }
        }

        variables.extend(self.base);
        variables.extend(self.overrides);

        DefaultTheme { variables }
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Context for resolving style values against a theme.
pub struct StyleContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> StyleContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a value to concrete CSS text.
    /// Unknown variables resolve to None and the declaration is dropped.
    pub fn resolve(&self, value: &StyleValue) -> Option<String> {
        match value {
            StyleValue::Literal(s) => Some(s.clone()),
            StyleValue::Var(name) => {
                let resolved = self.theme.resolve(name);
                if resolved.is_none() {
                    log::debug!("Unresolved style variable: {}", name);
                }
                resolved.map(str::to_string)
            }
        }
    }
}
