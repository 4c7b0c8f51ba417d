//! Button component.

use webdom::{Element, StyleValue};

use crate::handlers::{Handler, HandlerRegistry, events};

/// A clickable button builder.
///
/// This is a stateless component that creates a `<button>` element.
///
/// # Example
///
/// ```ignore
/// let element = Button::new()
///     .label("Next")
///     .id("orders-next")
///     .disabled(!has_next)
///     .build(registry, Some(on_next));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Button {
    label: Option<String>,
    id: Option<String>,
    class: Option<String>,
    disabled: bool,
}

impl Button {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the button id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add an extra class next to `button`.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Disabled buttons render the `disabled` flag and don't register handlers.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Build the button element.
    ///
    /// Registers `on_click` under the button id if provided and not disabled.
    pub fn build(self, registry: &HandlerRegistry, on_click: Option<Handler>) -> Element {
        let label = self.label.unwrap_or_default();
        let id = self.id.unwrap_or_else(|| "button".into());

        let mut elem = Element::button()
            .id(&id)
            .class("button")
            .class_if(self.disabled, "disabled")
            .flag("disabled", self.disabled)
            .css("background-color", StyleValue::var("button-color"))
            .child(Element::text(label).class("button-text"));

        if let Some(class) = self.class {
            elem = elem.class(class);
        }

        // Only register handler if not disabled
        if !self.disabled
            && let Some(handler) = on_click
        {
            registry.register(&id, events::CLICK, handler);
        }

        elem
    }
}
