//! Render context injected into every component.

use std::sync::Arc;

use webdom::{DefaultTheme, Element, Theme};

use crate::handlers::HandlerRegistry;

/// What components need while rendering: the style variables chosen at
/// startup and the registry their interactive controls report into.
///
/// Built once by the host and passed down the render tree; components never
/// consult global style state.
#[derive(Clone)]
pub struct RenderContext {
    theme: Arc<dyn Theme>,
    registry: HandlerRegistry,
}

impl RenderContext {
    pub fn new(theme: Arc<dyn Theme>) -> Self {
        Self {
            theme,
            registry: HandlerRegistry::new(),
        }
    }

    /// Share an existing registry, e.g. one the host dispatches into.
    pub fn with_registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Serialize an element rendered with this context.
    pub fn to_html(&self, element: &Element) -> String {
        webdom::render(element, self.theme.as_ref())
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(Arc::new(DefaultTheme::new()))
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
