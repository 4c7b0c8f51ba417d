//! Interaction funnel from rendered controls back into component state.
//!
//! This module provides:
//! - `EventData`: payload delivered with an interaction
//! - `Handler`: closure type for handlers
//! - `HandlerRegistry`: stores handlers keyed by (element_id, event_type)
//!
//! Components register handlers while rendering, keyed by the ids of the
//! controls they emit. The host calls [`HandlerRegistry::dispatch`] when the
//! user interacts with one of those controls.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure that receives the event payload.
pub type Handler = Arc<dyn Fn(&EventData) + Send + Sync>;

/// Standard event names.
pub mod events {
    /// Button or header activation.
    pub const CLICK: &str = "on_click";
    /// Text input changed (every keystroke).
    pub const INPUT: &str = "on_input";
    /// Checkbox toggled.
    pub const CHANGE: &str = "on_change";
}

// =============================================================================
// Event Data
// =============================================================================

/// Event-specific data passed to handlers.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EventData {
    /// No event data.
    #[default]
    None,
    /// Text input value changed.
    Input {
        /// The full current text of the input.
        text: String,
    },
    /// Checkbox state changed.
    Change {
        /// The new checked state.
        checked: bool,
    },
}

impl EventData {
    /// Get the text from an Input event.
    pub fn text(&self) -> Option<&str> {
        match self {
            EventData::Input { text } => Some(text),
            _ => None,
        }
    }

    /// Get the checked state from a Change event.
    pub fn checked(&self) -> Option<bool> {
        match self {
            EventData::Change { checked } => Some(*checked),
            _ => None,
        }
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for element event handlers.
///
/// Maps (element_id, event_type) to handler closures. Hosts clear it before
/// each render pass so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's id
    /// - `event`: The event type (e.g., "on_click", "on_input")
    /// - `handler`: The handler closure
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Invoke the handler for an element event.
    ///
    /// Returns false when nothing is registered. The registry lock is released
    /// before the handler runs, so handlers may re-render and re-register.
    pub fn dispatch(&self, element_id: &str, event: &str, data: &EventData) -> bool {
        match self.get(element_id, event) {
            Some(handler) => {
                log::trace!("Dispatching {} to {}", event, element_id);
                handler(data);
                true
            }
            None => {
                log::debug!("No {} handler registered for {}", event, element_id);
                false
            }
        }
    }

    /// Remove every handler.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.len())
            .finish()
    }
}
