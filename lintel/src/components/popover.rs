//! Popover component - a floating container anchored below another element.

use std::sync::Arc;

use webdom::{Element, EventKind, ListenerId, Measure, StyleValue, Window, WindowEvent};

use crate::state::State;

/// Space between the popover and its anchor or the viewport edge.
pub const CONTAINER_SPACER: f64 = 5.0;

/// Offset of the popover within its positioning parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverPosition {
    pub left: f64,
    pub top: f64,
}

/// Where the popover sits below `anchor`, pulled left when it would overflow
/// a viewport `viewport_width` wide.
pub fn position_below(
    anchor: &webdom::Rect,
    container_width: f64,
    viewport_width: f64,
) -> PopoverPosition {
    let overflow = viewport_width - anchor.x - container_width;
    let left = if overflow < 0.0 {
        anchor.x + overflow - CONTAINER_SPACER
    } else {
        anchor.x
    };
    PopoverPosition {
        left,
        top: anchor.bottom() + CONTAINER_SPACER,
    }
}

/// Geometry the popover positions itself from.
#[derive(Clone)]
pub struct PopoverProps {
    /// Element the popover opens below
    pub anchor: Arc<dyn Measure>,
    /// The popover's own container
    pub container: Arc<dyn Measure>,
    /// The document body
    pub viewport: Arc<dyn Measure>,
}

struct PopoverInner {
    props: PopoverProps,
    visible: bool,
    /// Set while the open animation runs; clicks outside are ignored
    animating: bool,
    position: Option<PopoverPosition>,
}

impl PopoverInner {
    fn reposition(&mut self) {
        let anchor = self.props.anchor.bounds();
        let container = self.props.container.bounds();
        let viewport = self.props.viewport.bounds();
        self.position = Some(position_below(&anchor, container.width, viewport.width));
    }
}

/// A popover whose visibility is owned by the parent.
///
/// The popover never hides itself: a click outside it calls the close-request
/// callback and the parent decides.
#[derive(Clone)]
pub struct Popover {
    id: String,
    inner: State<PopoverInner>,
    on_close_request: Arc<dyn Fn() + Send + Sync>,
    listener: State<Option<(Window, ListenerId)>>,
}

impl Popover {
    pub fn new<F>(id: impl Into<String>, props: PopoverProps, on_close_request: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            inner: State::new(PopoverInner {
                props,
                visible: false,
                animating: false,
                position: None,
            }),
            on_close_request: Arc::new(on_close_request),
            listener: State::new(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position against the anchor and listen for document clicks.
    pub fn mount(&self, window: &Window) {
        self.inner.update(PopoverInner::reposition);

        let popover = self.clone();
        let id = window.add_listener(
            EventKind::Click,
            Arc::new(move |event: &WindowEvent| popover.handle_click(event)),
        );
        let previous = self.listener.update(|l| l.replace((window.clone(), id)));
        if let Some((previous_window, previous)) = previous {
            log::warn!("Popover {} mounted twice; replacing listener", self.id);
            previous_window.remove_listener(previous);
        }
    }

    /// Remove the document click listener.
    pub fn unmount(&self) {
        if let Some((window, id)) = self.listener.update(Option::take) {
            window.remove_listener(id);
        }
    }

    /// Apply the parent's visibility. Opening repositions and starts the open
    /// animation.
    pub fn set_visible(&self, visible: bool) {
        self.inner.update(|inner| {
            if visible && !inner.visible {
                inner.reposition();
                inner.animating = true;
                log::debug!("Popover opening");
            }
            inner.visible = visible;
        });
    }

    /// The open animation finished.
    pub fn transition_end(&self) {
        self.inner.update(|inner| inner.animating = false);
    }

    pub fn is_visible(&self) -> bool {
        self.inner.read(|inner| inner.visible)
    }

    pub fn is_animating(&self) -> bool {
        self.inner.read(|inner| inner.animating)
    }

    pub fn position(&self) -> Option<PopoverPosition> {
        self.inner.read(|inner| inner.position)
    }

    /// Request close for a click outside the popover unless the open
    /// animation is running.
    pub fn handle_click(&self, event: &WindowEvent) {
        let WindowEvent::Click { target, x, y } = event else {
            return;
        };
        let request = self.inner.read(|inner| {
            if inner.animating {
                return false;
            }
            let on_self = target.as_deref() == Some(self.id.as_str());
            let inside = inner.props.container.bounds().contains(*x, *y);
            !(on_self || inside)
        });
        if request {
            log::debug!("Popover {} close requested", self.id);
            (self.on_close_request)();
        }
    }

    pub fn render(&self, children: Vec<Element>) -> Element {
        self.inner.read(|inner| {
            let mut root = Element::div()
                .id(&self.id)
                .class("popover")
                .class_if(inner.visible, "visible")
                .css("max-width", StyleValue::var("popover-max-width"))
                .css("min-width", StyleValue::var("popover-min-width"))
                .css("padding", StyleValue::var("popover-padding"))
                .css("box-shadow", StyleValue::var("shadow"));
            if let Some(position) = inner.position {
                root = root
                    .css("left", format!("{}px", position.left))
                    .css("top", format!("{}px", position.top));
            }
            root.children(children)
        })
    }
}

impl std::fmt::Debug for Popover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popover")
            .field("id", &self.id)
            .field("visible", &self.is_visible())
            .field("animating", &self.is_animating())
            .finish()
    }
}
