//! Bounding geometry and the capability to query it.

use std::sync::{Arc, RwLock};

/// An axis-aligned box in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Edges are inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Something whose current bounding box can be queried.
///
/// Components that position or size themselves from live geometry (charts,
/// popovers) hold one of these instead of a raw DOM handle.
pub trait Measure: Send + Sync {
    fn bounds(&self) -> Rect;
}

impl Measure for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// A rect that can change after it has been handed out.
///
/// Clones share the same value, so the owner of a layout can update it and
/// every holder observes the new bounds on the next query.
#[derive(Debug, Clone, Default)]
pub struct SharedRect {
    inner: Arc<RwLock<Rect>>,
}

impl SharedRect {
    pub fn new(rect: Rect) -> Self {
        Self {
            inner: Arc::new(RwLock::new(rect)),
        }
    }

    pub fn set(&self, rect: Rect) {
        match self.inner.write() {
            Ok(mut guard) => *guard = rect,
            Err(poisoned) => *poisoned.into_inner() = rect,
        }
    }
}

impl Measure for SharedRect {
    fn bounds(&self) -> Rect {
        match self.inner.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
