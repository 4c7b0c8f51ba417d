use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Window and document level events.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// Viewport resized
    Resize { width: f64, height: f64 },
    /// Click anywhere in the document
    Click {
        target: Option<String>,
        x: f64,
        y: f64,
    },
}

impl WindowEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            WindowEvent::Resize { .. } => EventKind::Resize,
            WindowEvent::Click { .. } => EventKind::Click,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    Click,
}

/// Handle returned by [`Window::add_listener`], used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

pub type Listener = Arc<dyn Fn(&WindowEvent) + Send + Sync>;

struct Registration {
    id: ListenerId,
    kind: EventKind,
    listener: Listener,
}

/// Event target for window/document listeners.
///
/// Cheap to clone; clones share the listener list. Components that register
/// here must remove their listeners on unmount.
#[derive(Clone, Default)]
pub struct Window {
    listeners: Arc<RwLock<Vec<Registration>>>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId::new();
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push(Registration { id, kind, listener });
        }
        id
    }

    /// Returns false if the listener was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let Ok(mut listeners) = self.listeners.write() else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|r| r.id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .read()
            .map(|l| l.iter().filter(|r| r.kind == kind).count())
            .unwrap_or(0)
    }

    /// Deliver an event to every listener of its kind.
    ///
    /// Listeners are collected before invocation so a listener may add or
    /// remove registrations while running.
    pub fn dispatch(&self, event: &WindowEvent) {
        let kind = event.kind();
        let targets: Vec<Listener> = match self.listeners.read() {
            Ok(listeners) => listeners
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| Arc::clone(&r.listener))
                .collect(),
            Err(_) => return,
        };
        log::trace!("Dispatching {:?} to {} listener(s)", kind, targets.len());
        for listener in targets {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.listeners.read().map(|l| l.len()).unwrap_or(0);
        f.debug_struct("Window").field("listeners", &count).finish()
    }
}
