pub mod element;
pub mod event;
pub mod geometry;
pub mod render;
pub mod scene;
pub mod transitions;
pub mod types;

pub use element::{Content, Element};
pub use event::{EventKind, Listener, ListenerId, Window, WindowEvent};
pub use geometry::{Measure, Rect, SharedRect};
pub use render::render;
pub use scene::{AttrValue, NodeId, Scene, SceneNode};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
