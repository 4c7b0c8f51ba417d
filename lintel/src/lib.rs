pub mod components;
pub mod context;
pub mod debounce;
pub mod error;
pub mod handlers;
pub mod state;

pub use context::RenderContext;
pub use error::ConfigError;
pub use handlers::{EventData, Handler, HandlerRegistry};

pub mod prelude;
