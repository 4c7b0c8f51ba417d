mod style;
mod theme;

pub use style::{Style, StyleValue};
pub use theme::{DefaultTheme, EmptyTheme, StyleContext, Theme, ThemeBuilder, ThemeError};
