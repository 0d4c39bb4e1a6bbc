//! Rendering: terminal lifecycle, theme, and the widget tree.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
