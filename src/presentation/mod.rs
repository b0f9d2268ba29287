//! Presentation layer with UI components and event handling.

/// Event handling.
pub mod events;
/// Screen stack backing the navigation port.
pub mod navigation;
/// Accent color and derived styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
