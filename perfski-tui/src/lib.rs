//! perfski TUI - the skier performance dashboard in the terminal.
//!
//! Sections:
//! 1. Données - styled record table
//! 2. Statistiques - summary statistics table
//! 3. Graphiques - speed bar chart and distance/time scatter
//! 4. Classement - speed ranking
//! 5. Analyse détaillée - skier selector and detail
//! 6. Aide - keyboard shortcuts

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel, StatusLevel};
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
