//! Full-screen VPN settings editor.

mod app;
mod features;
pub mod input;
pub mod layout;
mod render;
pub mod screen;
mod state;
mod ui;

pub use app::run_settings;
pub use layout::{PaneLayout, RenderError, TerminalGeometry, compute_layout};
pub use state::{Category, Collaborators, HoverDirection, NavigationState, SessionExit, SettingsApp, TipLine};
