//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready types computed from state
//! - [`renderer`]: Rendering entry point
//! - [`components`]: Per-section renderers
//! - [`helpers`]: Cursor, padding and highlight utilities
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, Notice, SearchBarInfo, UIViewModel};
