// Domain models for the site header
// Pure Rust, no framework dependencies

pub mod header;
pub mod navigation;

pub use header::HeaderViewState;
pub use navigation::{nav_items, NavItem, NavTarget, Viewer};
