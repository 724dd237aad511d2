// Custom Dioxus hooks
pub mod use_window_scroll;

pub use use_window_scroll::use_window_scroll;
