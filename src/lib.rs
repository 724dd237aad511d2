// Public API exports (shared between client and server)
pub mod domain;
pub mod shared;
pub mod config;

// App is always available in fullstack mode
pub mod app;
