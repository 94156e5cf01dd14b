// The binary in main.rs drives the terminal; everything it needs lives here so
// integration tests can exercise the same fetch -> normalize -> render path.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod lesson;
pub mod logging;
pub mod session;
pub mod store;
pub mod ui;
