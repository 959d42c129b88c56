//! Core library surface for the ebookstore inventory manager.
//!
//! The binary is a thin wrapper: it opens the store, bootstraps the schema and
//! hands control to the menu loop. Everything here is public so tests can
//! drive the same pieces with in-memory databases and buffers.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

pub use config::Config;
pub use db::{bootstrap, Bootstrap, Store};
pub use error::BookError;
pub use models::{Book, BookUpdate};
pub use ui::{run_app, run_interactive, startup, App, Command};
