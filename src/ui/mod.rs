//! Menu-driven front end over standard input and output.

mod app;
mod forms;
mod helpers;
mod menu;
mod terminal;

pub use app::App;
pub use helpers::surface_error;
pub use menu::Command;
pub use terminal::{run_app, run_interactive, startup};
