use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use log::info;

use super::app::App;
use crate::db::{bootstrap, Bootstrap, Store};

/// Ensure the schema and sample rows exist, announcing the database only on
/// the run that actually created the table. Later runs stay silent.
pub fn startup<W: Write>(store: &mut Store, out: &mut W) -> Result<Bootstrap> {
    let outcome = bootstrap(store)?;
    if outcome == Bootstrap::Created {
        writeln!(out, "Database created successfully!").context("failed to write status")?;
    }
    Ok(outcome)
}

/// Keep stepping through the menu until the operator quits.
pub fn run_app<R: BufRead, W: Write>(app: &mut App<R, W>) -> Result<()> {
    while !app.step()? {}
    info!("event=app_stop module=ui status=ok");
    Ok(())
}

/// Drive a session over the process's stdin and stdout, handing the store
/// back afterwards so the caller can close it.
pub fn run_interactive(store: Store) -> Result<Store> {
    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut app = App::new(store, io::stdin().lock(), stdout.lock()).with_styling(styled);
    run_app(&mut app)?;
    Ok(app.into_store())
}
