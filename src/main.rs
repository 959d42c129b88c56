//! Binary entry point: bring up the database, make sure the sample inventory
//! exists, and run the menu until the operator quits.
use std::io;

use ebookstore::logging::{init_logging, DEFAULT_LEVEL};
use ebookstore::{run_interactive, startup, Config, Store};

/// Fatal problems (for example an unwritable database file) bubble up to the
/// terminal through the returned `Result`.
fn main() -> anyhow::Result<()> {
    let config = Config::resolve();

    let _logger = config
        .log_dir
        .as_deref()
        .and_then(|dir| match init_logging(DEFAULT_LEVEL, dir) {
            Ok(handle) => Some(handle),
            Err(err) => {
                eprintln!("file logging disabled: {err:#}");
                None
            }
        });

    let mut store = Store::open(&config.db_path)?;
    startup(&mut store, &mut io::stdout())?;

    let store = run_interactive(store)?;
    store.close()
}
