//! File-based diagnostics. Log records never reach stdout because the menu
//! dialogue owns the terminal.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

const LOG_FILE_BASENAME: &str = "ebookstore";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Default level used by the binary.
pub const DEFAULT_LEVEL: &str = "info";

/// Start a size-rotated file logger inside `log_dir`.
///
/// The returned handle must be kept alive for the lifetime of the process;
/// dropping it flushes and stops the logger.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory `{}`", log_dir.display()))?;

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    info!(
        "event=app_start module=core status=ok version={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );

    Ok(handle)
}
