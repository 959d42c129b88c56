use anyhow::Error;
use crossterm::style::Stylize;

/// Severity of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

/// Colour a status line for a terminal. Plain text is returned when `styled`
/// is false so piped output stays free of escape codes.
pub(crate) fn render_status(text: &str, kind: StatusKind, styled: bool) -> String {
    if !styled {
        return text.to_string();
    }
    match kind {
        StatusKind::Info => text.green().to_string(),
        StatusKind::Error => text.red().to_string(),
    }
}

/// Extract the most relevant error message from a chained error.
pub fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
