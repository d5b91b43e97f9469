// NOTE: CLI Architecture Rationale
//
// Why snapshot-then-render?
// - Handlers take one snapshot (or one aggregate query) from the store
//   and hand it to recylog-report; no widget-style shared state exists
//   between queries and display
// - The renderer consumes the report's (text, style) spans and decides
//   locally whether to emit color, so report output is identical under
//   pipes, files and terminals apart from styling

mod args;
mod commands;
mod handlers;
mod output;

pub use args::{AnalysisMode, ChartKind, Cli, ColorChoice, Commands, OutputFormat};
pub use commands::run;
pub use output::ConsoleRenderer;
