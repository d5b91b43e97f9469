// NOTE: Report Architecture Rationale
//
// Why a pure engine over record snapshots?
// - Reports must not observe mutations that happen after they start;
//   handlers take one snapshot from the store and pass it down
// - Re-rendering the same snapshot is byte-identical, which makes the
//   layer trivially testable
//
// Why a (text, style) span stream instead of ANSI strings?
// - The palette is a visual side channel with no semantic meaning;
//   keeping it out of the text lets any target (terminal, GUI widget,
//   plain file) apply its own mapping
// - Tests compare the plain text without scrubbing escape codes

mod aggregate;
mod histogram;
mod scale;
mod scatter;
mod span;

pub mod render;

pub use aggregate::{KeyBy, group_by, overall, percentage};
pub use histogram::{DEFAULT_BINS, HistBin, histogram};
pub use scale::{BAR_WIDTH, DUAL_BAR_WIDTH, HIST_BAR_WIDTH, bar_len};
pub use scatter::{DEFAULT_GRID, ScatterGrid, scatter};
pub use span::{Line, PALETTE_SIZE, Span, Style, render_plain};
