use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Horizontal bars of quantity and value totals per type
    Bars,
    /// Percentage share listing per type
    Pie,
    /// Dash-run series per type
    Lines,
    /// Binned value/quantity distributions
    Histogram,
    /// Quantity vs value occupancy grid
    Scatter,
    /// Dual quantity/value bars per type and location
    Compare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnalysisMode {
    /// Overall, per-type and per-location breakdown with shares
    Full,
    /// Qualitative trend notes
    Trends,
    /// Qualitative outlook notes
    Forecast,
}
