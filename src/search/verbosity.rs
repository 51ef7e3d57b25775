use clap;

/// How chatty the solver's stderr log is. The search itself only prints the
/// plan and the outcome on stdout; everything else goes through `tracing`
/// at the level selected here.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Problem summary and search statistics.
    Normal,
    /// Adds engine decisions, such as the budget cut-off firing.
    Verbose,
    /// Full trace output.
    Trace,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Quiet => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Trace => tracing::Level::TRACE,
        }
    }
}
