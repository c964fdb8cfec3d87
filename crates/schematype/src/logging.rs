use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

// Binary, keyword loader, and conversion routines.
const WORKSPACE_TARGETS: [&str; 3] = ["schematype", "schematype_keyword", "schematype_value"];

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// `level` applies to the schematype crates; other targets never go below warn.
fn targets(level: LogLevel) -> Targets {
    let level = level.as_filter();
    Targets::new()
        .with_default(level.min(LevelFilter::WARN))
        .with_targets(WORKSPACE_TARGETS.map(|target| (target, level)))
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let filter = targets(level);
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(matches!(level, LogLevel::Debug | LogLevel::Trace));

    let _ = match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(layer.with_filter(filter))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(layer.json().with_filter(filter))
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;

    #[test]
    fn levels_map_to_filters() {
        assert_eq!(LogLevel::Warn.as_filter(), LevelFilter::WARN);
        assert_eq!(LogLevel::Trace.as_filter(), LevelFilter::TRACE);
        assert!(LogLevel::Error.as_filter() < LogLevel::Debug.as_filter());
    }

    #[test]
    fn level_applies_to_workspace_crates() {
        let filter = targets(LogLevel::Debug);
        assert!(filter.would_enable("schematype::cmd::load", &Level::DEBUG));
        assert!(filter.would_enable("schematype_keyword::loader", &Level::DEBUG));
        assert!(filter.would_enable("schematype_value::convert", &Level::DEBUG));
        assert!(!filter.would_enable("schematype_value::convert", &Level::TRACE));
    }

    #[test]
    fn other_targets_stay_at_warn() {
        let verbose = targets(LogLevel::Trace);
        assert!(verbose.would_enable("clap_builder", &Level::WARN));
        assert!(!verbose.would_enable("clap_builder", &Level::INFO));

        let quiet = targets(LogLevel::Error);
        assert!(!quiet.would_enable("clap_builder", &Level::WARN));
    }
}
