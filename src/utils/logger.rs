use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    /// One JSON object per line, for scheduled runs whose stderr is collected.
    Json,
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "cost_report=debug,info"
    } else {
        "cost_report=info"
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout only carries the
/// confirmation line; `RUST_LOG` overrides the default filter.
pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
