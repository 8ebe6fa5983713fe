use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    /// One JSON object per line, for log shippers.
    Json,
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "triple_finder=debug,info"
    } else {
        "triple_finder=info"
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the built-in filter.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // 日誌輸出到 stderr，stdout 保留給搜尋結果
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_crate_debug() {
        assert_eq!(default_directives(false), "triple_finder=info");
        assert!(default_directives(true).starts_with("triple_finder=debug"));
    }

    #[test]
    fn test_compact_is_default_format() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
