use clap::Parser;
use triple_finder::core::Storage;
use triple_finder::utils::logger::{self, LogFormat};
use triple_finder::utils::validation::Validate;
use triple_finder::{
    CliConfig, LocalStorage, Result, RunSummary, StdoutStorage, TripleEngine, TriplePipeline,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, config.verbose);

    tracing::info!("Starting triple-finder");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }
    let print_profile = config.profile;

    let result = match config.output_dir.clone() {
        Some(dir) => run(LocalStorage::new(dir), config, monitor_enabled).await,
        None => run(StdoutStorage, config, monitor_enabled).await,
    };

    match result {
        Ok(summary) => {
            tracing::info!(
                "✅ Search completed: {} triples written to {}",
                summary.triples_found,
                summary.location
            );
            if print_profile {
                eprintln!("{}", summary.profile);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run<S: Storage>(storage: S, config: CliConfig, monitor: bool) -> Result<RunSummary> {
    let pipeline = TriplePipeline::new(storage, config);
    TripleEngine::new_with_monitoring(pipeline, monitor)
        .run()
        .await
}
