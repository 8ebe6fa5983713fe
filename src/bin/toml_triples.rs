use clap::Parser;
use triple_finder::config::toml_config::TomlConfig;
use triple_finder::core::profile::expected_pair_evaluations;
use triple_finder::core::{ConfigProvider, Storage};
use triple_finder::utils::logger::{self, LogFormat};
use triple_finder::utils::validation::Validate;
use triple_finder::{
    LocalStorage, OutputFormat, RunSummary, StdoutStorage, TripleEngine, TriplePipeline,
};

#[derive(Parser)]
#[command(name = "toml-triples")]
#[command(about = "Pythagorean triple search driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "triples.toml")]
    config: String,

    /// Override the search bound from config
    #[arg(long, allow_negative_numbers = true)]
    bound: Option<i64>,

    /// Override the output format from config
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be searched without running the search
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::Compact, args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 應用命令列覆蓋設定
    if let Some(bound) = args.bound {
        config.search.bound = Some(bound);
        tracing::info!("🔧 Bound overridden to: {}", bound);
    }
    if let Some(format) = args.format {
        config.output.format = format;
        tracing::info!("🔧 Output format overridden to: {}", format);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No search will be performed");
        println!(
            "Would evaluate {} pairs for bound {} and write {} output to {}",
            expected_pair_evaluations(config.bound()),
            config.bound(),
            config.output_format(),
            config.output_dir().unwrap_or("<stdout>")
        );
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let print_profile = config.profile();

    let summary = match config.output_dir().map(str::to_string) {
        Some(dir) => run(LocalStorage::new(dir), config, monitor_enabled).await,
        None => run(StdoutStorage, config, monitor_enabled).await,
    };

    let summary = match summary {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("❌ Search failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!(
        "✅ {} triples written to {}",
        summary.triples_found,
        summary.location
    );
    if print_profile {
        eprintln!("{}", summary.profile);
    }

    Ok(())
}

async fn run<S: Storage>(
    storage: S,
    config: TomlConfig,
    monitor: bool,
) -> triple_finder::Result<RunSummary> {
    let pipeline = TriplePipeline::new(storage, config);
    TripleEngine::new_with_monitoring(pipeline, monitor)
        .run()
        .await
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Bound: {}", config.bound());
    tracing::info!("   Format: {}", config.output_format());
    tracing::info!("   Output: {}", config.output_dir().unwrap_or("<stdout>"));
    tracing::info!("   File name: {}", config.resolved_filename());
    tracing::info!("   Monitoring: {}", config.monitoring_enabled());
}
