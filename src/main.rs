use clap::Parser;
use day_scaffold::core::Storage;
use day_scaffold::utils::{logger, validation::Validate};
use day_scaffold::{
    CliConfig, DryRunStorage, GenerationReport, LocalStorage, ScaffoldConfig, ScaffoldEngine,
    ScaffoldError, ScaffoldGenerator,
};
use std::io::Write;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting day-scaffold");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    if let Ok(summary) = toml::to_string(&config) {
        tracing::debug!("Resolved configuration:\n{}", summary);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        run(DryRunStorage::new(), config, &mut out)
    } else {
        run(LocalStorage::new(), config, &mut out)
    };

    match result {
        Ok(report) => {
            tracing::info!("📁 Paste the [[bin]] entries above into Cargo.toml");
            tracing::debug!("{} units done", report.units.len());
        }
        Err(e) => exit_with(&e),
    }
}

fn run<S: Storage, W: Write>(
    storage: S,
    config: ScaffoldConfig,
    out: &mut W,
) -> day_scaffold::Result<GenerationReport> {
    let generator = ScaffoldGenerator::new(storage, config);
    ScaffoldEngine::new(generator).run(out)
}

fn exit_with(e: &ScaffoldError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}), {}",
        e,
        e.category(),
        e.recovery_suggestion()
    );

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
