use birthday_lookup::core::ConfigProvider;
use birthday_lookup::utils::{logger, validation::Validate};
use birthday_lookup::{
    CliConfig, FileErrorLog, HttpFetcher, LookupEngine, LookupError, LookupSession,
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting birthday-lookup");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Lookup failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<(), LookupError> {
    config.validate()?;

    let error_log = FileErrorLog::open(config.error_log_path())?;
    let mut engine = LookupEngine::new(HttpFetcher::new(), error_log);
    let directory = engine.build_directory(config.url()).await?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let answered = LookupSession::new(&directory).run(stdin.lock(), stdout.lock())?;

    tracing::info!("Session finished after {} lookups", answered);
    Ok(())
}
