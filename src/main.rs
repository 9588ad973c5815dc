use breach_check::core::report;
use breach_check::utils::{logger, validation::Validate};
use breach_check::{BreachCheckHandler, CliConfig, ErrorKind, XposedClient};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose());
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let format = config.output_format();
    let handler = BreachCheckHandler::new(XposedClient::new(config));
    let payload = serde_json::json!({ "email": args.email });

    match handler.handle(&payload).await {
        Ok(result) => {
            println!("{}", report::render(&result, format)?);
        }
        Err(e) => {
            tracing::error!("❌ Breach check failed: {} (Kind: {:?})", e, e.kind());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            if e.kind().is_retryable() {
                eprintln!("🔁 This failure may clear on its own; running the same check again later can succeed.");
            }

            let exit_code = match e.kind() {
                ErrorKind::InvalidArgument => 1,
                ErrorKind::ResourceExhausted => 2,
                ErrorKind::Internal => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
