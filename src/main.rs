use clap::Parser;
use reel_poster::utils::logger;
use reel_poster::{exit_code, post_configured_reel, success_message, CliConfig, TomlConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting reel-poster");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let outcome = match config.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            match TomlConfig::from_file(&path) {
                Ok(toml_config) => post_configured_reel(&toml_config).await,
                Err(e) => Err(e),
            }
        }
        None => match config.resolve() {
            Ok(cli_config) => post_configured_reel(&cli_config).await,
            Err(e) => Err(e),
        },
    };

    let code = exit_code(&outcome);
    match outcome {
        Ok(result) => {
            println!("{}", success_message(&result));
        }
        Err(e) => {
            tracing::error!("Reel upload failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ Error: {}", e.user_friendly_message());
            std::process::exit(code);
        }
    }
}
