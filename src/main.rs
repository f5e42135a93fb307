use clap::Parser;
use colored::Colorize;

use tagshort::cli::{Cli, Commands};
use tagshort::config::{StaticConfig, init_config_from};
use tagshort::runtime::modes;
use tagshort::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(path) = cli.generate_config.as_deref() {
        StaticConfig::default().save_to_file(path)?;
        println!(
            "{} {}",
            "Configuration file generated:".green(),
            path.blue()
        );
        return Ok(());
    }

    let config = match init_config_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // guard 必须活到进程结束
    let _guard = init_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => modes::run_server().await,
        cmd => {
            if let Err(e) = modes::run_cli(cmd).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
