mod compare;
mod config;
mod error;
mod report;
mod routes;

use clap::{CommandFactory, Parser};
use config::{CliArgs, Config, ConfigFile};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = CliArgs::parse();

    if cli.snapshots().is_none() {
        println!("Both pre and post XML files are required.");
        let _ = CliArgs::command().print_help();
        return;
    }

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        match e.downcast_ref::<error::AppError>() {
            Some(app_error) => eprintln!("Error: {}\n{}", app_error, app_error.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: CliArgs) -> anyhow::Result<()> {
    let config_file = ConfigFile::load(cli.config.as_deref())?;

    // Initialize logging
    let level = config::log_level(&cli, &config_file)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::merge(&cli, config_file)?;

    println!("Pre XML file: {}", config.pre.display());
    println!("Post XML file: {}", config.post.display());

    let result = compare::compare(&config).await?;
    let written = report::render(&result, &config)?;
    for path in written {
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}
