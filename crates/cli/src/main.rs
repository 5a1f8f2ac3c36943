use clap::Parser;
use league_cli::{Cli, Config, app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(
        "Using league file {} with season seed {}",
        config.data_file.display(),
        config.seed
    );

    let output = app::run(cli, &config).await?;
    for line in output.lines {
        println!("{}", line);
    }

    Ok(())
}
