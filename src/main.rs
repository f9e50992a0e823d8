mod actions;
mod app;
mod cli;
mod component;
mod config;
mod page;
mod pipe;
#[cfg(not(tarpaulin_include))]
mod tui;
mod utils;

use app::{App, RootState};
use clap::Parser;
use cli::{ClapSource, Cli, Commands};
use color_eyre::eyre::{Context, Result};
use dotenv::dotenv;

#[cfg(not(tarpaulin_include))]
async fn run(args: Cli, config: config::Config) -> Result<()> {
    match &args.command {
        Some(Commands::Pipe) => {
            let written = pipe::run(
                &config.input,
                std::io::stdin().lock(),
                std::io::stdout().lock(),
            )?;
            tracing::info!("Pipe mode finished, {} events emitted", written);
            Ok(())
        }
        None => {
            let state = RootState::new(config);
            let mut app = App::new(
                state,
                tui::Tui::new()?
                    .tick_rate(args.tick_rate)
                    .frame_rate(args.frame_rate)
                    .mouse(true)
                    .paste(true)
                    .into(),
            )
            .context("Error when building the input")?;

            app.run().await?;
            Ok(())
        }
    }
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Cli::parse();
    // the data dir, and so the log file, may come from any config layer
    let config = config::Config::new(Some(ClapSource::new(&args)))
        .context("Error when loading config")?;
    let log_file = utils::logging::init(&config.data_dir)?;
    utils::errors::init(&log_file)?;

    run(args, config).await
}
