#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod classify;
mod error;
mod facts;
mod prelude;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify a number's mathematical properties and fetch a fun fact about it"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "NUMCLASS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Classify a single number and print the result
    Classify(crate::classify::ClassifyOptions),

    /// Start the classification HTTP server
    Serve(crate::server::ServeOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Classify(options) => crate::classify::run(options, app.global).await,
        SubCommands::Serve(options) => crate::server::run_serve(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
