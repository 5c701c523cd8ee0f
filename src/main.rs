use clap::Parser;
use env_logger::Env;

use faceauth::Opts;
use faceauth::cli::SubCommandExtend;
use faceauth::config::SubCommand;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();

    match &opts.subcmd {
        SubCommand::Server(config) => config.run(&opts).await,
        SubCommand::Register(config) => config.run(&opts).await,
        SubCommand::Verify(config) => config.run(&opts).await,
        SubCommand::List(config) => config.run(&opts).await,
    }
}
