use clap::Parser;
use rotate::cli::{self, Opt};
use rotate::config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    let opt = Opt::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load(opt.config)?;

    let sequence = cli::run(opt.command, &config)?;

    println!("{}", cli::render(&sequence, config.output.format)?);

    Ok(())
}
