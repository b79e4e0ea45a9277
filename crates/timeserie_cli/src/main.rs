mod command;
mod config;

use std::io::{BufWriter, Write};

use command::{Command, USAGE};
use config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };
    let config = Config::from_env()?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    command.run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
