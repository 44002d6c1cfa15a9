use std::io;
use std::process::ExitCode;

use clap::Parser;
use comic_api::{ComicApiClient, ComicApiConfig};
use comic_cli::cli::{usage_message, Cli};
use comic_cli::present;
use comic_term::{logging, EnvConfig};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if !error.use_stderr() => {
            let _ = error.print();
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("error: {}", usage_message(&error));
            return ExitCode::FAILURE;
        }
    };

    let env_config = EnvConfig::from_env();
    logging::init(env_config.log_filter.as_deref());

    match execute(&cli, &env_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli, env_config: &EnvConfig) -> anyhow::Result<()> {
    let selection = cli.selection()?;

    let mut config =
        ComicApiConfig::new().with_user_agent(concat!("xkcd/", env!("CARGO_PKG_VERSION")));
    if let Some(base_url) = env_config.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    let client = ComicApiClient::new(config)?;
    let options = cli.present_options(env_config.resolve_protocol());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    present::run(&client, &selection, &mut rand::thread_rng(), &options, &mut out)
}
