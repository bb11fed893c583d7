mod cli;
mod config;
mod model;
mod notify;
mod script;

use std::process;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&cli, &config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
