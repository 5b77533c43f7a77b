use clap::Parser;

use icon_foundry::cli::{self, Cli};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
