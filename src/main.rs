mod cli;
mod config;
mod logging;
mod session;

use clap::Parser;
use cli::Cli;
use config::ConfigManager;
use session::Session;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    logging::init_logging(args.verbose);

    let config_manager = match ConfigManager::new() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("countrynorm: {:#}", e);
            std::process::exit(1);
        }
    };
    if config_manager.config.color == Some(false) {
        colored::control::set_override(false);
    }

    let mut session = Session::new(args, config_manager);
    if let Err(e) = session.run().await {
        eprintln!("countrynorm: {:#}", e);
        std::process::exit(1);
    }
}
