use std::process::ExitCode;

use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};

use vpnctl::cli::args::{Args, Parsed};
use vpnctl::{cli, constants, logging, AppConfig, Dispatcher};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = match Args::parse_from_env() {
        Parsed::Run(args) => args,
        Parsed::Usage => {
            println!("{}", cli::usage());
            return Ok(ExitCode::FAILURE);
        }
        Parsed::Info(info) => info.exit(),
    };

    logging::init(args.verbose);
    debug!(version = constants::APP_VERSION, "{} starting", constants::APP_NAME);

    let (config, source) =
        AppConfig::load(args.config.as_deref()).wrap_err("Failed to load configuration")?;
    info!(%source, "configuration loaded");

    let mut dispatcher = Dispatcher::system(config);
    // The dispatcher has already printed the failure line.
    match dispatcher.execute(&args.protocol, &args.action) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
