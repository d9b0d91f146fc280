//! campus - anonymous campus identity CLI
//!
//! ```bash
//! # Provision (if needed) and show this device's identity
//! campus whoami --pretty
//!
//! # Bind a name once
//! campus sync --name 张三 --class "Class 1"
//!
//! # Move the identity to another device
//! campus export
//! campus --config-dir ~/.campus-laptop import 1767225600000123456
//! ```

mod cli;
mod commands;
mod logger;
mod run;

use crate::cli::Cli;

use cs_client::IdentityCore;
use cs_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.config_dir {
        // SAFETY: no other threads exist yet; the runtime is built below
        unsafe { std::env::set_var("CS_CONFIG_DIR", dir) };
    }

    let mut config = match Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(server) = cli.server
        && let Err(e) = config.client.override_base_url(server)
    {
        eprintln!("Error loading configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        *config.logging.level
    };
    if let Err(e) = logger::initialize(level) {
        eprintln!("Error initializing logger: {}", e);
        return ExitCode::FAILURE;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let core = match IdentityCore::bootstrap(&config) {
        Ok(core) => core,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run::execute(&core, cli.command));

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
