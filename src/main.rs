use vpnset::config::{self, DirectoryPurge, PassFile, YamlSettingsStore};
use vpnset::tui::{self, Collaborators};
use vpnset::vpn::PidFileSession;
use vpnset::{Result, args, log, log_debug, log_error, log_info};

use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = args::main_args();

    let paths = match config::resolve_config_dir(args.config_dir.as_deref()) {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("[!] {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };
    config::set_config_paths(paths.clone());

    // Initialize logging
    if args.debug {
        log::LOGGER.enable_debug();
        if let Err(err) = log::LOGGER.log_debug("Debug mode enabled") {
            eprintln!("[!] Failed to initialize debug logging: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    }
    log_debug!("Configuration directory: {}", paths.root().display());

    let store = match YamlSettingsStore::open(paths.settings_file()) {
        Ok(store) => store,
        Err(err) => {
            log_error!("Failed to open settings: {}", err);
            eprintln!("[!] {}", err);
            let _ = log::LOGGER.flush();
            return Ok(ExitCode::FAILURE);
        }
    };

    let ports = Collaborators {
        store: Box::new(store),
        credentials: Box::new(PassFile::new(paths.passfile())),
        vpn: Box::new(PidFileSession::new(paths.pid_file())),
        purge: Box::new(DirectoryPurge::new(paths.root())),
    };

    let exit = tui::run_settings(ports)?;
    if let Some(message) = exit.diagnostic() {
        eprintln!("[!] {}", message);
    }

    log_info!("Exiting with {}", exit);
    let _ = log::LOGGER.flush();

    Ok(if exit.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
