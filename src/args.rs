use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainArgs {
    pub debug: bool,
    pub config_dir: Option<PathBuf>,
}

fn command() -> Command {
    Command::new("vpnset")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Full-screen editor for the local VPN client settings.")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Write a debug log to <config_dir>/logs/vpnset.log")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config_dir")
                .long("config-dir")
                .value_name("DIR")
                .help("Configuration directory (default: $VPNSET_CONFIG_DIR or ~/.vpnset)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn from_matches(matches: &ArgMatches) -> MainArgs {
    MainArgs {
        debug: matches.get_flag("debug"),
        config_dir: matches.get_one::<PathBuf>("config_dir").cloned(),
    }
}

/// Parses command-line arguments using clap.
pub fn main_args() -> MainArgs {
    from_matches(&command().get_matches())
}

/// Parse an explicit argument list; the first item is the program name.
pub fn parse_from<I, T>(args: I) -> Result<MainArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    command().try_get_matches_from(args).map(|matches| from_matches(&matches))
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
