//! Logger setup for the command-line front end

use std::io::Write;

use env_logger::Builder;

/// Environment variable that overrides the verbosity flag.
pub const LOG_ENV: &str = "TREEDOC_LOG";

/// Map the number of `-v` flags to a level filter name.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

/// Install the global logger, writing to stderr. Fails if one is already set.
pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_ENV, level_for_verbosity(verbosity));

    Builder::from_env(env)
        .format(|buf, record| writeln!(buf, "treedoc: {}: {}", record.level(), record.args()))
        .try_init()
}
