use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::time::Duration;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: String,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 8091)]
    pub port: u16,

    /// Milliseconds between two random number events on an open stream
    #[arg(
        short,
        long,
        env,
        default_value_t = 2000,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub tick_interval_ms: u64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// The `interface:port` pair the server binds to.
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.interface, self.port)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("random_sse").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_period_and_log_level() {
        let config = parse(&["--interface", "127.0.0.1", "--port", "8091"]).unwrap();

        assert_eq!(config.server_address(), "127.0.0.1:8091");
        assert_eq!(config.tick_interval(), Duration::from_millis(2000));
        assert_eq!(config.log_level_filter, LevelFilter::Info);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "--interface",
            "0.0.0.0",
            "--port",
            "9000",
            "--tick-interval-ms",
            "250",
            "--log-level-filter",
            "DEBUG",
        ])
        .unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:9000");
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        assert!(parse(&["--tick-interval-ms", "0"]).is_err());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        assert!(parse(&["--log-level-filter", "VERBOSE"]).is_err());
    }
}
