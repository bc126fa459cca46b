//! Logging setup for the `bagpipe` binary.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber that prints them.
//!
//! - `warn`: advisory conditions met while decoding (one per occurrence)
//! - `info`: completed loads and saves
//! - `debug`: envelope and payload layout details

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crates whose events follow the chosen level.
const OWN_CRATES: [&str; 4] = ["bagpipe_tools", "codec", "wire", "bitstream"];

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::ERROR,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Maps `-v`/`-q` counts to a level.
    ///
    /// - `-q`: errors only (also the default, so per-entry warnings do not
    ///   drown the single advisory notice)
    /// - `-v`: warn
    /// - `-vv`: info
    /// - `-vvv`: debug
    /// - more: trace
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbose {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        Self {
            level,
            ..Self::default()
        }
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = String::from("warn");
    for krate in OWN_CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0, false).level, Level::ERROR);
        assert_eq!(LogConfig::from_verbosity(1, false).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(2, false).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(3, false).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9, false).level, Level::TRACE);
        assert_eq!(LogConfig::from_verbosity(3, true).level, Level::ERROR);
    }

    #[test]
    fn directives_cover_own_crates() {
        let directives = default_directives(Level::DEBUG);
        assert!(directives.starts_with("warn,"));
        for krate in OWN_CRATES {
            assert!(directives.contains(&format!("{krate}=debug")), "{directives}");
        }
    }
}
