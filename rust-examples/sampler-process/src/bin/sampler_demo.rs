//! Sampler demo: runs every part of the toolkit and prints the results.
//!
//! Run with: cargo run --bin sampler-demo -- --section closures

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sampler_process::OsPlatform;
use sampler_process::demo::{DemoConfig, Section, run_section};

#[derive(Debug, Parser)]
#[command(name = "sampler-demo", about = "Numeric & functional toolkit walkthrough")]
struct Cli {
    /// Sections to run (repeatable)
    #[arg(long = "section", value_enum, default_value = "all")]
    sections: Vec<Section>,

    /// Inputs for the factorial demo
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [0, 5, 10])]
    factorials: Vec<i64>,

    /// Inputs for the primality demo
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [17, 20, 25])]
    primes: Vec<i64>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> DemoConfig {
        DemoConfig {
            factorials: self.factorials.clone(),
            primes: self.primes.clone(),
            ..DemoConfig::default()
        }
    }
}

/// `RUST_LOG` wins when it parses; otherwise `--log-level` is used. A set
/// but malformed `RUST_LOG` is reported on stderr, since no subscriber
/// exists yet to log it.
fn log_filter(rust_log: Option<&str>, fallback: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok(filter),
            Err(err) => eprintln!(
                "warning: ignoring invalid {}={directives:?} ({err}); using --log-level {fallback}",
                EnvFilter::DEFAULT_ENV
            ),
        }
    }
    Ok(EnvFilter::try_new(fallback)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the demo output.
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(rust_log.as_deref(), &cli.log_level)?;
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let sections = Section::resolve(&cli.sections);
    info!(?sections, "sampler-demo starting");

    let config = cli.config();
    debug!(?config, "demo inputs");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for section in sections {
        run_section(&mut out, section, &config, &OsPlatform)?;
    }
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sampler-demo"]);
        assert_eq!(cli.sections, vec![Section::All]);
        assert_eq!(cli.config(), DemoConfig::default());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "sampler-demo",
            "--section",
            "closures",
            "--section",
            "higher-order",
            "--factorials=-1,3",
            "--primes=2",
        ]);
        assert_eq!(cli.sections, vec![Section::Closures, Section::HigherOrder]);
        assert_eq!(cli.config().factorials, vec![-1, 3]);
        assert_eq!(cli.config().primes, vec![2]);
    }

    #[test]
    fn test_cli_accepts_negative_inputs_as_separate_args() {
        let cli = Cli::try_parse_from(["sampler-demo", "--factorials", "-1,3", "--primes", "-5"])
            .unwrap();
        assert_eq!(cli.config().factorials, vec![-1, 3]);
        assert_eq!(cli.config().primes, vec![-5]);
    }

    #[test]
    fn test_log_filter_prefers_valid_rust_log() {
        let filter = log_filter(Some("debug"), "warn").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_log_filter_falls_back_on_malformed_rust_log() {
        let filter = log_filter(Some("sampler=not_a_level"), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_log_filter_uses_level_when_unset() {
        let filter = log_filter(None, "info").unwrap();
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
