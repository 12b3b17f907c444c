// Purpose: Command-line configuration of the decoder binary and log subscriber setup.

use crate::error::Result;

/// Decodes a comma-separated sequence of integers with F (drop first), B (drop last) and
/// R (reverse) instructions.
///
/// Without `--sequence` and `--instructions` both lines are read from standard input.
#[derive(Debug, clap::Parser)]
#[command(long_about = None, name = "m-deque", version)]
pub struct Config {
    /// Numeric sequence, e.g. "12, 43, 189, 42, 1, 35"
    #[arg(short = 's', long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,
    /// Instruction string over F, B and R, e.g. "FRB"
    #[arg(short = 'i', long, value_name = "INSTRUCTIONS")]
    pub instructions: Option<String>,
    /// Log filter used when RUST_LOG is not set
    #[arg(default_value = "warn", long, value_name = "FILTER")]
    pub log_level: String,
    /// Do not print the input prompts
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Installs a `fmt` subscriber on stderr, filtered by `RUST_LOG` or else by `fallback`.
pub fn init_tracing(fallback: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
    tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["m-deque"]).unwrap();
        assert_eq!(config.sequence, None);
        assert_eq!(config.instructions, None);
        assert_eq!(config.log_level, "warn");
        assert!(!config.quiet);
    }

    #[test]
    fn test_inline_input() {
        let args = ["m-deque", "-s", "1, 2, 3", "-i", "FRB", "--log-level", "debug", "-q"];
        let config = Config::try_parse_from(args).unwrap();
        assert_eq!(config.sequence.as_deref(), Some("1, 2, 3"));
        assert_eq!(config.instructions.as_deref(), Some("FRB"));
        assert_eq!(config.log_level, "debug");
        assert!(config.quiet);
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
