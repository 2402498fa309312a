//! Command-line definition.
use advisor_core::analysis::DEFAULT_TOP_EXTENSIONS;
use clap::{ArgAction, Parser};
use tracing::Level;

/// Explain what a destructive command would do, without ever running it.
///
/// Recognises `reboot`, `shutdown` and `rm -rf <path>...`. For removals
/// the target directories are measured read-only and summarised.
#[derive(Debug, Parser)]
#[command(name = "advisor", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the advisory as a JSON document.
    #[arg(long)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Number of file extensions to list per target.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_EXTENSIONS)]
    pub top: usize,

    /// The command that would be run, followed by its arguments verbatim.
    ///
    /// Everything from the first positional on belongs to that command, even
    /// tokens that look like advisor's own flags.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command_line: Vec<String>,
}

impl Cli {
    /// Name of the command being advised on.
    pub fn command(&self) -> &str {
        self.command_line.first().map_or("", String::as_str)
    }

    /// Arguments of that command.
    pub fn args(&self) -> &[String] {
        self.command_line.get(1..).unwrap_or_default()
    }

    /// Maximum log level selected by `-v` flags.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
