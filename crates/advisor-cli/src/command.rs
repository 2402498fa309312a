//! Classification of the requested command into an advisory.
use std::path::PathBuf;

pub const POWER_WARNING: &str =
    "All running applications will be closed, and unsaved work may be lost.";
pub const REMOVE_WARNING: &str =
    "This operation is irreversible. All contents in the specified folder would be permanently deleted.";
pub const UNRECOGNIZED_MESSAGE: &str = "Command not recognized or not supported for analysis.";
pub const STILL_PROCEEDS_NOTE: &str =
    "The deletion would still proceed if this command were executed.";

/// A power-state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Reboot,
    Shutdown,
}

impl PowerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reboot => "reboot",
            Self::Shutdown => "shutdown",
        }
    }
}

/// What the advisor has to say about one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    Power { action: PowerAction },
    /// `rm -rf` with every listed target.
    RecursiveRemove { targets: Vec<PathBuf> },
    Unrecognized { command: String },
}

impl Advisory {
    /// Classify `command` and its arguments.
    ///
    /// Only the exact flag `-rf` marks a recursive removal, and at least one
    /// target must follow it.
    pub fn classify(command: &str, args: &[String]) -> Self {
        match command {
            "reboot" => Self::Power {
                action: PowerAction::Reboot,
            },
            "shutdown" => Self::Power {
                action: PowerAction::Shutdown,
            },
            "rm" => match args.split_first() {
                Some((flag, targets)) if flag == "-rf" && !targets.is_empty() => {
                    Self::RecursiveRemove {
                        targets: targets.iter().map(PathBuf::from).collect(),
                    }
                }
                _ => Self::unrecognized(command),
            },
            _ => Self::unrecognized(command),
        }
    }

    fn unrecognized(command: &str) -> Self {
        Self::Unrecognized {
            command: command.to_string(),
        }
    }

    /// Stable machine-readable name, used in JSON output and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Power { .. } => "power",
            Self::RecursiveRemove { .. } => "recursive_remove",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }

    /// Closing warning line, if the advisory carries one.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Self::Power { .. } => Some(POWER_WARNING),
            Self::RecursiveRemove { .. } => Some(REMOVE_WARNING),
            Self::Unrecognized { .. } => None,
        }
    }
}

/// Opening line for a power action.
pub fn power_message(action: PowerAction) -> String {
    format!("You are requesting to {} your computer.", action.as_str())
}

/// Opening line for one removal target.
pub fn remove_message(target: &std::path::Path) -> String {
    format!(
        "You are requesting to recursively remove the contents of \"{}\".",
        target.display()
    )
}
