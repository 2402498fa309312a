//! Command dispatch: classify, analyse, render.
use crate::cli::Cli;
use crate::command::{Advisory, STILL_PROCEEDS_NOTE};
use crate::{render, theme};
use advisor_core::{scan, DeletionReport};
use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// The analysis of one `rm -rf` target.
///
/// A failed scan keeps its rendered reason; it never stops the advisory.
#[derive(Debug, Clone)]
pub struct TargetAnalysis {
    pub path: PathBuf,
    pub outcome: Result<DeletionReport, String>,
}

/// Scan every removal target of `advisory`, in order.
///
/// Power and unrecognised advisories have no targets.
pub fn analyse_targets(advisory: &Advisory, top: usize) -> Vec<TargetAnalysis> {
    let Advisory::RecursiveRemove { targets } = advisory else {
        return Vec::new();
    };

    targets
        .iter()
        .map(|path| {
            let outcome = match scan(path) {
                Ok(result) => Ok(DeletionReport::from_scan(&result, top)),
                Err(err) => {
                    warn!(kind = ?err.kind(), "{err}. {STILL_PROCEEDS_NOTE}");
                    Err(err.to_string())
                }
            };
            TargetAnalysis {
                path: path.clone(),
                outcome,
            }
        })
        .collect()
}

/// Run one invocation, writing the advisory to `out`.
///
/// Nothing is ever executed. Scan failures are reported inside the
/// advisory; only a failure to write the output is an error.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if cli.no_color {
        theme::disable_color();
    }

    let advisory = Advisory::classify(cli.command(), cli.args());
    info!(kind = advisory.kind(), "Classified command {:?}", cli.command());

    let targets = analyse_targets(&advisory, cli.top);

    let written = if cli.json {
        render::write_json(out, cli.command(), &advisory, &targets)
    } else {
        render::write_text(out, &advisory, &targets)
    };

    match written {
        // The reader went away (e.g. `| head`); nothing left to tell it.
        Err(err) if is_broken_pipe(&err) => {
            debug!("output closed early: {err}");
            Ok(())
        }
        other => other,
    }
}

/// `true` if `err` was caused by writing to a closed pipe.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
