//! Apply a rename plan and report each change.

use std::io::{self, Write};

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::plan::RenamePlan;
use crate::utils::io as fs_io;
use crate::walk::walk_files;

/// Count of accepted renames for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub changed: usize,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn message(&self) -> String {
        if self.changed == 0 {
            return "No files would change.".to_string();
        }
        let noun = if self.changed == 1 { "file" } else { "files" };
        if self.dry_run {
            format!("{} {} would change.", self.changed, noun)
        } else {
            format!("{} {} renamed.", self.changed, noun)
        }
    }
}

/// Walk, plan, and apply in one pass.
///
/// Mapping lines and the summary go to `out`; warnings go to `err`. In apply
/// mode any collision aborts before the first rename. A failed rename aborts
/// the rest of the run.
pub fn run(config: &RunConfig, out: &mut dyn Write, err: &mut dyn Write) -> Result<RunSummary> {
    for warning in config.mode.warnings() {
        write_line(err, &format!("Warning: {}", warning))?;
    }

    log_status!(
        "renamer",
        "Scanning {} ({}{})",
        config.root.display(),
        config.mode.label(),
        if config.dry_run { ", dry run" } else { "" }
    );
    let files = walk_files(&config.root, &config.skip);
    let plan = RenamePlan::build(&config.mode, &config.root, files);

    if !plan.collisions.is_empty() {
        if !config.dry_run {
            let targets = plan
                .collisions
                .iter()
                .map(|c| c.to.display().to_string())
                .collect();
            return Err(Error::rename_collision(targets));
        }
        for collision in &plan.collisions {
            write_line(err, &format!("Warning: {}", collision.message()))?;
        }
    }

    apply_plan(&plan, config.dry_run, out)
}

/// Print each entry and, unless `dry_run`, rename it. Returns the summary after printing it.
pub fn apply_plan(plan: &RenamePlan, dry_run: bool, out: &mut dyn Write) -> Result<RunSummary> {
    let mut summary = RunSummary {
        changed: 0,
        dry_run,
    };

    for entry in &plan.entries {
        write_line(out, &format!("{} -> {}", entry.from_base, entry.to_base))?;
        if !dry_run {
            fs_io::rename_file(&entry.from, &entry.to)?;
        }
        summary.changed += 1;
    }

    write_line(out, &summary.message())?;
    Ok(summary)
}

fn write_line(out: &mut dyn Write, line: &str) -> Result<()> {
    match writeln!(out, "{}", line) {
        Ok(()) => Ok(()),
        // Reader went away (e.g. piped into `head`); keep going quietly.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some("write output".to_string()),
        )),
    }
}
