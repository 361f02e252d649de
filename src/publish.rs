// ABOUTME: Publish module for the slide-manifest application
// ABOUTME: Stages, commits and pushes the working tree by shelling out to git

use crate::config::Config;
use chrono::{DateTime, Local};
use log::{info, warn};
use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Exit code used when git could not be started at all
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// One of the three git invocations of a publish run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    Stage,
    Commit,
    Push,
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GitStep::Stage => "stage",
            GitStep::Commit => "commit",
            GitStep::Push => "push",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: GitStep,
    /// `None` when git failed to spawn or was killed by a signal
    pub code: Option<i32>,
    pub success: bool,
    pub spawned: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub steps: Vec<StepOutcome>,
}

impl PublishReport {
    /// Exit status of the final step, which is what the process reports
    pub fn exit_code(&self) -> i32 {
        match self.steps.last() {
            None => 0,
            Some(outcome) if outcome.success => 0,
            Some(outcome) if !outcome.spawned => SPAWN_FAILURE_CODE,
            Some(outcome) => outcome.code.unwrap_or(1),
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|outcome| outcome.success)
    }
}

/// Commit message embedding the given local time
pub fn commit_message(timestamp: &DateTime<Local>) -> String {
    format!(
        "Update slides manifest: {}",
        timestamp.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Arguments passed to git for each step
pub fn git_args(step: GitStep, config: &Config, message: &str) -> Vec<String> {
    match step {
        GitStep::Stage => vec!["add".into(), "-A".into()],
        GitStep::Commit => vec!["commit".into(), "-m".into(), message.to_string()],
        GitStep::Push => vec!["push".into(), config.remote.clone(), config.branch.clone()],
    }
}

/// Run stage, commit and push in order.
///
/// Every step runs regardless of how the previous one ended; git's own output
/// goes straight to the console.
pub fn publish(config: &Config, timestamp: &DateTime<Local>) -> PublishReport {
    let message = commit_message(timestamp);
    info!("Publishing from {:?} with message {:?}", config.repo_dir, message);

    let steps = [GitStep::Stage, GitStep::Commit, GitStep::Push]
        .into_iter()
        .map(|step| run_step(step, &git_args(step, config, &message), &config.repo_dir))
        .collect();

    PublishReport { steps }
}

fn run_step(step: GitStep, args: &[String], repo_dir: &Path) -> StepOutcome {
    info!("Running git {}", args.join(" "));

    match Command::new("git").args(args).current_dir(repo_dir).status() {
        Ok(status) => outcome_from_status(step, status),
        Err(e) => {
            warn!("Failed to run git {}: {}", step, e);
            StepOutcome {
                step,
                code: None,
                success: false,
                spawned: false,
            }
        }
    }
}

fn outcome_from_status(step: GitStep, status: ExitStatus) -> StepOutcome {
    if !status.success() {
        warn!("git {} exited with {}", step, status);
    }
    StepOutcome {
        step,
        code: status.code(),
        success: status.success(),
        spawned: true,
    }
}
