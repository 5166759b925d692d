use crate::har::Entry;
use crate::output::{truncate, OutputFormat};
use crate::replay::Replayer;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ReplayCmd {
    /// HAR files to replay (use - for stdin)
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Stop at the first failed or errored entry
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    /// Live status matches the recorded one
    Pass,
    /// Live status differs from the recorded one
    Fail,
    /// Capture never completed, nothing to compare
    Skip,
    /// Request could not be built or dispatched
    Error,
}

#[derive(Debug, Serialize)]
struct Verdict {
    file: String,
    entry: usize,
    method: String,
    url: String,
    expected: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<u16>,
    outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ReplayCmd {
    pub fn run(&self, color: bool) -> Result<()> {
        let replayer = Replayer::new()?;
        let mut verdicts: Vec<Verdict> = Vec::new();

        'files: for file in &self.files {
            let har = crate::load_har(file)?;
            for (i, entry) in har.entries().iter().enumerate() {
                let verdict = replay_entry(&replayer, file, i + 1, entry);
                if matches!(self.output, OutputFormat::Text) {
                    print_verdict(&verdict, color);
                }
                let stop = self.fail_fast
                    && matches!(verdict.outcome, Outcome::Fail | Outcome::Error);
                verdicts.push(verdict);
                if stop {
                    break 'files;
                }
            }
        }

        let failed = verdicts
            .iter()
            .filter(|v| matches!(v.outcome, Outcome::Fail | Outcome::Error))
            .count();
        let skipped = verdicts
            .iter()
            .filter(|v| v.outcome == Outcome::Skip)
            .count();

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&verdicts)?);
            }
            OutputFormat::Text => {
                let replayed = verdicts.len() - skipped;
                let summary = format!(
                    "{} replayed, {} passed, {} failed, {} skipped",
                    replayed,
                    replayed - failed,
                    failed,
                    skipped
                );
                println!();
                if failed == 0 {
                    println!("{}", if color { summary.green().to_string() } else { summary });
                } else {
                    println!("{}", if color { summary.red().to_string() } else { summary });
                }
            }
        }

        if failed > 0 {
            bail!("{} of {} entries did not replay as recorded", failed, verdicts.len());
        }
        Ok(())
    }
}

fn replay_entry(replayer: &Replayer, file: &str, index: usize, entry: &Entry) -> Verdict {
    let expected = entry.response.status;
    let mut verdict = Verdict {
        file: file.to_string(),
        entry: index,
        method: entry.request.method.clone(),
        url: entry.url().to_string(),
        expected,
        actual: None,
        outcome: Outcome::Skip,
        error: None,
    };

    match replayer.replay(entry) {
        Ok(response) => {
            let actual = response.status().as_u16();
            verdict.actual = Some(actual);
            verdict.outcome = if actual == expected {
                Outcome::Pass
            } else {
                Outcome::Fail
            };
        }
        Err(err) if err.is_incomplete() => {}
        Err(err) => {
            verdict.outcome = Outcome::Error;
            verdict.error = Some(err.to_string());
        }
    }
    verdict
}

fn print_verdict(verdict: &Verdict, color: bool) {
    let tag = match verdict.outcome {
        Outcome::Pass => "PASS ",
        Outcome::Fail => "FAIL ",
        Outcome::Skip => "SKIP ",
        Outcome::Error => "ERROR",
    };
    let tag = if color {
        match verdict.outcome {
            Outcome::Pass => tag.green().bold().to_string(),
            Outcome::Fail => tag.red().bold().to_string(),
            Outcome::Skip => tag.dimmed().to_string(),
            Outcome::Error => tag.red().to_string(),
        }
    } else {
        tag.to_string()
    };

    let status = match (verdict.outcome, verdict.actual) {
        (Outcome::Fail, Some(actual)) => format!("{} != {}", verdict.expected, actual),
        (_, Some(actual)) => format!("{}", actual),
        _ => "-".to_string(),
    };

    let mut line = format!(
        "{} {:>10}  {} {}",
        tag,
        status,
        verdict.method,
        truncate(&verdict.url, 80)
    );
    if let Some(ref err) = verdict.error {
        line.push_str(&format!(": {}", err));
    }
    println!("{}", line);
}
