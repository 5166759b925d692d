use crate::har::Har;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::BTreeMap;

#[derive(Debug, Args)]
pub struct InfoCmd {
    /// HAR file to analyze (use - for stdin)
    #[arg(default_value = "-")]
    pub file: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

impl InfoCmd {
    pub fn run(&self, har: &Har, color: bool) -> Result<()> {
        let summary = Summary::of(har);
        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => summary.print(color),
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct Summary {
    version: String,
    entries: usize,
    replayable: usize,
    incomplete: usize,
    methods: BTreeMap<String, usize>,
    status_classes: BTreeMap<String, usize>,
}

impl Summary {
    fn of(har: &Har) -> Self {
        let mut methods: BTreeMap<String, usize> = BTreeMap::new();
        let mut status_classes: BTreeMap<String, usize> = BTreeMap::new();
        let mut replayable = 0;

        for entry in har.entries() {
            *methods.entry(entry.request.method.clone()).or_default() += 1;
            if entry.is_complete() {
                replayable += 1;
                let class = format!("{}xx", entry.response.status / 100);
                *status_classes.entry(class).or_default() += 1;
            }
        }

        Summary {
            version: har.log.version.clone(),
            entries: har.entries().len(),
            incomplete: har.entries().len() - replayable,
            replayable,
            methods,
            status_classes,
        }
    }

    fn print(&self, color: bool) {
        let label = |s: &str| {
            if color {
                s.bold().to_string()
            } else {
                s.to_string()
            }
        };

        println!("{}", label("HAR File Information"));
        println!("{}", "─".repeat(40));
        println!("{}: {}", label("Version"), self.version);
        println!("{}: {}", label("Entries"), self.entries);
        println!("{}: {}", label("Replayable"), self.replayable);
        println!("{}: {}", label("Incomplete"), self.incomplete);

        if !self.methods.is_empty() {
            println!("{}:", label("Methods"));
            for (method, count) in &self.methods {
                println!("  {:<8} {}", method, count);
            }
        }

        if !self.status_classes.is_empty() {
            println!("{}:", label("Recorded statuses"));
            for (class, count) in &self.status_classes {
                println!("  {:<8} {}", class, count);
            }
        }
    }
}
