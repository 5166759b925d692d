use crate::har::Har;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CountCmd {
    /// HAR file to analyze (use - for stdin)
    #[arg(default_value = "-")]
    pub file: String,

    /// Count only entries with a completed capture (replayable)
    #[arg(long)]
    pub replayable: bool,
}

impl CountCmd {
    pub fn run(&self, har: &Har) -> Result<()> {
        let count = if self.replayable {
            har.entries().iter().filter(|e| e.is_complete()).count()
        } else {
            har.entries().len()
        };
        println!("{}", count);
        Ok(())
    }
}
