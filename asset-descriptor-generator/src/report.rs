//! Run reporting: progress bars while generating and a summary afterwards.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Files written by one generator run, in write order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerationReport {
    pub pipeline: &'static str,
    pub materials: Vec<PathBuf>,
    pub models: Vec<PathBuf>,
    /// Aggregate placement file and the number of entries in it.
    pub placements: Option<(PathBuf, usize)>,
}

impl GenerationReport {
    pub fn new(pipeline: &'static str) -> Self {
        Self {
            pipeline,
            ..Self::default()
        }
    }

    pub fn files_written(&self) -> usize {
        self.materials.len() + self.models.len() + usize::from(self.placements.is_some())
    }

    /// Logs counts and output locations for verification.
    pub fn log_summary(&self) {
        log::info!("{} summary:", self.pipeline);
        log::info!("  Materials written: {}", self.materials.len());
        log::info!("  Models written: {}", self.models.len());
        match &self.placements {
            Some((path, count)) => {
                log::info!("  Scene placements: {} in {}", count, path.display())
            }
            None => log::info!("  No scene placements written"),
        }
    }
}

/// Progress bar over the instances of one pass. Hidden when `quiet`.
pub fn instance_progress(len: usize, message: &'static str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("[{bar:40.green/blue}] {pos}/{len} descriptors ({percent}%) {msg}")
        .map(|s| s.progress_chars("█▉▊▋▌▍▎▏"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_aggregate_file_once() {
        let mut report = GenerationReport::new("Light impostors");
        report.materials.push(PathBuf::from("m0.json"));
        report.models.push(PathBuf::from("o0.json"));
        report.placements = Some((PathBuf::from("list.json"), 1));
        assert_eq!(report.files_written(), 3);
    }
}
