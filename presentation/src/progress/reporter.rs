//! Progress reporting for curation runs

use colored::Colorize;
use curator_application::RunProgressNotifier;
use curator_domain::{RunStage, ToolError};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a run with one bar per stage
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn stage_label(stage: RunStage) -> String {
        format!("Stage {}: {}", stage.number(), stage.display_name())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: RunStage, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(Self::stage_label(stage));
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.stage_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_task_complete(&self, _stage: RunStage, label: &str, success: bool) {
        if let Ok(bar) = self.stage_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), label)
            } else {
                format!("{} {}", "x".red(), label)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: RunStage, success: bool) {
        if let Ok(mut bar) = self.stage_bar.lock()
            && let Some(pb) = bar.take()
        {
            let message = if success {
                format!("{} complete", stage.display_name()).green().to_string()
            } else {
                format!("{} failed", stage.display_name()).red().to_string()
            };
            pb.finish_with_message(message);
        }
    }

    fn on_error_recorded(&self, error: &ToolError) {
        let marker = if error.is_warning() {
            "!".yellow()
        } else {
            "x".red()
        };
        let _ = self.multi.println(format!("  {} {}", marker, error));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RunProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: RunStage, total_tasks: usize) {
        println!(
            "{} {} ({} calls)",
            "->".cyan(),
            ProgressReporter::stage_label(stage).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _stage: RunStage, label: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), label);
        } else {
            println!("  {} {} (failed)", "x".red(), label);
        }
    }

    fn on_stage_complete(&self, _stage: RunStage, _success: bool) {}

    fn on_error_recorded(&self, error: &ToolError) {
        if error.is_warning() {
            println!("  {} {}", "!".yellow(), error);
        } else {
            println!("  {} {}", "x".red(), error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_label() {
        assert_eq!(
            ProgressReporter::stage_label(RunStage::ResolveTracks),
            "Stage 4: Resolve Tracks"
        );
    }

    #[test]
    fn test_reporter_tolerates_out_of_order_callbacks() {
        let reporter = ProgressReporter::new();
        reporter.on_task_complete(RunStage::Generate, "orphan", true);
        reporter.on_stage_complete(RunStage::Generate, true);
        reporter.on_stage_start(RunStage::AddTracks, 2);
        reporter.on_task_complete(RunStage::AddTracks, "batch 1/2 (100 tracks)", true);
        reporter.on_stage_complete(RunStage::AddTracks, false);
        assert!(reporter.stage_bar.lock().unwrap().is_none());
    }
}
