//! Progress bar display for deployments

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress display over the dependencies of a deployment
pub struct ProgressDisplay {
    dependency_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total dependency count
    pub fn new(total_dependencies: u64) -> Self {
        let dependency_pb = ProgressBar::new(total_dependencies);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            dependency_pb.set_style(style.progress_chars("#>-"));
        }

        Self { dependency_pb }
    }

    /// Progress display that never draws, for non-interactive output
    pub fn hidden(total_dependencies: u64) -> Self {
        let dependency_pb = ProgressBar::with_draw_target(
            Some(total_dependencies),
            ProgressDrawTarget::hidden(),
        );
        Self { dependency_pb }
    }

    /// Update to show the dependency currently being deployed
    pub fn update_dependency(&self, reference: &str, current: usize, total: usize) {
        let msg = format!("({current}/{total}) {reference}");
        self.dependency_pb.set_message(msg);
        self.dependency_pb.set_position(current.saturating_sub(1) as u64);
    }

    /// Run `f` with the bar temporarily cleared so log lines don't interleave
    pub fn suspend<F: FnOnce()>(&self, f: F) {
        self.dependency_pb.suspend(f);
    }

    pub fn finish(&self) {
        self.dependency_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.dependency_pb.abandon();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.dependency_pb.position()
    }
}
