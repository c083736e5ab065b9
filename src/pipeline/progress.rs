// file: src/pipeline/progress.rs
// description: progress tracking and statistics for batch ingestion
// reference: uses indicatif for progress bars and tracks submission metrics

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct IngestStats {
    pub files_scanned: usize,
    pub documents_accepted: usize,
    pub documents_rejected: usize,
    pub total_bytes_submitted: u64,
    pub duration_secs: u64,
}

impl IngestStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.documents_accepted as f64 / self.duration_secs as f64
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.documents_accepted + self.documents_rejected;
        if total == 0 {
            return 0.0;
        }
        (self.documents_accepted as f64 / total as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    files_scanned: usize,
    documents_accepted: Arc<AtomicUsize>,
    documents_rejected: Arc<AtomicUsize>,
    bytes_submitted: Arc<AtomicU64>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_files: usize) -> Self {
        Self::with_color(total_files, true)
    }

    pub fn with_color(total_files: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, total_files as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            files_scanned: total_files,
            documents_accepted: Arc::new(AtomicUsize::new(0)),
            documents_rejected: Arc::new(AtomicUsize::new(0)),
            bytes_submitted: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_accepted(&self) {
        self.documents_accepted.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_rejected(&self) {
        self.documents_rejected.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn add_bytes_submitted(&self, bytes: u64) {
        self.bytes_submitted.fetch_add(bytes, Ordering::SeqCst);
    }

    pub fn set_message(&self, message: String) {
        self.detail_bar.set_message(message);
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Submission complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> IngestStats {
        let duration = self.start_time.elapsed().as_secs();

        IngestStats {
            files_scanned: self.files_scanned,
            documents_accepted: self.documents_accepted.load(Ordering::SeqCst),
            documents_rejected: self.documents_rejected.load(Ordering::SeqCst),
            total_bytes_submitted: self.bytes_submitted.load(Ordering::SeqCst),
            duration_secs: duration,
        }
    }

    fn update_detail_bar(&self) {
        let accepted = self.documents_accepted.load(Ordering::SeqCst);
        let rejected = self.documents_rejected.load(Ordering::SeqCst);

        let message = format!("Accepted: {} | Rejected: {}", accepted, rejected);

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .expect("Failed to create detail bar template");
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_stats_calculations() {
        let mut stats = IngestStats::new();
        stats.documents_accepted = 90;
        stats.documents_rejected = 10;
        stats.duration_secs = 9;

        assert_eq!(stats.documents_per_second(), 10.0);
        assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ingest_stats_zero_duration() {
        let stats = IngestStats::new();
        assert_eq!(stats.documents_per_second(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::with_color(10, false);

        tracker.inc_accepted();
        tracker.inc_rejected();
        tracker.add_bytes_submitted(512);

        let stats = tracker.get_stats();
        assert_eq!(stats.files_scanned, 10);
        assert_eq!(stats.documents_accepted, 1);
        assert_eq!(stats.documents_rejected, 1);
        assert_eq!(stats.total_bytes_submitted, 512);
    }
}
